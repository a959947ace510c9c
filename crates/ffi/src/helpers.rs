use crate::error::{with_last_error_mut, DefaultForestSimError, ForestSimError, ForestSimErrorCode};
use crate::instance::ForestSimInstance;
use forest_fire_core::ForestSimulation;
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `ForestSimError` trait.
pub(crate) fn set_last_error(error: &impl ForestSimError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl ForestSimError) -> ForestSimErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the error of a failed result and turn it into its code.
pub(crate) fn track_result<T>(result: Result<T, DefaultForestSimError>) -> Result<T, ForestSimErrorCode> {
    result.map_err(|error| track_error(&error))
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = ForestSimErrorCode::Ok;
    });
}

/// Run an FFI body, recording failure details or clearing stale ones.
pub(crate) fn handle_ffi_result_error<F>(body: F) -> ForestSimErrorCode
where
    F: FnOnce() -> Result<(), DefaultForestSimError>,
{
    match track_result(body()) {
        Ok(()) => {
            clear_last_error();
            ForestSimErrorCode::Ok
        }
        Err(code) => code,
    }
}

/// Borrow an instance from a caller-supplied pointer.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `forest_sim_new`.
pub(crate) unsafe fn instance_from_ptr<'a>(
    ptr: *const ForestSimInstance,
) -> Result<&'a ForestSimInstance, DefaultForestSimError> {
    // SAFETY: caller guarantees the pointer is either null or valid.
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultForestSimError::null_pointer("ptr"))
}

/// Run `func` under the instance's read lock.
pub(crate) fn with_forest_sim<F, T>(instance: &ForestSimInstance, func: F) -> Result<T, DefaultForestSimError>
where
    F: FnOnce(&ForestSimulation) -> T,
{
    let sim = instance
        .sim
        .read()
        .map_err(|_| DefaultForestSimError::lock_poisoned("RwLock"))?;
    Ok(func(&sim))
}

/// Run `func` under the instance's write lock.
pub(crate) fn with_forest_sim_mut<F, T>(instance: &ForestSimInstance, func: F) -> Result<T, DefaultForestSimError>
where
    F: FnOnce(&mut ForestSimulation) -> T,
{
    let mut sim = instance
        .sim
        .write()
        .map_err(|_| DefaultForestSimError::lock_poisoned("RwLock"))?;
    Ok(func(&mut sim))
}
