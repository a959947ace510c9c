use forest_fire_core::ConfigError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait ForestSimError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> ForestSimErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `ForestSimError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultForestSimError {
    code: ForestSimErrorCode,
    msg: String,
}

impl DefaultForestSimError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_instance"`, `"ptr"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: ForestSimErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for poisoned lock.
    pub fn lock_poisoned(lock_name: &str) -> Self {
        Self {
            code: ForestSimErrorCode::LockPoisoned,
            msg: format!("Lock '{lock_name}' was poisoned by a panic in another thread"),
        }
    }

    /// Create error for a coordinate outside the grid.
    pub fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self {
            code: ForestSimErrorCode::OutOfBounds,
            msg: format!("Cell ({row}, {col}) is outside the {rows}x{cols} grid"),
        }
    }

    /// Create error for invalid parameter.
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: ForestSimErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl From<ConfigError> for DefaultForestSimError {
    fn from(error: ConfigError) -> Self {
        Self {
            code: ForestSimErrorCode::InvalidConfig,
            msg: format!("Invalid simulation config: {error}"),
        }
    }
}

impl ForestSimError for DefaultForestSimError {
    fn code(&self) -> ForestSimErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by forest simulation functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForestSimErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Lock poisoned: internal synchronization primitive was poisoned by a panic.
    LockPoisoned = 2,

    /// Invalid config: empty grid, zero cell size or pixel positions beyond `u32`.
    InvalidConfig = 3,

    /// Cell coordinate outside the grid.
    OutOfBounds = 4,

    /// Invalid parameter passed to function.
    InvalidParameter = 5,
}

impl From<DefaultForestSimError> for ForestSimErrorCode {
    fn from(error: DefaultForestSimError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, ForestSimErrorCode)> = const { RefCell::new((None, ForestSimErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, ForestSimErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, ForestSimErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if no error has occurred.
///
/// Error messages are stored per-thread. The returned pointer is valid until
/// the next FFI call on this thread that sets or clears the error.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// ForestSimInstance* sim = nullptr;
/// ForestSimErrorCode err = forest_sim_new(config, &sim);
/// if (err != Ok) {
///     const char* error = forest_sim_get_last_error();
///     if (error) {
///         printf("Forest sim creation failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn forest_sim_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `ForestSimErrorCode::Ok` (0) if no error has occurred on this thread.
#[no_mangle]
pub extern "C" fn forest_sim_get_last_error_code() -> ForestSimErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
