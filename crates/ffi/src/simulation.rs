use crate::error::{DefaultForestSimError, ForestSimErrorCode};
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, with_forest_sim_mut};
use crate::instance::ForestSimInstance;
use forest_fire_core::CellStatus;

/// Advance the simulation by `ticks` full grid passes.
///
/// Thread-safe: acquires the `RwLock` write lock once for all ticks.
///
/// Returns
/// - `ForestSimErrorCode::Ok` on success (also when `ticks` is 0)
/// - `ForestSimErrorCode::NullPointer` if `ptr` is null
/// - `ForestSimErrorCode::LockPoisoned` if the internal lock is poisoned
///
/// # Safety
/// `ptr` must be null or a valid pointer returned by `forest_sim_new`.
#[no_mangle]
pub unsafe extern "C" fn forest_sim_tick(ptr: *const ForestSimInstance, ticks: u32) -> ForestSimErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr)? };
        with_forest_sim_mut(instance, |sim| sim.run(u64::from(ticks)))
    })
}

/// Overwrite the status of one cell.
///
/// `status` uses the same encoding as `ForestSimConfig::initial_status`.
///
/// Returns
/// - `ForestSimErrorCode::Ok` on success
/// - `ForestSimErrorCode::InvalidParameter` for an unknown status value
/// - `ForestSimErrorCode::OutOfBounds` if the coordinate is outside the grid
/// - `ForestSimErrorCode::NullPointer` if `ptr` is null
///
/// # Safety
/// `ptr` must be null or a valid pointer returned by `forest_sim_new`.
#[no_mangle]
pub unsafe extern "C" fn forest_sim_set_status(
    ptr: *const ForestSimInstance,
    row: usize,
    col: usize,
    status: u8,
) -> ForestSimErrorCode {
    handle_ffi_result_error(|| {
        let status = CellStatus::from_u8(status).ok_or_else(|| {
            DefaultForestSimError::invalid_parameter(format!("status must be 0-5, got {status}"))
        })?;
        let instance = unsafe { instance_from_ptr(ptr)? };
        with_forest_sim_mut(instance, |sim| {
            if sim.set_status(row, col, status) {
                Ok(())
            } else {
                Err(DefaultForestSimError::out_of_bounds(row, col, sim.rows(), sim.cols()))
            }
        })?
    })
}

/// Set one cell on fire (status `StartBurning`).
///
/// Same return codes as `forest_sim_set_status`, minus `InvalidParameter`.
///
/// # Safety
/// `ptr` must be null or a valid pointer returned by `forest_sim_new`.
#[no_mangle]
pub unsafe extern "C" fn forest_sim_ignite(
    ptr: *const ForestSimInstance,
    row: usize,
    col: usize,
) -> ForestSimErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr)? };
        with_forest_sim_mut(instance, |sim| {
            if sim.ignite(row, col) {
                Ok(())
            } else {
                Err(DefaultForestSimError::out_of_bounds(row, col, sim.rows(), sim.cols()))
            }
        })?
    })
}
