use forest_fire_core::{CellStatus, ForestCell, SimulationStats};

use crate::error::{DefaultForestSimError, ForestSimErrorCode};
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, track_error, with_forest_sim};
use crate::instance::ForestSimInstance;

#[repr(C)]
/// FFI-friendly population census.
/// Keep this layout stable for C/C++/C# consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForestSimStats {
    /// Ticks completed so far.
    pub tick: u64,
    pub young: usize,
    pub mature: usize,
    pub start_burning: usize,
    pub burning: usize,
    pub end_burning: usize,
    pub ashes: usize,
}

impl From<SimulationStats> for ForestSimStats {
    fn from(stats: SimulationStats) -> Self {
        Self {
            tick: stats.tick,
            young: stats.count(CellStatus::Young),
            mature: stats.count(CellStatus::Mature),
            start_burning: stats.count(CellStatus::StartBurning),
            burning: stats.count(CellStatus::Burning),
            end_burning: stats.count(CellStatus::EndBurning),
            ashes: stats.count(CellStatus::Ashes),
        }
    }
}

/// Grid height in cells, or 0 if `ptr` is null or the lock is poisoned.
///
/// # Safety
/// `ptr` must be null or a valid pointer returned by `forest_sim_new`.
#[no_mangle]
pub unsafe extern "C" fn forest_sim_rows(ptr: *const ForestSimInstance) -> usize {
    unsafe { instance_from_ptr(ptr) }
        .and_then(|instance| with_forest_sim(instance, |sim| sim.rows()))
        .unwrap_or(0)
}

/// Grid width in cells, or 0 if `ptr` is null or the lock is poisoned.
///
/// # Safety
/// `ptr` must be null or a valid pointer returned by `forest_sim_new`.
#[no_mangle]
pub unsafe extern "C" fn forest_sim_cols(ptr: *const ForestSimInstance) -> usize {
    unsafe { instance_from_ptr(ptr) }
        .and_then(|instance| with_forest_sim(instance, |sim| sim.cols()))
        .unwrap_or(0)
}

/// Read the status of one cell (encoded as in `ForestSimConfig::initial_status`).
///
/// Returns
/// - `ForestSimErrorCode::Ok` with `out_status` set
/// - `ForestSimErrorCode::OutOfBounds` if the coordinate is outside the grid
/// - `ForestSimErrorCode::NullPointer` if `ptr` or `out_status` is null
///
/// # Safety
/// - `ptr` must be null or a valid pointer returned by `forest_sim_new`.
/// - `out_status` must be null or valid for a one-byte write.
#[no_mangle]
pub unsafe extern "C" fn forest_sim_get_status(
    ptr: *const ForestSimInstance,
    row: usize,
    col: usize,
    out_status: *mut u8,
) -> ForestSimErrorCode {
    if out_status.is_null() {
        return track_error(&DefaultForestSimError::null_pointer("out_status"));
    }

    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr)? };
        let status = with_forest_sim(instance, |sim| {
            sim.get_status(row, col)
                .ok_or_else(|| DefaultForestSimError::out_of_bounds(row, col, sim.rows(), sim.cols()))
        })??;
        unsafe {
            *out_status = status.as_u8();
        }
        Ok(())
    })
}

/// Read the render position of one cell: pixel `(col * cell_size, row * cell_size)`.
///
/// Returns
/// - `ForestSimErrorCode::Ok` with `out_x` and `out_y` set
/// - `ForestSimErrorCode::OutOfBounds` if the coordinate is outside the grid
/// - `ForestSimErrorCode::NullPointer` if any pointer is null
///
/// # Safety
/// - `ptr` must be null or a valid pointer returned by `forest_sim_new`.
/// - `out_x` and `out_y` must be null or valid for a `u32` write.
#[no_mangle]
pub unsafe extern "C" fn forest_sim_get_position(
    ptr: *const ForestSimInstance,
    row: usize,
    col: usize,
    out_x: *mut u32,
    out_y: *mut u32,
) -> ForestSimErrorCode {
    if out_x.is_null() {
        return track_error(&DefaultForestSimError::null_pointer("out_x"));
    }
    if out_y.is_null() {
        return track_error(&DefaultForestSimError::null_pointer("out_y"));
    }

    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr)? };
        let position = with_forest_sim(instance, |sim| {
            sim.grid()
                .get(row, col)
                .map(ForestCell::position)
                .ok_or_else(|| DefaultForestSimError::out_of_bounds(row, col, sim.rows(), sim.cols()))
        })??;
        unsafe {
            *out_x = position.x;
            *out_y = position.y;
        }
        Ok(())
    })
}

/// Copy every cell status into a caller-owned buffer, row-major.
///
/// The buffer must hold at least `rows * cols` bytes; `out_written` receives
/// the number of bytes written. Intended for renderers drawing a whole frame.
///
/// Returns
/// - `ForestSimErrorCode::Ok` on success
/// - `ForestSimErrorCode::InvalidParameter` if `len` is smaller than the grid
/// - `ForestSimErrorCode::NullPointer` if any pointer is null
///
/// # Safety
/// - `ptr` must be null or a valid pointer returned by `forest_sim_new`.
/// - `out_buffer` must be valid for `len` bytes of writes.
/// - `out_written` must be null or valid for a `usize` write.
#[no_mangle]
pub unsafe extern "C" fn forest_sim_copy_statuses(
    ptr: *const ForestSimInstance,
    out_buffer: *mut u8,
    len: usize,
    out_written: *mut usize,
) -> ForestSimErrorCode {
    if out_buffer.is_null() {
        return track_error(&DefaultForestSimError::null_pointer("out_buffer"));
    }
    if out_written.is_null() {
        return track_error(&DefaultForestSimError::null_pointer("out_written"));
    }

    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr)? };
        // SAFETY: caller guarantees `out_buffer` is valid for `len` bytes.
        let buffer = unsafe { std::slice::from_raw_parts_mut(out_buffer, len) };

        let written = with_forest_sim(instance, |sim| {
            let cells = sim.grid().len();
            if len < cells {
                return Err(DefaultForestSimError::invalid_parameter(format!(
                    "buffer holds {len} bytes but the grid has {cells} cells"
                )));
            }
            for (slot, status) in buffer.iter_mut().zip(sim.grid().statuses()) {
                *slot = status.as_u8();
            }
            Ok(cells)
        })??;

        unsafe {
            *out_written = written;
        }
        Ok(())
    })
}

/// Get the population census.
///
/// Returns
/// - `ForestSimErrorCode::Ok` with `out_stats` populated
/// - `ForestSimErrorCode::NullPointer` if `ptr` or `out_stats` is null
///
/// # Safety
/// - `ptr` must be null or a valid pointer returned by `forest_sim_new`.
/// - `out_stats` must be null or valid for a `ForestSimStats` write.
#[no_mangle]
pub unsafe extern "C" fn forest_sim_get_stats(
    ptr: *const ForestSimInstance,
    out_stats: *mut ForestSimStats,
) -> ForestSimErrorCode {
    if out_stats.is_null() {
        return track_error(&DefaultForestSimError::null_pointer("out_stats"));
    }

    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr)? };
        let stats = with_forest_sim(instance, |sim| sim.stats())?;
        unsafe {
            *out_stats = stats.into();
        }
        Ok(())
    })
}
