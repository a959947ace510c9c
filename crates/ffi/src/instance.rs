use forest_fire_core::{CellStatus, ForestSimulation, SimulationConfig, UpdateMode};
use std::ptr;
use std::sync::RwLock;

use crate::error::{DefaultForestSimError, ForestSimErrorCode};
use crate::helpers::{clear_last_error, track_error, track_result};

/// C-compatible simulation parameters.
///
/// Start from `forest_sim_default_config()` and override fields as needed.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestSimConfig {
    /// Grid height in cells (must be positive).
    pub rows: usize,
    /// Grid width in cells (must be positive).
    pub cols: usize,
    /// Pixel size of one cell, used for cell render positions (must be positive).
    pub cell_size: u32,
    /// Initial status of every cell: 0=Young, 1=Mature, 2=StartBurning,
    /// 3=Burning, 4=EndBurning, 5=Ashes.
    pub initial_status: u8,
    /// 0 = in-place updates, 1 = double-buffered updates.
    pub update_mode: u8,
    /// When false, the generator is seeded from OS entropy and `seed` is ignored.
    pub has_seed: bool,
    /// Generator seed used when `has_seed` is true.
    pub seed: u64,
}

impl TryFrom<ForestSimConfig> for SimulationConfig {
    type Error = DefaultForestSimError;

    fn try_from(raw: ForestSimConfig) -> Result<Self, Self::Error> {
        let initial_status = CellStatus::from_u8(raw.initial_status).ok_or_else(|| {
            DefaultForestSimError::invalid_parameter(format!(
                "initial_status must be 0-5, got {}",
                raw.initial_status
            ))
        })?;
        let update_mode = UpdateMode::from_u8(raw.update_mode).ok_or_else(|| {
            DefaultForestSimError::invalid_parameter(format!(
                "update_mode must be 0 or 1, got {}",
                raw.update_mode
            ))
        })?;

        let mut config = SimulationConfig::new(raw.rows, raw.cols)
            .with_cell_size(raw.cell_size)
            .with_initial_status(initial_status)
            .with_update_mode(update_mode);
        if raw.has_seed {
            config = config.with_seed(raw.seed);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Default parameters: 120x160 young forest, 5px cells, in-place updates, entropy seed.
#[no_mangle]
pub extern "C" fn forest_sim_default_config() -> ForestSimConfig {
    let defaults = SimulationConfig::default();
    ForestSimConfig {
        rows: defaults.rows,
        cols: defaults.cols,
        cell_size: defaults.cell_size,
        initial_status: defaults.initial_status.as_u8(),
        update_mode: 0,
        has_seed: false,
        seed: 0,
    }
}

/// The forest simulation handle shared with the host.
///
/// The simulation is protected by an `RwLock`, so status queries from render
/// threads can run concurrently while `forest_sim_tick` takes the write lock.
pub struct ForestSimInstance {
    pub(crate) sim: RwLock<ForestSimulation>,
}

impl ForestSimInstance {
    /// Validate the raw config and build the simulation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for unknown status or mode values and
    /// `InvalidConfig` for zero rows, columns or cell size.
    pub(crate) fn new(raw: ForestSimConfig) -> Result<Box<Self>, DefaultForestSimError> {
        let config = SimulationConfig::try_from(raw)?;
        let sim = ForestSimulation::new(&config)?;

        Ok(Box::new(Self {
            sim: RwLock::new(sim),
        }))
    }
}

/// Create a new forest simulation and return it via out-parameter.
///
/// Returns
/// - `ForestSimErrorCode::Ok` (0): success, `out_instance` contains a valid pointer
/// - `ForestSimErrorCode::NullPointer`: `out_instance` is null
/// - `ForestSimErrorCode::InvalidParameter`: unknown `initial_status` or `update_mode`
/// - `ForestSimErrorCode::InvalidConfig`: zero rows, columns or cell size, or a
///   cell size that pushes pixel positions beyond `u32`
///
/// Call `forest_sim_get_last_error()` for a human-readable description.
///
/// # Safety
///
/// - `out_instance` must be a valid, non-null pointer to writable memory.
/// - The caller takes ownership of the returned instance and MUST call
///   `forest_sim_destroy` exactly once.
///
/// Example (C)
/// ```c
/// ForestSimConfig config = forest_sim_default_config();
/// config.rows = 64;
/// config.cols = 64;
/// ForestSimInstance* sim = NULL;
/// if (forest_sim_new(config, &sim) != Ok) {
///     fprintf(stderr, "%s\n", forest_sim_get_last_error());
///     return;
/// }
/// forest_sim_tick(sim, 1);
/// forest_sim_destroy(sim);
/// ```
#[no_mangle]
pub unsafe extern "C" fn forest_sim_new(
    config: ForestSimConfig,
    out_instance: *mut *mut ForestSimInstance,
) -> ForestSimErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultForestSimError::null_pointer("out_instance"));
    }

    match track_result(ForestSimInstance::new(config)) {
        Ok(instance) => {
            unsafe {
                *out_instance = Box::into_raw(instance);
            }
            clear_last_error();
            ForestSimErrorCode::Ok
        }
        Err(code) => {
            unsafe {
                // Set to null on error (per documentation contract)
                *out_instance = ptr::null_mut();
            }
            code
        }
    }
}

/// Destroys an instance previously created by `forest_sim_new`.
///
/// If `ptr` is null, this function is a no-op.
///
/// # Safety
/// - The pointer MUST have been created by `forest_sim_new` and not freed already.
/// - After calling this function, the caller must not use the pointer again.
#[no_mangle]
pub unsafe extern "C" fn forest_sim_destroy(ptr: *mut ForestSimInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: The pointer was created by `Box::into_raw` in `forest_sim_new`
    // and has not been freed; reclaiming it runs the destructor.
    unsafe {
        drop(Box::from_raw(ptr));
    }
}
