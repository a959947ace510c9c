//! Simulation configuration and startup validation

use crate::core_types::{CellPosition, CellStatus};
use serde::{Deserialize, Serialize};

/// Default grid height in cells
pub const DEFAULT_ROWS: usize = 120;
/// Default grid width in cells
pub const DEFAULT_COLS: usize = 160;
/// Default render block size in pixels
pub const DEFAULT_CELL_SIZE: u32 = 5;
/// Default frame budget for launchers (ms)
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 100;

/// How a tick commits cell updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpdateMode {
    /// Each cell is rewritten as soon as it is decided, so cells later in
    /// row-major order already see this tick's earlier updates.
    #[default]
    InPlace,
    /// Every cell reads the statuses frozen at the start of the tick.
    ///
    /// Removes the scan-direction bias of [`UpdateMode::InPlace`] and
    /// therefore produces different spread dynamics.
    DoubleBuffered,
}

impl UpdateMode {
    /// Convert from u8 for FFI compatibility
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(UpdateMode::InPlace),
            1 => Some(UpdateMode::DoubleBuffered),
            _ => None,
        }
    }
}

/// Startup parameters for a [`super::ForestSimulation`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid height in cells
    pub rows: usize,
    /// Grid width in cells
    pub cols: usize,
    /// Pixel size of one cell, used to derive render positions
    pub cell_size: u32,
    /// Status every cell starts in
    pub initial_status: CellStatus,
    /// Generator seed; `None` draws one from OS entropy at startup
    pub seed: Option<u64>,
    /// Commit strategy for each tick
    pub update_mode: UpdateMode,
    /// Target wall-clock time per frame for launchers that pace ticks (ms)
    pub frame_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_size: DEFAULT_CELL_SIZE,
            initial_status: CellStatus::Young,
            seed: None,
            update_mode: UpdateMode::InPlace,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl SimulationConfig {
    /// Config for a `rows x cols` grid with every other field defaulted
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_initial_status(mut self, status: CellStatus) -> Self {
        self.initial_status = status;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_update_mode(mut self, mode: UpdateMode) -> Self {
        self.update_mode = mode;
        self
    }

    pub fn with_frame_interval_ms(mut self, interval_ms: u64) -> Self {
        self.frame_interval_ms = interval_ms;
        self
    }

    /// Check the config before any allocation happens
    ///
    /// # Errors
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(ConfigError::TooManyCells {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if CellPosition::from_grid(self.rows - 1, self.cols - 1, self.cell_size).is_none() {
            return Err(ConfigError::PositionOverflow {
                rows: self.rows,
                cols: self.cols,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }
}

/// Errors raised while setting up a simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid must have at least one row
    ZeroRows,
    /// Grid must have at least one column
    ZeroCols,
    /// Cells must be at least one pixel wide
    ZeroCellSize,
    /// `rows * cols` overflows
    TooManyCells { rows: usize, cols: usize },
    /// Pixel position of the last row or column does not fit in `u32`
    PositionOverflow {
        rows: usize,
        cols: usize,
        cell_size: u32,
    },
    /// Initial status buffer does not cover the grid exactly
    CellCountMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroRows => write!(f, "Grid rows must be positive"),
            ConfigError::ZeroCols => write!(f, "Grid cols must be positive"),
            ConfigError::ZeroCellSize => write!(f, "Cell size must be positive"),
            ConfigError::TooManyCells { rows, cols } => {
                write!(f, "Grid of {rows}x{cols} cells is too large")
            }
            ConfigError::PositionOverflow {
                rows,
                cols,
                cell_size,
            } => write!(
                f,
                "Cell size {cell_size} puts {rows}x{cols} cell positions beyond u32 pixels"
            ),
            ConfigError::CellCountMismatch { expected, actual } => {
                write!(f, "Expected {expected} initial statuses, got {actual}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
