//! A single forest cell: render position plus lifecycle status

use super::status::CellStatus;
use serde::{Deserialize, Serialize};

/// Pixel position of a cell's top-left corner.
///
/// Only renderers care about this; the transition rules never read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellPosition {
    pub x: u32,
    pub y: u32,
}

impl CellPosition {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Position of the cell at `(row, col)` on a grid of `cell_size` pixel blocks.
    ///
    /// `None` when either pixel coordinate does not fit in `u32`.
    pub fn from_grid(row: usize, col: usize, cell_size: u32) -> Option<Self> {
        let x = u32::try_from(col).ok()?.checked_mul(cell_size)?;
        let y = u32::try_from(row).ok()?.checked_mul(cell_size)?;
        Some(Self { x, y })
    }
}

/// Forest cell owned by a [`crate::grid::ForestGrid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestCell {
    pub(crate) position: CellPosition,
    pub(crate) status: CellStatus,
}

impl ForestCell {
    /// Create a new cell
    pub fn new(position: CellPosition, status: CellStatus) -> Self {
        Self { position, status }
    }

    /// Get current status
    pub fn status(&self) -> CellStatus {
        self.status
    }

    /// Replace current status
    pub fn set_status(&mut self, status: CellStatus) {
        self.status = status;
    }

    /// Get render position
    pub fn position(&self) -> CellPosition {
        self.position
    }
}
