//! Fixed-size rectangular forest grid
//!
//! Cells live in one contiguous row-major buffer: `[row * cols + col]`.
//! The shape is fixed at construction and every in-bounds coordinate maps to
//! exactly one cell for the grid's whole lifetime.

use crate::core_types::{CellPosition, CellStatus, ForestCell};
use crate::simulation::ConfigError;
use serde::{Deserialize, Serialize};

/// Rectangular grid of forest cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestGrid {
    rows: usize,
    cols: usize,
    /// Cells in row-major order
    cells: Vec<ForestCell>,
}

impl ForestGrid {
    /// Create a grid where every cell starts in `initial`
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroRows`] or [`ConfigError::ZeroCols`] for an empty shape,
    /// or [`ConfigError::PositionOverflow`] when pixel positions exceed `u32`.
    pub fn new(
        rows: usize,
        cols: usize,
        cell_size: u32,
        initial: CellStatus,
    ) -> Result<Self, ConfigError> {
        Self::check_shape(rows, cols, cell_size)?;

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let position = Self::position(rows, cols, row, col, cell_size)?;
                cells.push(ForestCell::new(position, initial));
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Create a grid from explicit row-major initial statuses
    ///
    /// # Errors
    /// Returns a shape error for zero dimensions, or
    /// [`ConfigError::CellCountMismatch`] when `statuses.len() != rows * cols`.
    pub fn from_statuses(
        rows: usize,
        cols: usize,
        cell_size: u32,
        statuses: &[CellStatus],
    ) -> Result<Self, ConfigError> {
        Self::check_shape(rows, cols, cell_size)?;

        let expected = rows * cols;
        if statuses.len() != expected {
            return Err(ConfigError::CellCountMismatch {
                expected,
                actual: statuses.len(),
            });
        }

        let cells = statuses
            .iter()
            .enumerate()
            .map(|(idx, &status)| {
                Self::position(rows, cols, idx / cols, idx % cols, cell_size)
                    .map(|position| ForestCell::new(position, status))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows, cols, cells })
    }

    fn check_shape(rows: usize, cols: usize, cell_size: u32) -> Result<(), ConfigError> {
        if rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        // Positions grow with row and column, so the last cell bounds them all
        Self::position(rows, cols, rows - 1, cols - 1, cell_size).map(|_| ())
    }

    fn position(
        rows: usize,
        cols: usize,
        row: usize,
        col: usize,
        cell_size: u32,
    ) -> Result<CellPosition, ConfigError> {
        CellPosition::from_grid(row, col, cell_size).ok_or(ConfigError::PositionOverflow {
            rows,
            cols,
            cell_size,
        })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`)
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty shapes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn cell_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Cell at `(row, col)`.
    ///
    /// Coordinates must be in bounds; callers derive them from bounded iteration.
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> &ForestCell {
        &self.cells[self.cell_index(row, col)]
    }

    /// Mutable cell at `(row, col)`; same precondition as [`Self::cell_at`]
    #[inline]
    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> &mut ForestCell {
        let idx = self.cell_index(row, col);
        &mut self.cells[idx]
    }

    /// Status at `(row, col)`; same precondition as [`Self::cell_at`]
    #[inline]
    pub fn status_at(&self, row: usize, col: usize) -> CellStatus {
        self.cell_at(row, col).status
    }

    /// Bounds-checked lookup for callers outside the engine (UI, C API)
    pub fn get(&self, row: usize, col: usize) -> Option<&ForestCell> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Bounds-checked mutable lookup
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut ForestCell> {
        if row < self.rows && col < self.cols {
            Some(&mut self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[ForestCell] {
        &self.cells
    }

    /// All statuses in row-major order
    pub fn statuses(&self) -> impl Iterator<Item = CellStatus> + '_ {
        self.cells.iter().map(|cell| cell.status)
    }

    /// Copy statuses into `out` (row-major); used for double-buffered ticks.
    pub(crate) fn copy_statuses_into(&self, out: &mut Vec<CellStatus>) {
        out.clear();
        out.extend(self.statuses());
    }

    /// Every coordinate in row-major order
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_has_rows_times_cols_cells() {
        let grid = ForestGrid::new(4, 7, 5, CellStatus::Young).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.len(), 28);
        assert!(!grid.is_empty());
        assert!(grid.statuses().all(|s| s == CellStatus::Young));
        assert_eq!(grid.cells().len(), grid.len());
        assert_eq!(grid.cells()[8].position(), CellPosition::new(5, 5));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            ForestGrid::new(0, 5, 5, CellStatus::Young).unwrap_err(),
            ConfigError::ZeroRows
        );
        assert_eq!(
            ForestGrid::new(5, 0, 5, CellStatus::Young).unwrap_err(),
            ConfigError::ZeroCols
        );
    }

    #[test]
    fn test_from_statuses_is_row_major() {
        let statuses = [
            CellStatus::Young,
            CellStatus::Mature,
            CellStatus::Burning,
            CellStatus::Ashes,
            CellStatus::StartBurning,
            CellStatus::EndBurning,
        ];
        let grid = ForestGrid::from_statuses(2, 3, 10, &statuses).unwrap();

        assert_eq!(grid.status_at(0, 1), CellStatus::Mature);
        assert_eq!(grid.status_at(1, 0), CellStatus::Ashes);
        assert_eq!(grid.status_at(1, 2), CellStatus::EndBurning);
        assert_eq!(grid.cell_at(1, 2).position(), CellPosition::new(20, 10));
    }

    #[test]
    fn test_position_overflow_rejected() {
        let huge = u32::MAX / 2 + 1;
        assert_eq!(
            ForestGrid::new(3, 3, huge, CellStatus::Young).unwrap_err(),
            ConfigError::PositionOverflow {
                rows: 3,
                cols: 3,
                cell_size: huge
            }
        );
        assert!(matches!(
            ForestGrid::from_statuses(1, 3, huge, &[CellStatus::Mature; 3]),
            Err(ConfigError::PositionOverflow { .. })
        ));
        // Two columns still fit: the last cell sits at x = huge
        let grid = ForestGrid::new(1, 2, huge, CellStatus::Young).unwrap();
        assert_eq!(grid.cell_at(0, 1).position(), CellPosition::new(huge, 0));
    }

    #[test]
    fn test_from_statuses_length_mismatch() {
        let err = ForestGrid::from_statuses(2, 2, 5, &[CellStatus::Young; 3]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::CellCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_checked_lookup() {
        let mut grid = ForestGrid::new(2, 2, 5, CellStatus::Young).unwrap();
        assert!(grid.get(1, 1).is_some());
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(0, 2).is_none());

        grid.get_mut(1, 0).unwrap().set_status(CellStatus::Ashes);
        assert_eq!(grid.status_at(1, 0), CellStatus::Ashes);
    }

    #[test]
    fn test_coordinates_row_major() {
        let grid = ForestGrid::new(2, 3, 5, CellStatus::Young).unwrap();
        let coords: Vec<_> = grid.coordinates().collect();
        assert_eq!(
            coords,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    #[should_panic(expected = "out")]
    fn test_out_of_bounds_row_panics() {
        let grid = ForestGrid::new(2, 2, 5, CellStatus::Young).unwrap();
        let _ = grid.cell_at(2, 0);
    }
}
