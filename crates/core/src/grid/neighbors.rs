//! Moore-neighborhood sampling with hard grid edges
//!
//! Neighbors are visited in the fixed order N, NE, NW, W, E, S, SE, SW.
//! There is no wraparound: corner cells see 3 neighbors, edge cells 5 and
//! interior cells 8.

use super::ForestGrid;
use crate::core_types::CellStatus;
use std::iter::Copied;
use std::slice;

/// Compass direction of a neighbor relative to the sampled cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    NorthWest,
    West,
    East,
    South,
    SouthEast,
    SouthWest,
}

/// Statuses of the neighbors that exist around one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    entries: [(Direction, CellStatus); 8],
    len: usize,
}

impl Neighborhood {
    fn empty() -> Self {
        Self {
            entries: [(Direction::North, CellStatus::Young); 8],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, direction: Direction, status: CellStatus) {
        self.entries[self.len] = (direction, status);
        self.len += 1;
    }

    /// Number of neighbors inside the grid
    pub fn len(&self) -> usize {
        self.len
    }

    /// True only for a 1x1 grid
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sampled `(direction, status)` pairs in visiting order
    pub fn iter(&self) -> Copied<slice::Iter<'_, (Direction, CellStatus)>> {
        self.entries[..self.len].iter().copied()
    }

    /// Directions present, in visiting order
    pub fn directions(&self) -> Vec<Direction> {
        self.iter().map(|(direction, _)| direction).collect()
    }

    /// Aggregate the statuses the transition rules look at
    pub fn counts(&self) -> NeighborCounts {
        NeighborCounts::from_statuses(self.iter().map(|(_, status)| status))
    }
}

impl<'a> IntoIterator for &'a Neighborhood {
    type Item = (Direction, CellStatus);
    type IntoIter = Copied<slice::Iter<'a, (Direction, CellStatus)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Per-cell, per-tick counts of the neighbor statuses that drive transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborCounts {
    pub start_burning: u8,
    pub burning: u8,
    pub end_burning: u8,
    pub mature: u8,
}

impl NeighborCounts {
    /// Count the relevant statuses; `Young` and `Ashes` are ignored
    pub fn from_statuses(statuses: impl IntoIterator<Item = CellStatus>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            match status {
                CellStatus::StartBurning => counts.start_burning += 1,
                CellStatus::Burning => counts.burning += 1,
                CellStatus::EndBurning => counts.end_burning += 1,
                CellStatus::Mature => counts.mature += 1,
                CellStatus::Young | CellStatus::Ashes => {}
            }
        }
        counts
    }
}

/// Sample the neighborhood of `(row, col)` through an arbitrary status lookup.
///
/// `status_at` is only ever called with in-bounds coordinates of a
/// `rows x cols` grid, which lets the same sampler read either the live grid
/// or a row-major snapshot of it.
pub fn sample_with<F>(rows: usize, cols: usize, row: usize, col: usize, status_at: F) -> Neighborhood
where
    F: Fn(usize, usize) -> CellStatus,
{
    let mut hood = Neighborhood::empty();

    let has_north = row > 0;
    let has_south = row + 1 < rows;
    let has_west = col > 0;
    let has_east = col + 1 < cols;

    if has_north {
        hood.push(Direction::North, status_at(row - 1, col));

        if has_east {
            hood.push(Direction::NorthEast, status_at(row - 1, col + 1));
        }

        if has_west {
            hood.push(Direction::NorthWest, status_at(row - 1, col - 1));
        }
    }

    if has_west {
        hood.push(Direction::West, status_at(row, col - 1));
    }

    if has_east {
        hood.push(Direction::East, status_at(row, col + 1));
    }

    if has_south {
        hood.push(Direction::South, status_at(row + 1, col));

        if has_east {
            hood.push(Direction::SouthEast, status_at(row + 1, col + 1));
        }

        if has_west {
            hood.push(Direction::SouthWest, status_at(row + 1, col - 1));
        }
    }

    hood
}

/// Sample the live neighborhood of `(row, col)` on `grid`
pub fn sample(grid: &ForestGrid, row: usize, col: usize) -> Neighborhood {
    sample_with(grid.rows(), grid.cols(), row, col, |r, c| grid.status_at(r, c))
}

/// Sample `(row, col)` from a row-major status snapshot of a `rows x cols` grid
pub fn sample_snapshot(
    snapshot: &[CellStatus],
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> Neighborhood {
    sample_with(rows, cols, row, col, |r, c| snapshot[r * cols + c])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> ForestGrid {
        ForestGrid::new(3, 3, 1, CellStatus::Young).unwrap()
    }

    #[test]
    fn test_corner_sees_east_south_southeast() {
        let grid = grid_3x3();
        let hood = sample(&grid, 0, 0);
        assert_eq!(hood.len(), 3);
        assert_eq!(
            hood.directions(),
            vec![Direction::East, Direction::South, Direction::SouthEast]
        );
    }

    #[test]
    fn test_edge_sees_five() {
        let grid = grid_3x3();
        let hood = sample(&grid, 0, 1);
        assert_eq!(hood.len(), 5);
        assert_eq!(
            hood.directions(),
            vec![
                Direction::West,
                Direction::East,
                Direction::South,
                Direction::SouthEast,
                Direction::SouthWest
            ]
        );
    }

    #[test]
    fn test_center_sees_all_eight_in_order() {
        let grid = grid_3x3();
        let hood = sample(&grid, 1, 1);
        assert_eq!(
            hood.directions(),
            vec![
                Direction::North,
                Direction::NorthEast,
                Direction::NorthWest,
                Direction::West,
                Direction::East,
                Direction::South,
                Direction::SouthEast,
                Direction::SouthWest
            ]
        );
    }

    #[test]
    fn test_every_position_on_3x3() {
        let grid = grid_3x3();
        for (row, col) in grid.coordinates() {
            let on_row_edge = row == 0 || row == 2;
            let on_col_edge = col == 0 || col == 2;
            let expected = match (on_row_edge, on_col_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            assert_eq!(sample(&grid, row, col).len(), expected, "cell ({row}, {col})");
        }
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = ForestGrid::new(1, 1, 1, CellStatus::Young).unwrap();
        assert!(sample(&grid, 0, 0).is_empty());
    }

    #[test]
    fn test_counts_ignore_young_and_ashes() {
        let statuses = [
            CellStatus::StartBurning,
            CellStatus::Burning,
            CellStatus::Burning,
            CellStatus::Young,
            CellStatus::Mature,
            CellStatus::EndBurning,
            CellStatus::Ashes,
            CellStatus::Mature,
            CellStatus::Mature,
        ];
        let grid = ForestGrid::from_statuses(3, 3, 1, &statuses).unwrap();
        let counts = sample(&grid, 1, 1).counts();

        // The centre cell itself (Mature) is excluded
        assert_eq!(
            counts,
            NeighborCounts {
                start_burning: 1,
                burning: 2,
                end_burning: 1,
                mature: 2,
            }
        );
    }

    #[test]
    fn test_snapshot_matches_live_grid() {
        let statuses = [
            CellStatus::Mature,
            CellStatus::Burning,
            CellStatus::Young,
            CellStatus::Ashes,
            CellStatus::Mature,
            CellStatus::EndBurning,
        ];
        let grid = ForestGrid::from_statuses(2, 3, 1, &statuses).unwrap();
        for (row, col) in grid.coordinates() {
            assert_eq!(
                sample(&grid, row, col),
                sample_snapshot(&statuses, 2, 3, row, col)
            );
        }
    }
}
