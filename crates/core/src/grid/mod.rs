//! Grid storage and neighborhood sampling

pub mod forest_grid;
pub mod neighbors;

// Re-export main types
pub use forest_grid::ForestGrid;
pub use neighbors::{Direction, NeighborCounts, Neighborhood};
