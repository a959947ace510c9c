//! Core types shared by the grid, the rules and the simulation

pub mod cell;
pub mod status;

pub use cell::{CellPosition, ForestCell};
pub use status::CellStatus;
