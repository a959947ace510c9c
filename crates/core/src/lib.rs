//! Forest Fire Automaton Core Library
//!
//! A probabilistic cellular automaton of a regrowing forest. Every cell is in
//! one of six states (young, mature, three fire phases, ashes) and each tick
//! decides its next state from its eight-cell neighborhood and one random draw.
//!
//! ## Layout
//!
//! - [`core_types`]: cell status and cell storage types
//! - [`grid`]: fixed-shape grid and neighborhood sampling
//! - [`rules`]: transition rules and the draw sources they consume
//! - [`simulation`]: the simulation context, configuration and census
//!
//! ```
//! use forest_fire_core::{ForestSimulation, SimulationConfig};
//!
//! let config = SimulationConfig::new(40, 60).with_seed(7);
//! let mut sim = ForestSimulation::new(&config).expect("valid config");
//! sim.ignite(20, 30);
//! sim.run(10);
//! assert_eq!(sim.stats().total(), 40 * 60);
//! ```

pub mod core_types;
pub mod grid;
pub mod rules;
pub mod simulation;

// Re-export core types
pub use core_types::{CellPosition, CellStatus, ForestCell};

// Re-export grid and rule types
pub use grid::{Direction, ForestGrid, NeighborCounts, Neighborhood};
pub use rules::{DrawSource, ScriptedDraw, SeededDraw};

// Re-export simulation types
pub use simulation::{ConfigError, ForestSimulation, SimulationConfig, SimulationStats, UpdateMode};
