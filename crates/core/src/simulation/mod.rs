//! Forest fire simulation context
//!
//! `ForestSimulation` owns the grid and the draw source and advances the
//! automaton one tick at a time:
//! - cells are visited in row-major order (rows outer, columns inner)
//! - each cell's neighborhood is sampled and reduced to [`NeighborCounts`]
//! - the transition rule for the cell's status decides its next status
//!
//! With [`UpdateMode::InPlace`] (the default) every decision is written back
//! immediately, so cells later in the scan see this tick's earlier updates.
//! [`UpdateMode::DoubleBuffered`] reads a snapshot frozen at tick start.

pub mod config;
pub mod stats;

pub use config::{ConfigError, SimulationConfig, UpdateMode};
pub use stats::SimulationStats;

use crate::core_types::CellStatus;
use crate::grid::{neighbors, ForestGrid, NeighborCounts};
use crate::rules::{next_status, DrawSource, SeededDraw};
use tracing::{debug, info, Level};

/// Forest fire cellular automaton
#[derive(Debug, Clone)]
pub struct ForestSimulation<D = SeededDraw> {
    grid: ForestGrid,
    draws: D,
    update_mode: UpdateMode,
    tick: u64,
    /// Reused start-of-tick statuses for double-buffered ticks
    snapshot: Vec<CellStatus>,
}

impl ForestSimulation<SeededDraw> {
    /// Create a simulation from a validated config with a seeded generator
    ///
    /// # Errors
    /// Returns the [`ConfigError`] reported by [`SimulationConfig::validate`].
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let draws = config
            .seed
            .map_or_else(SeededDraw::from_entropy, SeededDraw::from_seed);

        info!(
            "Creating forest simulation: {}x{} grid, seed={}, mode={:?}",
            config.rows,
            config.cols,
            draws.seed(),
            config.update_mode
        );

        let grid = ForestGrid::new(
            config.rows,
            config.cols,
            config.cell_size,
            config.initial_status,
        )?;

        Ok(Self::with_grid(grid, draws, config.update_mode))
    }

    /// Seed of the generator driving this run
    pub fn seed(&self) -> u64 {
        self.draws.seed()
    }
}

impl<D: DrawSource> ForestSimulation<D> {
    /// Wrap an existing grid and draw source
    pub fn with_grid(grid: ForestGrid, draws: D, update_mode: UpdateMode) -> Self {
        Self {
            grid,
            draws,
            update_mode,
            tick: 0,
            snapshot: Vec::new(),
        }
    }

    /// Grid height in cells; fixed for the simulation's lifetime
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Grid width in cells; fixed for the simulation's lifetime
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Read-only view of the grid for renderers
    pub fn grid(&self) -> &ForestGrid {
        &self.grid
    }

    /// Status at an in-bounds coordinate
    pub fn status_at(&self, row: usize, col: usize) -> CellStatus {
        self.grid.status_at(row, col)
    }

    /// Status at a coordinate, `None` when out of bounds
    pub fn get_status(&self, row: usize, col: usize) -> Option<CellStatus> {
        self.grid.get(row, col).map(|cell| cell.status())
    }

    /// Overwrite a cell's status; returns false when out of bounds
    pub fn set_status(&mut self, row: usize, col: usize, status: CellStatus) -> bool {
        match self.grid.get_mut(row, col) {
            Some(cell) => {
                cell.set_status(status);
                true
            }
            None => false,
        }
    }

    /// Set a cell on fire; returns false when out of bounds
    pub fn ignite(&mut self, row: usize, col: usize) -> bool {
        let ignited = self.set_status(row, col, CellStatus::StartBurning);
        if ignited {
            info!("Igniting cell ({}, {})", row, col);
        }
        ignited
    }

    /// Ticks completed so far
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    /// Switch commit strategy; takes effect from the next tick
    pub fn set_update_mode(&mut self, mode: UpdateMode) {
        self.update_mode = mode;
    }

    /// Draw source driving the rules
    pub fn draws(&self) -> &D {
        &self.draws
    }

    /// Population census of the current grid
    pub fn stats(&self) -> SimulationStats {
        SimulationStats::from_statuses(self.tick, self.grid.statuses())
    }

    /// Neighbor counts of `(row, col)` as the next in-place visit would see them
    pub fn neighbor_counts(&self, row: usize, col: usize) -> NeighborCounts {
        neighbors::sample(&self.grid, row, col).counts()
    }

    /// Advance every cell by exactly one step
    pub fn tick(&mut self) {
        match self.update_mode {
            UpdateMode::InPlace => self.tick_in_place(),
            UpdateMode::DoubleBuffered => self.tick_double_buffered(),
        }
        self.tick += 1;

        if tracing::enabled!(Level::DEBUG) {
            let stats = self.stats();
            debug!(
                "Tick {} complete: burning={}, mature={}, ashes={}",
                self.tick,
                stats.burning(),
                stats.count(CellStatus::Mature),
                stats.count(CellStatus::Ashes)
            );
        }
    }

    /// Run `ticks` consecutive ticks
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    fn tick_in_place(&mut self) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        for row in 0..rows {
            for col in 0..cols {
                let counts = neighbors::sample(&self.grid, row, col).counts();
                let cell = self.grid.cell_at_mut(row, col);
                let next = next_status(cell.status(), counts, &mut self.draws);
                cell.set_status(next);
            }
        }
    }

    fn tick_double_buffered(&mut self) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        self.grid.copy_statuses_into(&mut self.snapshot);

        for row in 0..rows {
            for col in 0..cols {
                let counts =
                    neighbors::sample_snapshot(&self.snapshot, rows, cols, row, col).counts();
                let current = self.snapshot[row * cols + col];
                let next = next_status(current, counts, &mut self.draws);
                self.grid.cell_at_mut(row, col).set_status(next);
            }
        }
    }
}
