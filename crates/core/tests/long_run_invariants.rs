//! Multi-tick invariants and transition frequencies under seeded randomness

use approx::assert_relative_eq;
use forest_fire_core::{
    CellStatus, ForestGrid, ForestSimulation, SeededDraw, SimulationConfig, UpdateMode,
};

/// Fraction of a uniform 500x500 grid that reaches `to` after one seeded tick
fn one_tick_fraction(from: CellStatus, to: CellStatus, seed: u64) -> f64 {
    let config = SimulationConfig::new(500, 500)
        .with_seed(seed)
        .with_initial_status(from);
    let mut sim = ForestSimulation::new(&config).expect("valid config");
    sim.tick();
    sim.stats().fraction(to)
}

#[test]
fn test_grid_shape_never_changes() {
    let config = SimulationConfig::new(30, 45).with_seed(2024);
    let mut sim = ForestSimulation::new(&config).unwrap();
    sim.ignite(15, 22);

    for _ in 0..400 {
        sim.tick();
        assert_eq!(sim.rows(), 30);
        assert_eq!(sim.cols(), 45);
        assert_eq!(sim.grid().len(), 30 * 45);
        assert_eq!(sim.stats().total(), 30 * 45);
    }
    assert_eq!(sim.tick_count(), 400);
}

#[test]
fn test_statuses_stay_in_lifecycle() {
    let config = SimulationConfig::new(40, 40)
        .with_seed(77)
        .with_initial_status(CellStatus::Mature);
    let mut sim = ForestSimulation::new(&config).unwrap();
    sim.ignite(0, 0);
    sim.ignite(39, 39);
    sim.run(300);

    for status in sim.grid().statuses() {
        assert!(CellStatus::ALL.contains(&status));
        assert_eq!(CellStatus::from_u8(status.as_u8()), Some(status));
    }
}

#[test]
fn test_same_seed_reproduces_run() {
    let config = SimulationConfig::new(25, 25).with_seed(31337);

    let mut first = ForestSimulation::new(&config).unwrap();
    let mut second = ForestSimulation::new(&config).unwrap();
    first.ignite(12, 12);
    second.ignite(12, 12);
    first.run(150);
    second.run(150);

    assert_eq!(first.grid(), second.grid());
    assert_eq!(first.stats(), second.stats());
}

#[test]
fn test_fire_spreads_through_mature_forest() {
    let statuses = [CellStatus::Mature; 21 * 21];
    let grid = ForestGrid::from_statuses(21, 21, 5, &statuses).unwrap();
    let mut sim = ForestSimulation::with_grid(grid, SeededDraw::from_seed(9), UpdateMode::InPlace);
    sim.ignite(10, 10);

    let mut max_burning = 0;
    for _ in 0..60 {
        sim.tick();
        max_burning = max_burning.max(sim.stats().burning());
    }

    assert!(
        max_burning > 1,
        "fire should reach neighboring cells, peak burning = {max_burning}"
    );
}

#[test]
fn test_maturation_frequency() {
    let fraction = one_tick_fraction(CellStatus::Young, CellStatus::Mature, 1);
    assert_relative_eq!(fraction, 0.005, max_relative = 0.15);
}

#[test]
fn test_regrowth_frequency_uses_1001_outcomes() {
    let fraction = one_tick_fraction(CellStatus::Ashes, CellStatus::Young, 2);
    assert_relative_eq!(fraction, 2.0 / 1001.0, max_relative = 0.2);
}

#[test]
fn test_fire_phase_frequency() {
    let fraction = one_tick_fraction(CellStatus::EndBurning, CellStatus::Ashes, 3);
    assert_relative_eq!(fraction, 0.1, max_relative = 0.05);
}
