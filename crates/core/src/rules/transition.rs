//! Per-state probabilistic transition rules
//!
//! Each rule is a single inclusive-range draw compared against a threshold,
//! which keeps the exact integer odds instead of floating-point probabilities.
//! Conditions are checked in priority order and the first match consumes the
//! only draw of the step.

use super::draw::DrawSource;
use crate::core_types::CellStatus;
use crate::grid::NeighborCounts;

/// One inclusive-range draw that succeeds when the value is `<= threshold`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chance {
    pub min: i32,
    pub max: i32,
    pub threshold: i32,
}

impl Chance {
    pub const fn new(min: i32, max: i32, threshold: i32) -> Self {
        Self {
            min,
            max,
            threshold,
        }
    }

    /// Consume one draw and report success
    #[inline]
    pub fn roll(self, draws: &mut impl DrawSource) -> bool {
        draws.draw(self.min, self.max) <= self.threshold
    }

    /// Exact success probability of one roll
    pub fn probability(self) -> f64 {
        let hits = f64::from(self.threshold - self.min + 1);
        let outcomes = f64::from(self.max - self.min + 1);
        hits / outcomes
    }
}

/// Ignition next to a `StartBurning` neighbor: 1 in 10
pub const IGNITE_FROM_START_BURNING: Chance = Chance::new(1, 10, 1);
/// Ignition next to a `Burning` neighbor: 2 in 10
pub const IGNITE_FROM_BURNING: Chance = Chance::new(1, 10, 2);
/// Ignition next to an `EndBurning` neighbor: 1 in 10
pub const IGNITE_FROM_END_BURNING: Chance = Chance::new(1, 10, 1);
/// Young growth maturing with no fire nearby: 5 in 1000
pub const MATURATION: Chance = Chance::new(1, 1000, 5);
/// Spontaneous ignition of crowded mature forest: 5 in 100000
pub const SPONTANEOUS_IGNITION: Chance = Chance::new(1, 100_000, 5);
/// Advancing one fire phase: 1 in 10
pub const FIRE_PHASE_ADVANCE: Chance = Chance::new(1, 10, 1);
/// Regrowth from ashes: 2 in 1001.
///
/// The range starts at 0, unlike maturation's `[1, 1000]`.
pub const REGROWTH: Chance = Chance::new(0, 1000, 1);

/// Mature neighbors needed before spontaneous ignition is possible
pub const CROWDED_MATURE_NEIGHBORS: u8 = 5;

/// Roll for ignition from the highest-priority burning neighbor.
///
/// Returns `None` without drawing when no neighbor is on fire.
fn ignite_from_neighbors(counts: NeighborCounts, draws: &mut impl DrawSource) -> Option<bool> {
    if counts.start_burning >= 1 {
        Some(IGNITE_FROM_START_BURNING.roll(draws))
    } else if counts.burning >= 1 {
        Some(IGNITE_FROM_BURNING.roll(draws))
    } else if counts.end_burning >= 1 {
        Some(IGNITE_FROM_END_BURNING.roll(draws))
    } else {
        None
    }
}

/// Decide the next status of a cell from its current status and neighbors
pub fn next_status(
    current: CellStatus,
    counts: NeighborCounts,
    draws: &mut impl DrawSource,
) -> CellStatus {
    match current {
        CellStatus::Young => match ignite_from_neighbors(counts, draws) {
            Some(true) => CellStatus::StartBurning,
            Some(false) => CellStatus::Young,
            None if MATURATION.roll(draws) => CellStatus::Mature,
            None => CellStatus::Young,
        },
        CellStatus::Mature => match ignite_from_neighbors(counts, draws) {
            Some(true) => CellStatus::StartBurning,
            Some(false) => CellStatus::Mature,
            None if counts.mature >= CROWDED_MATURE_NEIGHBORS
                && SPONTANEOUS_IGNITION.roll(draws) =>
            {
                CellStatus::StartBurning
            }
            None => CellStatus::Mature,
        },
        CellStatus::StartBurning => advance(current, CellStatus::Burning, FIRE_PHASE_ADVANCE, draws),
        CellStatus::Burning => advance(current, CellStatus::EndBurning, FIRE_PHASE_ADVANCE, draws),
        CellStatus::EndBurning => advance(current, CellStatus::Ashes, FIRE_PHASE_ADVANCE, draws),
        CellStatus::Ashes => advance(current, CellStatus::Young, REGROWTH, draws),
    }
}

#[inline]
fn advance(
    current: CellStatus,
    next: CellStatus,
    chance: Chance,
    draws: &mut impl DrawSource,
) -> CellStatus {
    if chance.roll(draws) {
        next
    } else {
        current
    }
}
