//! Population census of the forest

use crate::core_types::CellStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-status cell counts at a given tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Ticks completed so far
    pub tick: u64,
    /// Cells per status, indexed by [`CellStatus::index`]
    pub counts: [usize; 6],
}

impl SimulationStats {
    /// Census of `statuses` taken after `tick` ticks
    pub fn from_statuses(tick: u64, statuses: impl IntoIterator<Item = CellStatus>) -> Self {
        let mut counts = [0; 6];
        for status in statuses {
            counts[status.index()] += 1;
        }
        Self { tick, counts }
    }

    /// Cells currently in `status`
    pub fn count(&self, status: CellStatus) -> usize {
        self.counts[status.index()]
    }

    /// Total cells counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Cells in any fire phase
    pub fn burning(&self) -> usize {
        CellStatus::ALL
            .into_iter()
            .filter(|s| s.is_burning())
            .map(|s| self.count(s))
            .sum()
    }

    /// Share of the grid in `status` (0-1)
    pub fn fraction(&self, status: CellStatus) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(status) as f64 / total as f64
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick {}:", self.tick)?;
        for status in CellStatus::ALL {
            write!(f, " {}={}", status, self.count(status))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_census_counts() {
        let stats = SimulationStats::from_statuses(
            3,
            [
                CellStatus::Young,
                CellStatus::Young,
                CellStatus::Burning,
                CellStatus::StartBurning,
                CellStatus::Ashes,
            ],
        );
        assert_eq!(stats.tick, 3);
        assert_eq!(stats.total(), 5);
        assert_eq!(stats.count(CellStatus::Young), 2);
        assert_eq!(stats.count(CellStatus::Mature), 0);
        assert_eq!(stats.burning(), 2);
        assert!((stats.fraction(CellStatus::Young) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_empty_census() {
        let stats = SimulationStats::default();
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.fraction(CellStatus::Ashes), 0.0);
    }

    #[test]
    fn test_display_lists_every_status() {
        let stats = SimulationStats::from_statuses(1, [CellStatus::Mature]);
        assert_eq!(
            stats.to_string(),
            "tick 1: young=0 mature=1 start-burning=0 burning=0 end-burning=0 ashes=0"
        );
    }
}
