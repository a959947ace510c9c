//! Cell lifecycle states
//!
//! A cell cycles through growth, a three-phase burn and regrowth from ashes.
//! There is no terminal state: `Ashes` eventually returns to `Young`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete state of a single forest cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellStatus {
    /// Young growth; ignites from burning neighbors, slowly matures otherwise
    #[default]
    Young = 0,
    /// Mature forest; can also ignite spontaneously when densely surrounded
    Mature = 1,
    /// Ignition phase of a fire
    StartBurning = 2,
    /// Fully developed fire
    Burning = 3,
    /// Dying fire
    EndBurning = 4,
    /// Burnt-out ground awaiting regrowth
    Ashes = 5,
}

impl CellStatus {
    /// Every status in lifecycle order
    pub const ALL: [CellStatus; 6] = [
        CellStatus::Young,
        CellStatus::Mature,
        CellStatus::StartBurning,
        CellStatus::Burning,
        CellStatus::EndBurning,
        CellStatus::Ashes,
    ];

    /// Convert from u8 for FFI compatibility
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(CellStatus::Young),
            1 => Some(CellStatus::Mature),
            2 => Some(CellStatus::StartBurning),
            3 => Some(CellStatus::Burning),
            4 => Some(CellStatus::EndBurning),
            5 => Some(CellStatus::Ashes),
            _ => None,
        }
    }

    /// Convert to u8 for FFI compatibility
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Position of this status in [`CellStatus::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// True for the three fire phases
    pub fn is_burning(self) -> bool {
        matches!(
            self,
            CellStatus::StartBurning | CellStatus::Burning | CellStatus::EndBurning
        )
    }

    /// Short human-readable name
    pub fn name(self) -> &'static str {
        match self {
            CellStatus::Young => "young",
            CellStatus::Mature => "mature",
            CellStatus::StartBurning => "start-burning",
            CellStatus::Burning => "burning",
            CellStatus::EndBurning => "end-burning",
            CellStatus::Ashes => "ashes",
        }
    }
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
