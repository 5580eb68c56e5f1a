//! The fixed set of tracked elevators

use serde::{Serialize, Serializer};

use crate::errors::{Result, TrackerError};

struct ElevatorInfo {
    id: &'static str,
    wall: &'static str,
}

static ELEVATORS: [ElevatorInfo; 4] = [
    ElevatorInfo { id: "8240", wall: "⬛" },
    ElevatorInfo { id: "8241", wall: "🟧" },
    ElevatorInfo { id: "8242", wall: "🟧" },
    ElevatorInfo { id: "8243", wall: "⬛" },
];

// Mirrors the physical layout of the shafts.
static MENU_ORDER: [&str; 4] = ["8240", "8241", "8243", "8242"];

/// Identifier of a known elevator. Only constructible from the closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElevatorId(&'static str);

impl ElevatorId {
    /// Validate a raw id against the known elevators
    pub fn parse(raw: &str) -> Result<Self> {
        ELEVATORS
            .iter()
            .find(|e| e.id == raw)
            .map(|e| ElevatorId(e.id))
            .ok_or_else(|| TrackerError::UnknownElevator(raw.to_string()))
    }

    /// All elevators in id order
    pub fn all() -> impl Iterator<Item = ElevatorId> {
        ELEVATORS.iter().map(|e| ElevatorId(e.id))
    }

    /// All elevators in the order the menu shows them
    pub fn menu_order() -> impl Iterator<Item = ElevatorId> {
        MENU_ORDER.iter().map(|id| ElevatorId(*id))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Wall colour marker shown next to the id
    pub fn wall_marker(&self) -> &'static str {
        ELEVATORS
            .iter()
            .find(|e| e.id == self.0)
            .map(|e| e.wall)
            .unwrap_or("")
    }
}

impl std::fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for ElevatorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}
