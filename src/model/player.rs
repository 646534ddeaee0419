use serde::{Deserialize, Serialize};

/// A player's line from the lineup (`Aufstellung`) table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerLine {
    pub name: String,
    pub goals: u32,
    pub two_min_penalties: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub blue_cards: u32,
    /// Seven-meter attempts.
    pub seven_meters: u32,
    pub seven_meters_goals: u32,
}
