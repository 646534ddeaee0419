use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Length of one half in minutes. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct HalfDuration(u32);

impl HalfDuration {
    pub const STANDARD: HalfDuration = HalfDuration(30);

    pub fn new(minutes: i64) -> Result<Self> {
        u32::try_from(minutes)
            .ok()
            .filter(|m| *m > 0)
            .map(HalfDuration)
            .ok_or(ReportError::InvalidHalfDuration { minutes })
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl Default for HalfDuration {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<i64> for HalfDuration {
    type Error = ReportError;

    fn try_from(minutes: i64) -> Result<Self> {
        Self::new(minutes)
    }
}

impl From<HalfDuration> for u32 {
    fn from(value: HalfDuration) -> Self {
        value.0
    }
}

/// Per-league rules the analysis depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub half_duration: HalfDuration,
}

impl LeagueSettings {
    pub fn new(name: impl Into<String>, half_duration: HalfDuration) -> Self {
        Self {
            name: name.into(),
            half_duration,
        }
    }
}

/// Team codes as printed in the report, when already known from the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamHint {
    pub home: String,
    pub away: String,
}

impl TeamHint {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }
}
