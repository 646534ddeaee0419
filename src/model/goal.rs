use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::model::SkippedRow;

/// Side of the match a goal is credited to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Team {
    Home,
    Away,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Home => Team::Away,
            Team::Away => Team::Home,
        }
    }
}

/// Position on the game clock, as printed in the `Spielzeit` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameClock {
    pub minute: u32,
    pub second: u32,
}

impl FromStr for GameClock {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ReportError::ClockParse { raw: s.to_owned() };
        let (minute, second) = s.split_once(':').ok_or_else(invalid)?;
        if second.contains(':') {
            return Err(invalid());
        }
        Ok(Self {
            minute: minute.trim().parse().map_err(|_| invalid())?,
            second: second.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl Display for GameClock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.minute, self.second)
    }
}

/// A scored goal read from the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub minute: u32,
    pub second: u32,
    pub scorer: String,
    pub team: Team,
    /// Team code exactly as printed in the report, e.g. `HSV`.
    pub team_abbrev: String,
    pub seven_meter: bool,
    /// Local time the goal was logged at, when the `Zeit` column is readable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_clock: Option<NaiveTime>,
}

impl Goal {
    pub fn clock(&self) -> GameClock {
        GameClock {
            minute: self.minute,
            second: self.second,
        }
    }

    /// Game time as fractional minutes, for plotting.
    pub fn time_in_minutes(&self) -> f64 {
        f64::from(self.minute) + f64::from(self.second) / 60.0
    }
}

/// Ordered goal list for one match plus what was learned along the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalTimeline {
    pub goals: Vec<Goal>,
    /// First abbreviation seen (or the hinted home code).
    pub home_abbrev: Option<String>,
    /// First abbreviation distinct from `home_abbrev` (or the hinted away code).
    pub away_abbrev: Option<String>,
    /// Any further distinct codes, in order of appearance. Goals carrying them
    /// were credited to the away side.
    pub extra_abbrevs: Vec<String>,
    pub skipped: Vec<SkippedRow>,
}

impl GoalTimeline {
    /// True when no goal line was dropped and team resolution was unambiguous.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.extra_abbrevs.is_empty()
    }

    /// Fail unless the report named exactly two teams.
    ///
    /// A goalless report (no abbreviation at all) passes.
    pub fn ensure_two_teams(&self) -> Result<()> {
        let abbrevs: Vec<String> = self
            .home_abbrev
            .iter()
            .chain(self.away_abbrev.iter())
            .chain(self.extra_abbrevs.iter())
            .cloned()
            .collect();
        match abbrevs.len() {
            0 | 2 => Ok(()),
            _ => Err(ReportError::AmbiguousTeams { abbrevs }),
        }
    }
}

/// Seven-meter tally for one player over a whole match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SevenMeterRecord {
    pub attempts: u32,
    pub goals: u32,
}

impl SevenMeterRecord {
    pub fn misses(&self) -> u32 {
        self.attempts.saturating_sub(self.goals)
    }
}

/// Seven-meter tallies keyed by player name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SevenMeterStats {
    pub players: BTreeMap<String, SevenMeterRecord>,
    pub skipped: Vec<SkippedRow>,
}

impl SevenMeterStats {
    pub fn get(&self, player: &str) -> Option<&SevenMeterRecord> {
        self.players.get(player)
    }

    pub(crate) fn record(&mut self, player: &str, scored: bool) {
        let entry = self.players.entry(player.to_owned()).or_default();
        entry.attempts += 1;
        if scored {
            entry.goals += 1;
        }
    }
}
