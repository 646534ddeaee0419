use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::model::{Goal, Team};

/// Standing of the scoring team right after its goal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Situation {
    Lead,
    Tie,
    Deficit,
}

/// A home/away score pair. Displays as `H:A`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn total(&self) -> u32 {
        self.home + self.away
    }

    pub fn of(&self, team: Team) -> u32 {
        match team {
            Team::Home => self.home,
            Team::Away => self.away,
        }
    }

    pub(crate) fn add_goal(&mut self, team: Team) {
        match team {
            Team::Home => self.home += 1,
            Team::Away => self.away += 1,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.home, self.away)
    }
}

/// A goal together with the match state right after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedGoal {
    #[serde(flatten)]
    pub goal: Goal,
    pub home_score: u32,
    pub away_score: u32,
    pub situation: Situation,
    /// Goals in a row by this team, this one included.
    pub momentum: u32,
}

impl EnrichedGoal {
    pub fn score(&self) -> Score {
        Score::new(self.home_score, self.away_score)
    }
}

/// Enriched goals for a whole match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameFlow {
    pub goals: Vec<EnrichedGoal>,
    pub final_score: Score,
}

/// Goals scored by one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorerTally {
    pub scorer: String,
    pub team: Team,
    pub goals: u32,
    pub seven_meter_goals: u32,
}

/// A goal reduced to what a timeline graphic needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalMarker {
    /// Minutes since the start of the half.
    pub time_in_minutes: f64,
    pub scorer: String,
    pub momentum: u32,
    pub situation: Situation,
    pub seven_meter: bool,
    pub score_home: u32,
    pub score_away: u32,
}

/// Goals of one half, split by team.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HalfBucket {
    /// 1 or 2.
    pub half: u8,
    pub duration_minutes: u32,
    pub home_goals: Vec<GoalMarker>,
    pub away_goals: Vec<GoalMarker>,
}

impl HalfBucket {
    pub fn len(&self) -> usize {
        self.home_goals.len() + self.away_goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn goals_for(&self, team: Team) -> &[GoalMarker] {
        match team {
            Team::Home => &self.home_goals,
            Team::Away => &self.away_goals,
        }
    }
}

/// Everything the timeline graphic is drawn from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphicData {
    pub halves: [HalfBucket; 2],
    #[serde(serialize_with = "serialize_display")]
    pub final_score: Score,
}

fn serialize_display<S: serde::Serializer>(
    score: &Score,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_display_and_totals() {
        let mut score = Score::default();
        score.add_goal(Team::Home);
        score.add_goal(Team::Home);
        score.add_goal(Team::Away);

        assert_eq!(score.to_string(), "2:1");
        assert_eq!(score.total(), 3);
        assert_eq!(score.of(Team::Away), 1);
    }

    #[test]
    fn test_situation_strings() {
        assert_eq!(Situation::Deficit.to_string(), "deficit");
        assert_eq!("tie".parse::<Situation>().unwrap(), Situation::Tie);
    }

    #[test]
    fn test_graphic_data_serializes_final_score_as_text() {
        let data = GraphicData {
            final_score: Score::new(27, 25),
            ..Default::default()
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["final_score"], "27:25");
        assert_eq!(json["halves"].as_array().map(Vec::len), Some(2));
    }
}
