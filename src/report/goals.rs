use chrono::NaiveTime;
use tracing::{debug, instrument, trace, warn};

use crate::model::{
    GameClock, Goal, GoalTimeline, SkipReason, SkippedRow, TableRow, Team, TeamHint,
};
use crate::report::patterns::{match_goal, GoalMatch};

/// Maps printed team codes to home/away for one match.
///
/// Without a hint the first code seen is home and the next distinct code is
/// away. Anything after that is credited to away and reported as extra.
#[derive(Debug, Clone, Default)]
pub struct TeamResolver {
    home: Option<String>,
    away: Option<String>,
    extra: Vec<String>,
}

impl TeamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from known codes instead of learning them.
    pub fn with_hint(hint: &TeamHint) -> Self {
        Self {
            home: Some(hint.home.clone()),
            away: Some(hint.away.clone()),
            extra: Vec::new(),
        }
    }

    pub fn resolve(&mut self, abbrev: &str) -> Team {
        let is_home = self.home.as_deref() == Some(abbrev);
        let is_away = self.away.as_deref() == Some(abbrev);
        if self.home.is_none() {
            self.home = Some(abbrev.to_owned());
        } else if self.away.is_none() {
            if !is_home {
                self.away = Some(abbrev.to_owned());
            }
        } else if !is_home && !is_away && !self.extra.iter().any(|e| e == abbrev) {
            warn!(
                abbrev,
                home = ?self.home,
                away = ?self.away,
                "unexpected team abbreviation, counting goal for away side"
            );
            self.extra.push(abbrev.to_owned());
        }

        if self.home.as_deref() == Some(abbrev) {
            Team::Home
        } else {
            Team::Away
        }
    }

    fn finish(self, goals: Vec<Goal>, skipped: Vec<SkippedRow>) -> GoalTimeline {
        GoalTimeline {
            goals,
            home_abbrev: self.home,
            away_abbrev: self.away,
            extra_abbrevs: self.extra,
            skipped,
        }
    }
}

/// Read every goal from a match report table, in row order.
///
/// Rows that are not goal lines are ignored. Goal lines that cannot be used
/// end up in [`GoalTimeline::skipped`].
#[instrument(skip(rows), fields(row_count = rows.len()))]
pub fn extract_goals(rows: &[TableRow]) -> GoalTimeline {
    collect_goals(rows, TeamResolver::new())
}

/// Like [`extract_goals`], with the team codes already known.
#[instrument(skip(rows), fields(row_count = rows.len()))]
pub fn extract_goals_with_teams(rows: &[TableRow], hint: &TeamHint) -> GoalTimeline {
    collect_goals(rows, TeamResolver::with_hint(hint))
}

fn collect_goals(rows: &[TableRow], mut teams: TeamResolver) -> GoalTimeline {
    let mut goals = Vec::new();
    let mut skipped = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        match parse_goal_row(row, &mut teams) {
            Ok(Some(goal)) => goals.push(goal),
            Ok(None) => {}
            Err(reason) => {
                trace!(index, %reason, "skipping row");
                skipped.push(SkippedRow { index, reason });
            }
        }
    }

    let timeline = teams.finish(goals, skipped);
    debug!(
        goals = timeline.goals.len(),
        skipped = timeline.skipped.len(),
        home = ?timeline.home_abbrev,
        away = ?timeline.away_abbrev,
        "extracted goal timeline"
    );
    timeline
}

fn parse_goal_row(row: &TableRow, teams: &mut TeamResolver) -> Result<Option<Goal>, SkipReason> {
    let action = row.validate()?;
    let line = match match_goal(action) {
        GoalMatch::Goal(line) => line,
        GoalMatch::NotAGoal => return Ok(None),
        GoalMatch::Malformed => {
            warn!(action, "goal line without readable scorer or team");
            return Err(SkipReason::MalformedGoal {
                action: action.to_owned(),
            });
        }
    };
    let raw_clock = row.game_clock().ok_or(SkipReason::MissingGameClock)?;

    // Codes are learned before the clock is checked, so a goal with a garbled
    // clock still fixes which side is home.
    let team = teams.resolve(line.team_abbrev);
    let clock: GameClock = raw_clock.parse().map_err(|_| SkipReason::BadClock {
        raw: raw_clock.to_owned(),
    })?;

    Ok(Some(Goal {
        minute: clock.minute,
        second: clock.second,
        scorer: line.scorer.to_owned(),
        team,
        team_abbrev: line.team_abbrev.to_owned(),
        seven_meter: line.seven_meter,
        wall_clock: row.wall_clock().and_then(parse_wall_clock),
    }))
}

fn parse_wall_clock(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}
