use std::cmp::Ordering;
use std::collections::HashMap;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::model::{
    EnrichedGoal, GameFlow, Goal, HalfDuration, Score, ScorerTally, Situation, Team,
};

/// Walk the goals in the given order and attach running score, situation and
/// momentum to each.
///
/// The order is trusted as is; nothing is sorted by clock.
#[instrument(skip(goals), fields(goal_count = goals.len()))]
pub fn compute_flow(goals: &[Goal]) -> GameFlow {
    let mut score = Score::default();
    let mut previous: Option<(Team, u32)> = None;

    let enriched = goals
        .iter()
        .map(|goal| {
            score.add_goal(goal.team);
            let momentum = match previous {
                Some((team, streak)) if team == goal.team => streak + 1,
                _ => 1,
            };
            previous = Some((goal.team, momentum));

            EnrichedGoal {
                goal: goal.clone(),
                home_score: score.home,
                away_score: score.away,
                situation: situation_for(goal.team, score),
                momentum,
            }
        })
        .collect_vec();

    debug!(final_score = %score, "computed game flow");
    GameFlow {
        goals: enriched,
        final_score: score,
    }
}

fn situation_for(team: Team, score: Score) -> Situation {
    match score.of(team).cmp(&score.of(team.opponent())) {
        Ordering::Greater => Situation::Lead,
        Ordering::Equal => Situation::Tie,
        Ordering::Less => Situation::Deficit,
    }
}

impl GameFlow {
    pub fn total_goals(&self) -> usize {
        self.goals.len()
    }

    /// Number of goals in the first and second half.
    pub fn goals_per_half(&self, half_duration: HalfDuration) -> [usize; 2] {
        let (first, second): (Vec<_>, Vec<_>) = self
            .goals
            .iter()
            .partition(|g| g.goal.minute < half_duration.minutes());
        [first.len(), second.len()]
    }

    /// Goals per scorer, most goals first, then by name.
    pub fn scorers(&self) -> Vec<ScorerTally> {
        let mut tallies: HashMap<(&str, Team), ScorerTally> = HashMap::new();
        for enriched in &self.goals {
            let goal = &enriched.goal;
            let tally = tallies
                .entry((goal.scorer.as_str(), goal.team))
                .or_insert_with(|| ScorerTally {
                    scorer: goal.scorer.clone(),
                    team: goal.team,
                    goals: 0,
                    seven_meter_goals: 0,
                });
            tally.goals += 1;
            if goal.seven_meter {
                tally.seven_meter_goals += 1;
            }
        }

        tallies
            .into_values()
            .sorted_by(|a, b| {
                b.goals
                    .cmp(&a.goals)
                    .then_with(|| a.scorer.cmp(&b.scorer))
                    .then_with(|| a.team.cmp(&b.team))
            })
            .collect_vec()
    }
}
