use tracing::debug;

use crate::model::{
    EnrichedGoal, GameFlow, GoalMarker, GraphicData, HalfBucket, HalfDuration, Team,
};

/// Split goals into the two halves and, within each half, by team.
///
/// A goal belongs to the first half while `minute < half_duration`. Second
/// half times are shifted back by `half_duration` so both halves share a
/// `0..half_duration` axis. Relative order is kept inside every list.
pub fn bucket_by_half(goals: &[EnrichedGoal], half_duration: HalfDuration) -> [HalfBucket; 2] {
    let duration = half_duration.minutes();
    let mut halves = [1u8, 2].map(|half| HalfBucket {
        half,
        duration_minutes: duration,
        ..Default::default()
    });

    for enriched in goals {
        let goal = &enriched.goal;
        let (bucket, offset) = if goal.minute < duration {
            (&mut halves[0], 0.0)
        } else {
            (&mut halves[1], f64::from(duration))
        };
        let marker = GoalMarker {
            time_in_minutes: goal.time_in_minutes() - offset,
            scorer: goal.scorer.clone(),
            momentum: enriched.momentum,
            situation: enriched.situation,
            seven_meter: goal.seven_meter,
            score_home: enriched.home_score,
            score_away: enriched.away_score,
        };
        match goal.team {
            Team::Home => bucket.home_goals.push(marker),
            Team::Away => bucket.away_goals.push(marker),
        }
    }

    debug!(
        first_half = halves[0].len(),
        second_half = halves[1].len(),
        duration,
        "bucketed goals by half"
    );
    halves
}

impl GameFlow {
    /// Render-ready projection of this flow.
    pub fn graphic_data(&self, half_duration: HalfDuration) -> GraphicData {
        GraphicData {
            halves: bucket_by_half(&self.goals, half_duration),
            final_score: self.final_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::compute_flow;
    use crate::model::{Goal, Situation};

    fn goal(minute: u32, second: u32, scorer: &str, team: Team) -> Goal {
        Goal {
            minute,
            second,
            scorer: scorer.to_owned(),
            team,
            team_abbrev: String::new(),
            seven_meter: false,
            wall_clock: None,
        }
    }

    #[test]
    fn test_first_half_only() {
        let flow = compute_flow(&[
            goal(5, 0, "Max Muster", Team::Home),
            goal(7, 30, "Tim Weber", Team::Away),
            goal(7, 45, "Max Muster", Team::Home),
        ]);

        let [first, second] = bucket_by_half(&flow.goals, HalfDuration::STANDARD);

        assert_eq!((first.half, second.half), (1, 2));
        assert_eq!(first.duration_minutes, 30);
        assert_eq!(first.home_goals.len(), 2);
        assert_eq!(first.away_goals.len(), 1);
        assert!(second.is_empty());

        let tim = &first.away_goals[0];
        assert_eq!(tim.scorer, "Tim Weber");
        assert_eq!(tim.time_in_minutes, 7.5);
        assert_eq!(tim.situation, Situation::Tie);
        assert_eq!((tim.score_home, tim.score_away), (1, 1));
    }

    #[test]
    fn test_second_half_times_are_rebased() {
        let flow = compute_flow(&[
            goal(29, 59, "A", Team::Home),
            goal(30, 0, "B", Team::Away),
            goal(45, 30, "C", Team::Home),
        ]);

        let [first, second] = bucket_by_half(&flow.goals, HalfDuration::STANDARD);

        assert_eq!(first.len(), 1);
        assert_eq!(second.away_goals[0].time_in_minutes, 0.0);
        assert_eq!(second.home_goals[0].time_in_minutes, 15.5);
        assert_eq!(second.home_goals[0].score_home, 2);
    }

    #[test]
    fn test_custom_half_duration() {
        let flow = compute_flow(&[
            goal(19, 0, "A", Team::Home),
            goal(20, 0, "B", Team::Home),
            goal(25, 0, "C", Team::Away),
        ]);

        let [first, second] = bucket_by_half(&flow.goals, HalfDuration::new(20).unwrap());

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert_eq!(second.duration_minutes, 20);
        assert_eq!(second.away_goals[0].time_in_minutes, 5.0);
    }

    #[test]
    fn test_every_goal_lands_in_exactly_one_list() {
        let goals: Vec<Goal> = (0..60)
            .map(|m| {
                let team = if m % 3 == 0 { Team::Away } else { Team::Home };
                goal(m, (m * 7) % 60, "P", team)
            })
            .collect();
        let flow = compute_flow(&goals);

        let halves = bucket_by_half(&flow.goals, HalfDuration::STANDARD);

        let mut seen: Vec<(u32, u32)> = halves
            .iter()
            .flat_map(|h| h.home_goals.iter().chain(h.away_goals.iter()))
            .map(|m| (m.score_home, m.score_away))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), goals.len());
        assert_eq!(halves[0].len() + halves[1].len(), goals.len());
        assert!(halves[1]
            .home_goals
            .iter()
            .chain(&halves[1].away_goals)
            .all(|m| m.time_in_minutes < 30.0));
    }

    #[test]
    fn test_graphic_data_carries_final_score() {
        let flow = compute_flow(&[
            goal(3, 0, "A", Team::Home),
            goal(40, 0, "B", Team::Away),
            goal(41, 0, "B", Team::Away),
        ]);

        let data = flow.graphic_data(HalfDuration::STANDARD);

        assert_eq!(data.final_score.to_string(), "1:2");
        assert_eq!(data.halves[1].away_goals[1].momentum, 2);
    }
}
