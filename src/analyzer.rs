use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::*;
use crate::{flow, report};

/// Runs the full match report analysis for one league.
///
/// `ReportAnalyzer` holds the league rules (half duration) and, optionally,
/// the team codes for the match, and turns the play-by-play rows of a report
/// into a goal timeline, seven-meter tallies, the game flow and graphic data.
///
/// # Examples
///
/// ```
/// use handball_report::{HalfDuration, LeagueSettings, ReportAnalyzer, TableRow};
///
/// let analyzer = ReportAnalyzer::new(LeagueSettings::new("Oberliga", HalfDuration::STANDARD));
/// let rows = vec![
///     TableRow::new("10:00", "05:00", "1:0", "Tor durch Max Muster (7, HSV)"),
///     TableRow::new("10:01", "07:30", "1:1", "Tor durch Tim Weber (4, TSV)"),
/// ];
/// let analysis = analyzer.analyze(&rows);
/// assert_eq!(analysis.flow.final_score.to_string(), "1:1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportAnalyzer {
    settings: LeagueSettings,
    teams: Option<TeamHint>,
}

/// Everything derived from one match report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchAnalysis {
    pub timeline: GoalTimeline,
    pub seven_meters: SevenMeterStats,
    pub flow: GameFlow,
    pub graphic: GraphicData,
}

impl ReportAnalyzer {
    pub fn new(settings: LeagueSettings) -> Self {
        Self {
            settings,
            teams: None,
        }
    }

    /// Resolve home/away from known team codes instead of first appearance.
    pub fn with_teams(mut self, hint: TeamHint) -> Self {
        self.teams = Some(hint);
        self
    }

    pub fn settings(&self) -> &LeagueSettings {
        &self.settings
    }

    /// Analyse one report, keeping whatever could be read.
    #[instrument(skip(self, rows), fields(league = %self.settings.name, row_count = rows.len()))]
    pub fn analyze(&self, rows: &[TableRow]) -> MatchAnalysis {
        let timeline = match &self.teams {
            Some(hint) => report::extract_goals_with_teams(rows, hint),
            None => report::extract_goals(rows),
        };
        let seven_meters = report::extract_seven_meter_stats(rows);
        let flow = flow::compute_flow(&timeline.goals);
        let graphic = flow.graphic_data(self.settings.half_duration);

        debug!(
            goals = flow.total_goals(),
            final_score = %flow.final_score,
            clean = timeline.is_clean(),
            "analysed match report"
        );
        MatchAnalysis {
            timeline,
            seven_meters,
            flow,
            graphic,
        }
    }

    /// Like [`analyze`](Self::analyze), but fail unless exactly two teams
    /// appear in the report.
    pub fn analyze_strict(&self, rows: &[TableRow]) -> Result<MatchAnalysis> {
        let analysis = self.analyze(rows);
        analysis.timeline.ensure_two_teams()?;
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn example_rows() -> Vec<TableRow> {
        vec![
            TableRow::new("10:00", "05:00", "1:0", "Tor durch Max Muster (7, HSV)"),
            TableRow::new("10:01", "07:30", "1:1", "Tor durch Tim Weber (4, TSV)"),
            TableRow::new("10:01", "12:00", "1:1", "7m, KEIN Tor durch Max Muster (7, HSV)"),
            TableRow::new("10:02", "07:45", "2:1", "7m-Tor durch Max Muster (7, HSV)"),
            TableRow::new("10:40", "30:00", "2:1", "Halbzeit"),
            TableRow::new("10:50", "34:10", "2:2", "Tor durch Tim Weber (4, TSV)"),
        ]
    }

    #[test]
    fn test_analyze_full_report() {
        let analyzer = ReportAnalyzer::new(LeagueSettings::default());

        let analysis = analyzer.analyze(&example_rows());

        assert_eq!(analysis.flow.total_goals(), 4);
        assert_eq!(analysis.flow.final_score, Score::new(2, 2));
        assert_eq!(
            analysis.seven_meters.get("Max Muster"),
            Some(&SevenMeterRecord {
                attempts: 2,
                goals: 1
            })
        );
        assert_eq!(analysis.graphic.halves[0].len(), 3);
        assert_eq!(analysis.graphic.halves[1].away_goals.len(), 1);
        assert_eq!(analysis.graphic.final_score.to_string(), "2:2");
        assert!(analysis.timeline.is_clean());
    }

    #[test]
    fn test_league_half_duration_is_used() {
        let settings = LeagueSettings::new("E-Jugend", HalfDuration::new(10).unwrap());
        let analysis = ReportAnalyzer::new(settings).analyze(&example_rows());

        assert_eq!(analysis.graphic.halves[0].len(), 3);
        assert_eq!(analysis.graphic.halves[1].len(), 1);
        assert_eq!(analysis.graphic.halves[1].duration_minutes, 10);
    }

    #[test]
    fn test_team_hint_swaps_sides() {
        let analyzer =
            ReportAnalyzer::new(LeagueSettings::default()).with_teams(TeamHint::new("TSV", "HSV"));

        let analysis = analyzer.analyze(&example_rows());

        assert_eq!(analysis.flow.goals[0].goal.team, Team::Away);
        assert_eq!(analysis.flow.goals[0].situation, Situation::Lead);
        assert_eq!(analysis.flow.final_score, Score::new(2, 2));
    }

    #[test]
    fn test_strict_analysis_rejects_one_sided_reports() {
        let analyzer = ReportAnalyzer::default();
        let rows = vec![TableRow::new("10:00", "05:00", "1:0", "Tor durch Max Muster (7, HSV)")];

        assert_eq!(
            analyzer.analyze_strict(&rows).unwrap_err(),
            ReportError::AmbiguousTeams {
                abbrevs: vec!["HSV".into()]
            }
        );
        assert!(analyzer.analyze_strict(&example_rows()).is_ok());
    }

    #[test]
    fn test_analysis_serializes_for_the_report_layer() {
        let analysis = ReportAnalyzer::default().analyze(&example_rows());

        let json = serde_json::to_value(&analysis).unwrap();
        let first = &json["flow"]["goals"][0];
        assert_eq!(first["scorer"], "Max Muster");
        assert_eq!(first["team"], "home");
        assert_eq!(first["situation"], "lead");
        assert_eq!(first["home_score"], 1);
        assert_eq!(json["graphic"]["final_score"], "2:2");
        assert_eq!(json["seven_meters"]["players"]["Max Muster"]["attempts"], 2);
    }
}
