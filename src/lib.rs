//! Goal timelines, seven-meter tallies and game flow from handball match
//! reports.
//!
//! The input is the play-by-play table of a match report (`Spielbericht`),
//! one [`TableRow`] per line as extracted from the PDF. The output is plain
//! data ready for a spreadsheet or timeline graphic.

pub use analyzer::{MatchAnalysis, ReportAnalyzer};
pub use error::{ReportError, Result};
pub use flow::{bucket_by_half, compute_flow};
pub use model::*;
pub use report::{
    apply_seven_meter_stats, extract_goals, extract_goals_with_teams, extract_seven_meter_stats,
    TeamResolver,
};

mod analyzer;
mod error;
mod flow;
mod model;
mod report;
