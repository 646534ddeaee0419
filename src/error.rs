/// All errors that can occur while analysing a match report.
///
/// Row-level problems (unparseable clocks, unmatched action text) are not
/// errors; the extractors record them as [`SkippedRow`](crate::SkippedRow)s
/// and carry on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A half duration of zero or less, or too large to represent, was supplied.
    #[error("half duration must be between 1 and {} minutes, got {minutes}", u32::MAX)]
    InvalidHalfDuration { minutes: i64 },

    /// The report does not name exactly two teams.
    #[error("expected exactly two team abbreviations, found {}: {}", .abbrevs.len(), .abbrevs.join(", "))]
    AmbiguousTeams { abbrevs: Vec<String> },

    /// A game clock value was not in `MM:SS` form.
    #[error("invalid game clock {raw:?}")]
    ClockParse { raw: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
