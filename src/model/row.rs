use serde::{Deserialize, Serialize};

/// One row of the play-by-play table printed in a match report.
///
/// Columns are, in order: wall-clock time (`Zeit`), game clock (`Spielzeit`),
/// running score (`Spielstand`) and the free-text action (`Aktion`). Cells are
/// kept exactly as the table extractor produced them, including missing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRow {
    pub cells: Vec<Option<String>>,
}

impl TableRow {
    /// Build a complete four-column row.
    pub fn new(wall_clock: &str, game_clock: &str, score: &str, action: &str) -> Self {
        Self {
            cells: vec![
                Some(wall_clock.to_owned()),
                Some(game_clock.to_owned()),
                Some(score.to_owned()),
                Some(action.to_owned()),
            ],
        }
    }

    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(|c| c.map(Into::into)).collect(),
        }
    }

    pub fn wall_clock(&self) -> Option<&str> {
        self.cell(0)
    }

    pub fn game_clock(&self) -> Option<&str> {
        self.cell(1)
    }

    pub fn score(&self) -> Option<&str> {
        self.cell(2)
    }

    pub fn action(&self) -> Option<&str> {
        self.cell(3)
    }

    /// Check the row has all four columns and a non-empty action.
    pub(crate) fn validate(&self) -> Result<&str, SkipReason> {
        if self.cells.len() < 4 {
            return Err(SkipReason::TooFewCells {
                found: self.cells.len(),
            });
        }
        self.action().ok_or(SkipReason::MissingAction)
    }

    fn cell(&self, index: usize) -> Option<&str> {
        self.cells
            .get(index)
            .and_then(Option::as_deref)
            .filter(|c| !c.is_empty())
    }
}

/// A row an extractor could not use, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Zero-based position of the row in the input.
    pub index: usize,
    pub reason: SkipReason,
}

/// Why a row was left out of an extraction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// Fewer than four columns were extracted.
    TooFewCells { found: usize },
    /// The action column is missing or blank.
    MissingAction,
    /// A goal line without a game clock.
    MissingGameClock,
    /// The game clock is not `MM:SS`.
    BadClock { raw: String },
    /// The action mentions a goal but scorer and team could not be read.
    MalformedGoal { action: String },
    /// A seven-meter line without a recognisable player name.
    UnmatchedSevenMeter { action: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_treat_blank_cells_as_missing() {
        let row = TableRow::from_cells([Some("18:02"), Some(""), None, Some("Auszeit")]);

        assert_eq!(row.wall_clock(), Some("18:02"));
        assert_eq!(row.game_clock(), None);
        assert_eq!(row.score(), None);
        assert_eq!(row.action(), Some("Auszeit"));
    }

    #[test]
    fn test_validate_rejects_short_rows_and_missing_actions() {
        let short = TableRow::from_cells([Some("18:02"), Some("01:00")]);
        assert_eq!(short.validate(), Err(SkipReason::TooFewCells { found: 2 }));

        let no_action = TableRow::from_cells([Some("18:02"), Some("01:00"), Some("0:0"), None]);
        assert_eq!(no_action.validate(), Err(SkipReason::MissingAction));

        let ok = TableRow::new("18:02", "01:00", "1:0", "Tor durch Max Muster (7, HSV)");
        assert_eq!(ok.validate(), Ok("Tor durch Max Muster (7, HSV)"));
    }

    #[test]
    fn test_rows_deserialize_from_cell_arrays() {
        let rows: Vec<TableRow> =
            serde_json::from_str(r#"[["10:00", "05:00", "1:0", "Anwurf"], ["10:01", null]]"#)
                .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].action(), Some("Anwurf"));
        assert_eq!(rows[1].cells.len(), 2);
        assert_eq!(rows[1].game_clock(), None);
    }
}
