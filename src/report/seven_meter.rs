use tracing::{debug, instrument, trace};

use crate::model::{PlayerLine, SevenMeterStats, SkipReason, SkippedRow, TableRow};
use crate::report::patterns::{match_seven_meter, SevenMeterMatch};

/// Tally seven-meter attempts and conversions per player.
///
/// Every row mentioning `7m` counts as one attempt for the player it names;
/// only converted ones (`7m-Tor durch`) count as goals. Seven-meter rows that
/// name nobody recognisable are listed in [`SevenMeterStats::skipped`].
#[instrument(skip(rows), fields(row_count = rows.len()))]
pub fn extract_seven_meter_stats(rows: &[TableRow]) -> SevenMeterStats {
    let mut stats = SevenMeterStats::default();

    for (index, row) in rows.iter().enumerate() {
        let Ok(action) = row.validate() else {
            continue;
        };
        match match_seven_meter(action) {
            SevenMeterMatch::Scored(player) => stats.record(player, true),
            SevenMeterMatch::Missed(player) => stats.record(player, false),
            SevenMeterMatch::Unnamed => {
                trace!(index, action, "seven-meter row without a player name");
                stats.skipped.push(SkippedRow {
                    index,
                    reason: SkipReason::UnmatchedSevenMeter {
                        action: action.to_owned(),
                    },
                });
            }
            SevenMeterMatch::NotSevenMeter => {}
        }
    }

    debug!(
        players = stats.players.len(),
        skipped = stats.skipped.len(),
        "extracted seven-meter stats"
    );
    stats
}

/// Copy seven-meter tallies onto lineup entries by exact name.
///
/// Players without a tally get zero attempts and zero goals.
pub fn apply_seven_meter_stats(players: &mut [PlayerLine], stats: &SevenMeterStats) {
    for player in players.iter_mut() {
        let record = stats.get(&player.name).copied().unwrap_or_default();
        player.seven_meters = record.attempts;
        player.seven_meters_goals = record.goals;
    }
}
