mod goals;
mod patterns;
mod seven_meter;

pub use goals::{extract_goals, extract_goals_with_teams, TeamResolver};
pub use seven_meter::{apply_seven_meter_stats, extract_seven_meter_stats};
