use std::io::Read;

use handball_report::{HalfDuration, LeagueSettings, ReportAnalyzer, TableRow};

/// Reads report rows as JSON (`[["Zeit", "Spielzeit", "Spielstand", "Aktion"], ...]`)
/// from stdin and prints the analysis. An optional argument sets the half
/// duration in minutes.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let half_duration = match std::env::args().nth(1) {
        Some(arg) => HalfDuration::new(arg.parse()?)?,
        None => HalfDuration::STANDARD,
    };

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let rows: Vec<TableRow> = serde_json::from_str(&input)?;

    let analyzer = ReportAnalyzer::new(LeagueSettings::new("", half_duration));
    let analysis = analyzer.analyze(&rows);

    for row in &analysis.timeline.skipped {
        eprintln!("skipped row {}: {}", row.index, row.reason);
    }
    for goal in &analysis.flow.goals {
        println!(
            "{:02}:{:02}  {:>5}  {:<24} {:<4} {:<7} x{}{}",
            goal.goal.minute,
            goal.goal.second,
            goal.score().to_string(),
            goal.goal.scorer,
            goal.goal.team_abbrev,
            goal.situation.to_string(),
            goal.momentum,
            if goal.goal.seven_meter { "  (7m)" } else { "" },
        );
    }
    println!("final score {}", analysis.flow.final_score);

    serde_json::to_writer_pretty(std::io::stdout(), &analysis.graphic)?;
    println!();
    Ok(())
}
