use once_cell::sync::Lazy;
use regex::Regex;

// Name tokens allow hyphens and apostrophes ("Jan-Ole", "D'Angelo").
static SEVEN_METER_GOAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"7m-Tor durch\s+([\w'-]+(?:\s+[\w'-]+)*)\s+\(\d+,\s*([^)]+)\)").unwrap()
});
static REGULAR_GOAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Tor durch\s+([\w'-]+(?:\s+[\w'-]+)*)\s+\(\d+,\s*([^)]+)\)").unwrap()
});
static SEVEN_METER_SCORED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"7m-Tor durch\s+([\w'-]+\s+[\w'-]+)").unwrap()
});
static SEVEN_METER_MISSED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"7m, KEIN Tor durch\s+([\w'-]+\s+[\w'-]+)").unwrap()
});
static SEVEN_METER_BY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"von\s+([\w'-]+\s+[\w'-]+)\s+7m").unwrap()
});
static SEVEN_METER_LOOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\w'-]+\s+[\w'-]+).*7m").unwrap());

/// Scorer and team read from a goal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GoalLine<'a> {
    pub scorer: &'a str,
    pub team_abbrev: &'a str,
    pub seven_meter: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GoalMatch<'a> {
    Goal(GoalLine<'a>),
    /// Looks like a goal line but scorer or team could not be read.
    Malformed,
    NotAGoal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SevenMeterMatch<'a> {
    Scored(&'a str),
    Missed(&'a str),
    /// Mentions a seven-meter but names nobody we can read.
    Unnamed,
    NotSevenMeter,
}

/// Classify an action as a goal. Converted seven-meters take precedence over
/// regular goals; any other line mentioning `7m` is never a goal.
pub(crate) fn match_goal(action: &str) -> GoalMatch<'_> {
    let (pattern, seven_meter) = if action.contains("7m-Tor durch") {
        (&*SEVEN_METER_GOAL, true)
    } else if action.contains("Tor durch") && !action.contains("7m") {
        (&*REGULAR_GOAL, false)
    } else {
        return GoalMatch::NotAGoal;
    };

    let Some(caps) = pattern.captures(action) else {
        return GoalMatch::Malformed;
    };
    match (caps.get(1), caps.get(2)) {
        (Some(scorer), Some(team)) => {
            let scorer = scorer.as_str().trim();
            let team_abbrev = team.as_str().trim();
            if scorer.is_empty() || team_abbrev.is_empty() {
                GoalMatch::Malformed
            } else {
                GoalMatch::Goal(GoalLine {
                    scorer,
                    team_abbrev,
                    seven_meter,
                })
            }
        }
        _ => GoalMatch::Malformed,
    }
}

/// Classify an action as a seven-meter attempt.
pub(crate) fn match_seven_meter(action: &str) -> SevenMeterMatch<'_> {
    if !action.contains("7m") {
        return SevenMeterMatch::NotSevenMeter;
    }

    if action.contains("7m-Tor durch") {
        return first_group(&SEVEN_METER_SCORED, action)
            .map_or(SevenMeterMatch::Unnamed, SevenMeterMatch::Scored);
    }
    if action.contains("7m, KEIN Tor durch") {
        return first_group(&SEVEN_METER_MISSED, action)
            .map_or(SevenMeterMatch::Unnamed, SevenMeterMatch::Missed);
    }
    first_group(&SEVEN_METER_BY, action)
        .or_else(|| first_group(&SEVEN_METER_LOOSE, action))
        .map_or(SevenMeterMatch::Unnamed, SevenMeterMatch::Missed)
}

fn first_group<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}
