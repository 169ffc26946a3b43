/// Keyword intent routing for the conversational surface.
///
/// Rules are evaluated top to bottom and the first match wins, so the order
/// below is part of the contract: "nfl scores" must hit the NFL rule before
/// the generic scores rule, and "schedule" outranks every scores rule.
use crate::Scope;
use crate::catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Help,
    TeamInfo,
    Schedule,
    Scores(Scope),
}

type Matcher = fn(&str) -> bool;

pub const RULES: &[(Matcher, Intent)] = &[
    (is_help, Intent::Help),
    (is_team_info, Intent::TeamInfo),
    (is_schedule, Intent::Schedule),
    (is_nfl_scores, Intent::Scores(Scope::Nfl)),
    (is_basketball_scores, Intent::Scores(Scope::Basketball)),
    (is_college_football_scores, Intent::Scores(Scope::CollegeFootball)),
    (is_generic_scores, Intent::Scores(Scope::All)),
];

fn is_help(msg: &str) -> bool {
    msg.contains("help") || msg.contains("what can you do") || msg.contains("commands")
}

fn is_team_info(msg: &str) -> bool {
    msg.contains("teams") || msg.contains("who do") || msg.contains("track")
}

fn is_schedule(msg: &str) -> bool {
    msg.contains("schedule")
}

fn is_nfl_scores(msg: &str) -> bool {
    msg.contains("nfl") && msg.contains("score")
}

fn is_basketball_scores(msg: &str) -> bool {
    msg.contains("basketball")
}

fn is_college_football_scores(msg: &str) -> bool {
    msg.contains("football") && msg.contains("college")
}

fn is_generic_scores(msg: &str) -> bool {
    msg.contains("score") || msg.contains("game")
}

/// Route free text to an intent. Unmatched input falls back to help.
pub fn route(input: &str) -> Intent {
    let msg = input.to_lowercase();
    RULES
        .iter()
        .find(|(matches, _)| matches(&msg))
        .map(|&(_, intent)| intent)
        .unwrap_or(Intent::Help)
}

/// First catalog alias appearing anywhere in the message.
pub fn extract_team(input: &str) -> Option<&'static str> {
    let msg = input.to_lowercase();
    catalog::ALIASES
        .iter()
        .map(|&(alias, _)| alias)
        .find(|alias| msg.contains(alias))
}
