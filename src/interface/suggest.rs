use strsim::jaro_winkler;

use crate::models::Goal;
use crate::planner::constants::{SUGGESTION_THRESHOLD, style_keywords};

/// Closest candidate to `input` by Jaro-Winkler similarity, if any is close
/// enough. Exact matches are not suggestions.
pub fn closest_match<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input = input.trim().to_lowercase();

    candidates
        .iter()
        .filter(|c| **c != input)
        .map(|c| (*c, jaro_winkler(c, &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

pub fn suggest_goal(input: &str) -> Option<&'static str> {
    let goals: Vec<&'static str> = Goal::ALL.iter().map(|g| g.as_str()).collect();
    closest_match(input, &goals)
}

pub fn suggest_style(input: &str) -> Option<&'static str> {
    closest_match(input, &style_keywords())
}
