use super::percent;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Unicode scalar values in the raw text, not tokens.
    pub character_length: usize,
    pub token_count: usize,
    pub unique_token_count: usize,
    /// Share of token occurrences that repeat an already-seen word, in percent.
    pub repetition_rate: f64,
}

pub fn compute_summary<S: AsRef<str>>(text: &str, tokens: &[S]) -> SummaryStats {
    let token_count = tokens.len();
    let unique_token_count = tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<HashSet<&str>>()
        .len();

    SummaryStats {
        character_length: text.chars().count(),
        token_count,
        unique_token_count,
        repetition_rate: percent(token_count - unique_token_count, token_count),
    }
}
