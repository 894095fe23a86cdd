//! Text helpers for extracted element content.

use regex::Regex;
use std::sync::OnceLock;

use crate::dom::MatchSet;

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Collapse whitespace runs to single spaces and trim the ends
#[must_use]
pub fn normalize_text(text: &str) -> String {
    whitespace().replace_all(text, " ").trim().to_string()
}

/// Normalized text of every element in `matches`
#[must_use]
pub fn normalized_texts(matches: &MatchSet) -> Vec<String> {
    matches.map(|el| normalize_text(&el.text))
}
