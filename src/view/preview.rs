//! Collapsed-panel preview of a feature's explainer text.

use std::sync::LazyLock;

use regex::Regex;

/// Number of sentences shown before the panel offers to expand.
pub const PREVIEW_SENTENCES: usize = 3;

/// A run of non-terminal characters closed by one or more of `.`, `!`, `?`.
static SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Split text into sentences, terminators included. Text without a terminator yields nothing.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE.find_iter(text).map(|m| m.as_str())
}

/// First three sentences, trimmed and joined by single spaces.
/// Text without any terminated sentence is returned unchanged; missing text previews as "".
pub fn preview(text: Option<&str>) -> String {
    let Some(text) = text else { return String::new() };

    let head = sentences(text)
        .take(PREVIEW_SENTENCES)
        .map(str::trim)
        .collect::<Vec<_>>();

    if head.is_empty() { text.to_string() } else { head.join(" ") }
}

/// True iff the text holds strictly more sentences than the preview shows.
pub fn expandable(text: Option<&str>) -> bool {
    text.is_some_and(|t| sentences(t).nth(PREVIEW_SENTENCES).is_some())
}
