//! Text helpers shared by answer validation and scoring.

/// Number of whitespace-delimited, non-empty tokens in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A free-text answer counts as attempted once it has non-whitespace content.
#[must_use]
pub fn is_attempted(text: &str) -> bool {
    !text.trim().is_empty()
}
