use std::collections::BTreeMap;

use crate::text::is_attempted;

/// A stored answer for one question.
///
/// Multiple-choice selections are kept as the stringified option index, exactly as
/// submitted, so unparsable input is graded as incorrect rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Text(String),
    Matches(BTreeMap<String, String>),
}

impl Response {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Response::Text(text) => Some(text),
            Response::Matches(_) => None,
        }
    }

    #[must_use]
    pub fn matches(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Response::Matches(map) => Some(map),
            Response::Text(_) => None,
        }
    }

    /// Free text counts once it has non-whitespace content; matching once any pair is placed.
    #[must_use]
    pub fn is_attempted(&self) -> bool {
        match self {
            Response::Text(text) => is_attempted(text),
            Response::Matches(map) => !map.is_empty(),
        }
    }
}
