use std::collections::HashSet;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyPrompt,

    #[error("multiple-choice questions need at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct index {index} is out of range for {count} options")]
    CorrectIndexOutOfRange { index: usize, count: usize },

    #[error("short-answer word limit must be > 0")]
    InvalidMaxWords,

    #[error("paragraph expected length must be > 0 when present")]
    InvalidExpectedLength,

    #[error("matching questions need at least one pair")]
    NoPairs,

    #[error("matching item {item:?} appears more than once")]
    DuplicateItem { item: String },
}

//
// ─── VARIANTS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoice {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl MultipleChoice {
    /// # Errors
    ///
    /// Returns `QuestionError::TooFewOptions` for fewer than two options and
    /// `QuestionError::CorrectIndexOutOfRange` if `correct_index` does not name an option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = validate_prompt(prompt.into())?;
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                count: options.len(),
            });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                count: options.len(),
            });
        }
        Ok(Self {
            prompt,
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// A stored selection is correct only if it parses to the correct option index.
    ///
    /// Parsing is strict: only ASCII digits are accepted, so `"2abc"` or `"+2"`
    /// never count as option 2.
    #[must_use]
    pub fn is_correct(&self, selection: Option<&str>) -> bool {
        selection
            .map(str::trim)
            .filter(|raw| !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|raw| raw.parse::<usize>().ok())
            .is_some_and(|index| index == self.correct_index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortAnswer {
    prompt: String,
    max_words: u32,
}

impl ShortAnswer {
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidMaxWords` if `max_words` is zero.
    pub fn new(prompt: impl Into<String>, max_words: u32) -> Result<Self, QuestionError> {
        let prompt = validate_prompt(prompt.into())?;
        if max_words == 0 {
            return Err(QuestionError::InvalidMaxWords);
        }
        Ok(Self { prompt, max_words })
    }

    #[must_use]
    pub fn max_words(&self) -> u32 {
        self.max_words
    }
}

/// Open-ended response. `expected_length` is advisory and never enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    prompt: String,
    expected_length: Option<u32>,
}

impl Paragraph {
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidExpectedLength` if a zero length is given.
    pub fn new(
        prompt: impl Into<String>,
        expected_length: Option<u32>,
    ) -> Result<Self, QuestionError> {
        let prompt = validate_prompt(prompt.into())?;
        if expected_length == Some(0) {
            return Err(QuestionError::InvalidExpectedLength);
        }
        Ok(Self {
            prompt,
            expected_length,
        })
    }

    #[must_use]
    pub fn expected_length(&self) -> Option<u32> {
        self.expected_length
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingPair {
    pub item: String,
    pub target: String,
}

impl MatchingPair {
    #[must_use]
    pub fn new(item: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    prompt: String,
    pairs: Vec<MatchingPair>,
}

impl Matching {
    /// # Errors
    ///
    /// Returns `QuestionError::NoPairs` for an empty key and
    /// `QuestionError::DuplicateItem` when an item is listed twice.
    pub fn new(prompt: impl Into<String>, pairs: Vec<MatchingPair>) -> Result<Self, QuestionError> {
        let prompt = validate_prompt(prompt.into())?;
        if pairs.is_empty() {
            return Err(QuestionError::NoPairs);
        }
        let mut seen = HashSet::new();
        for pair in &pairs {
            if !seen.insert(pair.item.as_str()) {
                return Err(QuestionError::DuplicateItem {
                    item: pair.item.clone(),
                });
            }
        }
        Ok(Self { prompt, pairs })
    }

    #[must_use]
    pub fn pairs(&self) -> &[MatchingPair] {
        &self.pairs
    }

    #[must_use]
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.item.as_str())
    }

    #[must_use]
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.target.as_str())
    }

    #[must_use]
    pub fn has_item(&self, item: &str) -> bool {
        self.items().any(|candidate| candidate == item)
    }

    #[must_use]
    pub fn has_target(&self, target: &str) -> bool {
        self.targets().any(|candidate| candidate == target)
    }

    /// Target the answer key assigns to `item`.
    #[must_use]
    pub fn key_for(&self, item: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.item == item)
            .map(|pair| pair.target.as_str())
    }
}

fn validate_prompt(prompt: String) -> Result<String, QuestionError> {
    if prompt.trim().is_empty() {
        return Err(QuestionError::EmptyPrompt);
    }
    Ok(prompt)
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    MultipleChoice,
    ShortAnswer,
    Paragraph,
    Matching,
}

impl QuestionKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "Multiple Choice",
            QuestionKind::ShortAnswer => "Short Answer",
            QuestionKind::Paragraph => "Paragraph",
            QuestionKind::Matching => "Matching",
        }
    }
}

/// A single comprehension question. Each variant carries only its own fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    MultipleChoice(MultipleChoice),
    ShortAnswer(ShortAnswer),
    Paragraph(Paragraph),
    Matching(Matching),
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => &q.prompt,
            Question::ShortAnswer(q) => &q.prompt,
            Question::Paragraph(q) => &q.prompt,
            Question::Matching(q) => &q.prompt,
        }
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::MultipleChoice(_) => QuestionKind::MultipleChoice,
            Question::ShortAnswer(_) => QuestionKind::ShortAnswer,
            Question::Paragraph(_) => QuestionKind::Paragraph,
            Question::Matching(_) => QuestionKind::Matching,
        }
    }
}

impl From<MultipleChoice> for Question {
    fn from(value: MultipleChoice) -> Self {
        Question::MultipleChoice(value)
    }
}

impl From<ShortAnswer> for Question {
    fn from(value: ShortAnswer) -> Self {
        Question::ShortAnswer(value)
    }
}

impl From<Paragraph> for Question {
    fn from(value: Paragraph) -> Self {
        Question::Paragraph(value)
    }
}

impl From<Matching> for Question {
    fn from(value: Matching) -> Self {
        Question::Matching(value)
    }
}
