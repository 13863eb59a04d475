use thiserror::Error;

use crate::model::ids::SetId;
use crate::model::question::{Question, QuestionKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PracticeSetError {
    #[error("practice set title cannot be empty")]
    EmptyTitle,

    #[error("practice set must contain at least one question")]
    NoQuestions,
}

/// A titled reading passage with its ordered comprehension questions.
///
/// `category`, `difficulty` and `time_estimate` are display metadata only.
/// The time estimate is never enforced as a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSet {
    id: SetId,
    title: String,
    description: String,
    category: String,
    difficulty: String,
    time_estimate: String,
    passage: String,
    questions: Vec<Question>,
}

impl PracticeSet {
    /// # Errors
    ///
    /// Returns `PracticeSetError::EmptyTitle` for a blank title and
    /// `PracticeSetError::NoQuestions` when `questions` is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: SetId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        difficulty: impl Into<String>,
        time_estimate: impl Into<String>,
        passage: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, PracticeSetError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(PracticeSetError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(PracticeSetError::NoQuestions);
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            category: category.into(),
            difficulty: difficulty.into(),
            time_estimate: time_estimate.into(),
            passage: passage.into(),
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> SetId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    #[must_use]
    pub fn time_estimate(&self) -> &str {
        &self.time_estimate
    }

    #[must_use]
    pub fn passage(&self) -> &str {
        &self.passage
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn count_of(&self, kind: QuestionKind) -> usize {
        self.questions.iter().filter(|q| q.kind() == kind).count()
    }
}
