use std::collections::BTreeMap;

use crate::model::question::Question;
use crate::model::response::Response;

/// Read-only result of a finished practice session.
///
/// Only multiple-choice and matching answers are graded; free-text answers are
/// reported as attempted or not.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    multiple_choice_accuracy: f64,
    multiple_choice_correct: u32,
    multiple_choice_total: u32,
    short_answer_attempted: u32,
    paragraph_attempted: u32,
    matching_attempted: u32,
    matching_pairs_correct: u32,
    matching_pairs_total: u32,
    total_questions: u32,
}

impl ScoreSummary {
    /// Tally `responses` (keyed by question index) against `questions`.
    ///
    /// Missing indices count as unanswered. Accuracy is 0 when there are no
    /// multiple-choice questions.
    #[must_use]
    pub fn from_responses(questions: &[Question], responses: &BTreeMap<usize, Response>) -> Self {
        let mut summary = Self {
            multiple_choice_accuracy: 0.0,
            multiple_choice_correct: 0,
            multiple_choice_total: 0,
            short_answer_attempted: 0,
            paragraph_attempted: 0,
            matching_attempted: 0,
            matching_pairs_correct: 0,
            matching_pairs_total: 0,
            total_questions: u32::try_from(questions.len()).unwrap_or(u32::MAX),
        };

        for (index, question) in questions.iter().enumerate() {
            let response = responses.get(&index);
            let attempted = response.is_some_and(Response::is_attempted);
            match question {
                Question::MultipleChoice(q) => {
                    summary.multiple_choice_total = summary.multiple_choice_total.saturating_add(1);
                    if q.is_correct(response.and_then(Response::as_text)) {
                        summary.multiple_choice_correct =
                            summary.multiple_choice_correct.saturating_add(1);
                    }
                }
                Question::ShortAnswer(_) => {
                    if attempted {
                        summary.short_answer_attempted =
                            summary.short_answer_attempted.saturating_add(1);
                    }
                }
                Question::Paragraph(_) => {
                    if attempted {
                        summary.paragraph_attempted = summary.paragraph_attempted.saturating_add(1);
                    }
                }
                Question::Matching(q) => {
                    let pairs = u32::try_from(q.pairs().len()).unwrap_or(u32::MAX);
                    summary.matching_pairs_total = summary.matching_pairs_total.saturating_add(pairs);
                    if attempted {
                        summary.matching_attempted = summary.matching_attempted.saturating_add(1);
                    }
                    let placed = response.and_then(Response::matches);
                    let correct = placed.map_or(0, |placed| {
                        placed
                            .iter()
                            .filter(|(item, target)| q.key_for(item) == Some(target.as_str()))
                            .count()
                    });
                    summary.matching_pairs_correct = summary
                        .matching_pairs_correct
                        .saturating_add(u32::try_from(correct).unwrap_or(u32::MAX));
                }
            }
        }

        if summary.multiple_choice_total > 0 {
            summary.multiple_choice_accuracy = f64::from(summary.multiple_choice_correct)
                / f64::from(summary.multiple_choice_total)
                * 100.0;
        }

        summary
    }

    /// Percentage of multiple-choice questions answered correctly, in `[0, 100]`.
    #[must_use]
    pub fn multiple_choice_accuracy(&self) -> f64 {
        self.multiple_choice_accuracy
    }

    #[must_use]
    pub fn multiple_choice_correct(&self) -> u32 {
        self.multiple_choice_correct
    }

    #[must_use]
    pub fn multiple_choice_total(&self) -> u32 {
        self.multiple_choice_total
    }

    #[must_use]
    pub fn short_answer_attempted(&self) -> u32 {
        self.short_answer_attempted
    }

    #[must_use]
    pub fn paragraph_attempted(&self) -> u32 {
        self.paragraph_attempted
    }

    #[must_use]
    pub fn matching_attempted(&self) -> u32 {
        self.matching_attempted
    }

    #[must_use]
    pub fn matching_pairs_correct(&self) -> u32 {
        self.matching_pairs_correct
    }

    #[must_use]
    pub fn matching_pairs_total(&self) -> u32 {
        self.matching_pairs_total
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }
}
