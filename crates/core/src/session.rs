//! Practice session controller.
//!
//! Holds the question list of one practice set, the current position and the
//! sparse map of stored responses. All operations are total: boundary moves clamp
//! and rejected writes leave state untouched.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::{PracticeSet, Question, Response, ScoreSummary, SetId};
use crate::text::word_count;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a practice session needs at least one question")]
    NoQuestions,
}

/// Why a submission left the stored answer unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The index is not the question currently displayed.
    NotCurrent { index: usize, current: usize },
    /// A short answer would exceed its word limit.
    WordLimit { words: usize, max: u32 },
    /// The submission does not fit the question type.
    KindMismatch,
    /// A matching item or target that is not part of the question.
    UnknownPairing,
    /// The session is finished; only `reset` changes it now.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a rejected submission leaves the stored answer unchanged"]
pub enum SubmitOutcome {
    Accepted,
    Rejected(Rejection),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Result of `PracticeSession::advance`.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Moved(usize),
    Finished(ScoreSummary),
    AlreadyFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

/// One attempt at a practice set.
///
/// `current < questions.len()` always holds; `completed` only becomes true by
/// advancing past the last question and only clears through `reset`.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeSession {
    set_id: Option<SetId>,
    questions: Vec<Question>,
    current: usize,
    answers: BTreeMap<usize, Response>,
    completed: bool,
    summary: Option<ScoreSummary>,
}

impl PracticeSession {
    /// Start a session over the questions of `set`.
    #[must_use]
    pub fn new(set: &PracticeSet) -> Self {
        Self::fresh(Some(set.id()), set.questions().to_vec())
    }

    /// Start a session over an ad-hoc question list.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestions` if `questions` is empty.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        Ok(Self::fresh(None, questions))
    }

    fn fresh(set_id: Option<SetId>, questions: Vec<Question>) -> Self {
        Self {
            set_id,
            questions,
            current: 0,
            answers: BTreeMap::new(),
            completed: false,
            summary: None,
        }
    }

    #[must_use]
    pub fn set_id(&self) -> Option<SetId> {
        self.set_id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.completed {
            Phase::Completed
        } else if self.current == 0 && self.answers.is_empty() {
            Phase::NotStarted
        } else {
            Phase::InProgress
        }
    }

    #[must_use]
    pub fn response(&self, index: usize) -> Option<&Response> {
        self.answers.get(&index)
    }

    /// Stored text for `index`, or `""` when unanswered.
    #[must_use]
    pub fn text_answer(&self, index: usize) -> &str {
        self.response(index)
            .and_then(Response::as_text)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, Response> {
        &self.answers
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.values().filter(|r| r.is_attempted()).count()
    }

    /// Position through the set as a percentage, counting the current question.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let shown = self.current + 1;
        let percent = shown * 100 / self.questions.len();
        u32::try_from(percent).unwrap_or(100)
    }

    /// Words left before the current short answer hits its limit.
    ///
    /// `None` when the current question is not a short answer.
    #[must_use]
    pub fn remaining_words(&self) -> Option<i64> {
        let Question::ShortAnswer(q) = self.current_question() else {
            return None;
        };
        let used = i64::try_from(word_count(self.text_answer(self.current))).unwrap_or(i64::MAX);
        Some(i64::from(q.max_words()) - used)
    }

    /// The summary computed when the session finished, if it has.
    #[must_use]
    pub fn summary(&self) -> Option<&ScoreSummary> {
        self.summary.as_ref()
    }

    /// Store `value` as the answer to the displayed question.
    ///
    /// Short answers longer than their word limit are rejected and the previous
    /// answer is kept. Multiple-choice and paragraph values are stored as given.
    pub fn submit_answer(&mut self, index: usize, value: &str) -> SubmitOutcome {
        if let Err(rejection) = self.check_writable(index) {
            return SubmitOutcome::Rejected(rejection);
        }

        match &self.questions[index] {
            Question::ShortAnswer(q) => {
                let words = word_count(value);
                if words > q.max_words() as usize {
                    return SubmitOutcome::Rejected(Rejection::WordLimit {
                        words,
                        max: q.max_words(),
                    });
                }
            }
            Question::MultipleChoice(_) | Question::Paragraph(_) => {}
            Question::Matching(_) => return SubmitOutcome::Rejected(Rejection::KindMismatch),
        }

        self.answers
            .insert(index, Response::Text(value.to_string()));
        SubmitOutcome::Accepted
    }

    /// Place `item` on `target` for the displayed matching question.
    pub fn submit_match(&mut self, index: usize, item: &str, target: &str) -> SubmitOutcome {
        if let Err(rejection) = self.check_writable(index) {
            return SubmitOutcome::Rejected(rejection);
        }
        let Question::Matching(q) = &self.questions[index] else {
            return SubmitOutcome::Rejected(Rejection::KindMismatch);
        };
        if !q.has_item(item) || !q.has_target(target) {
            return SubmitOutcome::Rejected(Rejection::UnknownPairing);
        }

        let entry = self
            .answers
            .entry(index)
            .or_insert_with(|| Response::Matches(BTreeMap::new()));
        if let Response::Matches(map) = entry {
            map.insert(item.to_string(), target.to_string());
        }
        SubmitOutcome::Accepted
    }

    /// Remove the placement for `item` on the displayed matching question.
    pub fn clear_match(&mut self, index: usize, item: &str) -> SubmitOutcome {
        if let Err(rejection) = self.check_writable(index) {
            return SubmitOutcome::Rejected(rejection);
        }
        if !matches!(self.questions[index], Question::Matching(_)) {
            return SubmitOutcome::Rejected(Rejection::KindMismatch);
        }
        if let Some(Response::Matches(map)) = self.answers.get_mut(&index) {
            map.remove(item);
            if map.is_empty() {
                self.answers.remove(&index);
            }
        }
        SubmitOutcome::Accepted
    }

    fn check_writable(&self, index: usize) -> Result<(), Rejection> {
        if self.completed {
            return Err(Rejection::Completed);
        }
        if index != self.current {
            return Err(Rejection::NotCurrent {
                index,
                current: self.current,
            });
        }
        Ok(())
    }

    /// Move to the next question, or finish the session from the last one.
    pub fn advance(&mut self) -> Step {
        if self.completed {
            return Step::AlreadyFinished;
        }
        if self.is_last() {
            let summary = self.compute_score();
            self.completed = true;
            self.summary = Some(summary.clone());
            return Step::Finished(summary);
        }
        self.current += 1;
        Step::Moved(self.current)
    }

    /// Move back one question. Returns `false` at the first question or once finished.
    pub fn retreat(&mut self) -> bool {
        if self.completed || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Grade the stored answers. Never fails, whatever was answered.
    #[must_use]
    pub fn compute_score(&self) -> ScoreSummary {
        ScoreSummary::from_responses(&self.questions, &self.answers)
    }

    /// Return to the first question with no answers, keeping the same questions.
    pub fn reset(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.completed = false;
        self.summary = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Matching, MatchingPair, MultipleChoice, Paragraph, ShortAnswer};

    fn three_question_set() -> PracticeSet {
        let options = vec![
            "1.1 millimeters per year".to_string(),
            "2.2 millimeters per year".to_string(),
            "3.3 millimeters per year".to_string(),
            "4.4 millimeters per year".to_string(),
        ];
        PracticeSet::new(
            SetId::new(2),
            "Scientific Analysis - Climate Change",
            "Analyze climate data.",
            "Scientific Analysis",
            "Advanced",
            "25 minutes",
            "Global temperature records...",
            vec![
                MultipleChoice::new("Rate of sea level rise?", options, 2)
                    .unwrap()
                    .into(),
                ShortAnswer::new("Relate CO2 and temperature.", 100)
                    .unwrap()
                    .into(),
                Paragraph::new("Analyze the evidence.", Some(150))
                    .unwrap()
                    .into(),
            ],
        )
        .unwrap()
    }

    fn short_answer_session(max_words: u32) -> PracticeSession {
        PracticeSession::from_questions(vec![
            ShortAnswer::new("Summarize.", max_words).unwrap().into(),
        ])
        .unwrap()
    }

    fn run_to_end(session: &mut PracticeSession) -> ScoreSummary {
        loop {
            match session.advance() {
                Step::Moved(_) => {}
                Step::Finished(summary) => return summary,
                Step::AlreadyFinished => panic!("session was already finished"),
            }
        }
    }

    #[test]
    fn empty_question_list_is_rejected() {
        assert_eq!(
            PracticeSession::from_questions(Vec::new()).unwrap_err(),
            SessionError::NoQuestions
        );
    }

    #[test]
    fn end_to_end_correct_choice() {
        let mut session = PracticeSession::new(&three_question_set());
        assert!(session.submit_answer(0, "2").is_accepted());
        assert_eq!(session.advance(), Step::Moved(1));
        assert!(session.submit_answer(1, "one two three four five").is_accepted());
        assert_eq!(session.advance(), Step::Moved(2));
        assert!(session.submit_answer(2, "").is_accepted());

        let summary = run_to_end(&mut session);
        assert!((summary.multiple_choice_accuracy() - 100.0).abs() < f64::EPSILON);
        assert_eq!(summary.short_answer_attempted(), 1);
        assert_eq!(summary.paragraph_attempted(), 0);
        assert_eq!(summary.total_questions(), 3);
        assert!(session.is_completed());
        assert_eq!(session.summary(), Some(&summary));
    }

    #[test]
    fn end_to_end_wrong_choice() {
        let mut session = PracticeSession::new(&three_question_set());
        let _ = session.submit_answer(0, "0");
        let summary = run_to_end(&mut session);
        assert!(summary.multiple_choice_accuracy().abs() < f64::EPSILON);
    }

    #[test]
    fn unanswered_choice_counts_as_incorrect() {
        let mut session = PracticeSession::new(&three_question_set());
        let summary = run_to_end(&mut session);
        assert_eq!(summary.multiple_choice_correct(), 0);
        assert_eq!(summary.multiple_choice_total(), 1);
    }

    #[test]
    fn short_answer_overflow_keeps_previous_value() {
        let mut session = short_answer_session(5);
        let before = session.response(0).cloned();
        let outcome = session.submit_answer(0, "one two three four five six");
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(Rejection::WordLimit { words: 6, max: 5 })
        );
        assert_eq!(session.response(0).cloned(), before);
        assert_eq!(session.text_answer(0), "");

        assert!(session.submit_answer(0, "one two three").is_accepted());
        let _ = session.submit_answer(0, "a b c d e f g");
        assert_eq!(session.text_answer(0), "one two three");
        assert_eq!(session.remaining_words(), Some(2));
    }

    #[test]
    fn short_answer_at_limit_is_accepted() {
        let mut session = short_answer_session(5);
        assert!(session.submit_answer(0, "  one two   three four five  ").is_accepted());
        assert_eq!(session.remaining_words(), Some(0));
    }

    #[test]
    fn multiple_choice_overwrites_selection() {
        let mut session = PracticeSession::new(&three_question_set());
        let _ = session.submit_answer(0, "1");
        let _ = session.submit_answer(0, "2");
        assert_eq!(session.text_answer(0), "2");
        assert_eq!(session.remaining_words(), None);
    }

    #[test]
    fn only_current_question_accepts_answers() {
        let mut session = PracticeSession::new(&three_question_set());
        let outcome = session.submit_answer(1, "hello");
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(Rejection::NotCurrent { index: 1, current: 0 })
        );
        assert!(session.answers().is_empty());
    }

    #[test]
    fn advance_clamps_after_completion() {
        let mut session = PracticeSession::new(&three_question_set());
        let _ = run_to_end(&mut session);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.advance(), Step::AlreadyFinished);
        assert_eq!(session.advance(), Step::AlreadyFinished);
        assert_eq!(session.current_index(), 2);
        assert!(session.is_completed());
        assert_eq!(session.phase(), Phase::Completed);
    }

    #[test]
    fn retreat_at_start_is_noop() {
        let mut session = PracticeSession::new(&three_question_set());
        let before = session.clone();
        assert!(!session.retreat());
        assert_eq!(session, before);
    }

    #[test]
    fn retreat_moves_back_but_not_after_finish() {
        let mut session = PracticeSession::new(&three_question_set());
        let _ = session.advance();
        assert!(session.retreat());
        assert_eq!(session.current_index(), 0);

        let _ = run_to_end(&mut session);
        assert!(!session.retreat());
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn completed_session_ignores_submissions() {
        let mut session = PracticeSession::new(&three_question_set());
        let _ = run_to_end(&mut session);
        assert_eq!(
            session.submit_answer(2, "late"),
            SubmitOutcome::Rejected(Rejection::Completed)
        );
    }

    #[test]
    fn reset_matches_fresh_session() {
        let set = three_question_set();
        let mut session = PracticeSession::new(&set);
        let _ = session.submit_answer(0, "3");
        let _ = session.advance();
        let _ = session.submit_answer(1, "some words");
        let _ = run_to_end(&mut session);

        session.reset();
        assert_eq!(session, PracticeSession::new(&set));
        assert_eq!(session.phase(), Phase::NotStarted);
    }

    #[test]
    fn first_answer_or_move_starts_progress() {
        let set = three_question_set();

        let mut answered = PracticeSession::new(&set);
        assert_eq!(answered.phase(), Phase::NotStarted);
        assert!(answered.submit_answer(0, "1").is_accepted());
        assert_eq!(answered.phase(), Phase::InProgress);

        let mut moved = PracticeSession::new(&set);
        assert_eq!(moved.advance(), Step::Moved(1));
        assert_eq!(moved.phase(), Phase::InProgress);
        assert!(moved.retreat());
        assert_eq!(moved.phase(), Phase::NotStarted);

        let _ = run_to_end(&mut moved);
        assert_eq!(moved.phase(), Phase::Completed);
    }

    #[test]
    fn progress_counts_current_question() {
        let mut session = PracticeSession::new(&three_question_set());
        assert_eq!(session.progress_percent(), 33);
        let _ = session.advance();
        let _ = session.advance();
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn matching_placements() {
        let mut session = PracticeSession::from_questions(vec![
            Matching::new(
                "Match the elements with their impacts.",
                vec![
                    MatchingPair::new("Recycling bins", "Classroom waste reduction"),
                    MatchingPair::new("Senior workshops", "Knowledge sharing"),
                ],
            )
            .unwrap()
            .into(),
        ])
        .unwrap();

        assert_eq!(
            session.submit_answer(0, "text"),
            SubmitOutcome::Rejected(Rejection::KindMismatch)
        );
        assert_eq!(
            session.submit_match(0, "Bicycles", "Knowledge sharing"),
            SubmitOutcome::Rejected(Rejection::UnknownPairing)
        );
        assert!(session
            .submit_match(0, "Senior workshops", "Knowledge sharing")
            .is_accepted());
        assert!(session
            .submit_match(0, "Recycling bins", "Knowledge sharing")
            .is_accepted());
        assert!(session.clear_match(0, "Recycling bins").is_accepted());

        let summary = run_to_end(&mut session);
        assert_eq!(summary.matching_attempted(), 1);
        assert_eq!(summary.matching_pairs_correct(), 1);
        assert_eq!(summary.matching_pairs_total(), 2);
    }

    #[test]
    fn clearing_last_placement_unanswers_question() {
        let mut session = PracticeSession::from_questions(vec![
            Matching::new("Match.", vec![MatchingPair::new("a", "b")])
                .unwrap()
                .into(),
        ])
        .unwrap();
        let _ = session.submit_match(0, "a", "b");
        let _ = session.clear_match(0, "a");
        assert!(session.response(0).is_none());
        assert_eq!(session.phase(), Phase::NotStarted);
    }
}
