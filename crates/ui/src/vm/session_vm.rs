use practice_core::model::{Question, Response, ScoreSummary, SetId};
use practice_core::{PracticeSession, Rejection, Step, SubmitOutcome};
use services::{CatalogError, SessionLoopService, SessionProgress};

use crate::views::ViewError;
use crate::vm::{ScoreSummaryVm, map_score_summary};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    SelectOption(usize),
    EditText(String),
    PlaceMatch { item: String, target: String },
    ClearMatch(String),
    Previous,
    Next,
    TryAgain,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionOutcome {
    Continue,
    Rejected(Rejection),
    Completed(ScoreSummary),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRowVm {
    pub item: String,
    pub selected: Option<String>,
}

/// Input control for the displayed question, one arm per question type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerControlVm {
    Choices {
        options: Vec<ChoiceVm>,
    },
    ShortText {
        value: String,
        max_label: String,
        remaining_label: String,
    },
    LongText {
        value: String,
        length_hint: Option<String>,
    },
    Matching {
        rows: Vec<MatchRowVm>,
        targets: Vec<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub prompt: String,
    pub kind_label: &'static str,
    pub control: AnswerControlVm,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionVm {
    title: String,
    passage: String,
    session: PracticeSession,
}

impl SessionVm {
    #[must_use]
    pub fn new(title: impl Into<String>, passage: impl Into<String>, session: PracticeSession) -> Self {
        Self {
            title: title.into(),
            passage: passage.into(),
            session,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn passage(&self) -> &str {
        &self.passage
    }

    #[must_use]
    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::of(&self.session)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.session.is_completed()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.session.is_first() && !self.session.is_completed()
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.session.is_last() { "Finish" } else { "Next" }
    }

    #[must_use]
    pub fn summary(&self) -> Option<ScoreSummaryVm> {
        self.session.summary().map(map_score_summary)
    }

    #[must_use]
    pub fn question(&self) -> QuestionVm {
        let index = self.session.current_index();
        let question = self.session.current_question();
        let control = match question {
            Question::MultipleChoice(q) => {
                let selected = self
                    .session
                    .text_answer(index)
                    .trim()
                    .parse::<usize>()
                    .ok();
                AnswerControlVm::Choices {
                    options: q
                        .options()
                        .iter()
                        .enumerate()
                        .map(|(option, label)| ChoiceVm {
                            index: option,
                            label: label.clone(),
                            selected: selected == Some(option),
                        })
                        .collect(),
                }
            }
            Question::ShortAnswer(q) => {
                let remaining = self.session.remaining_words().unwrap_or_default();
                AnswerControlVm::ShortText {
                    value: self.session.text_answer(index).to_string(),
                    max_label: format!("Maximum: {} words", q.max_words()),
                    remaining_label: format!("{remaining} words remaining"),
                }
            }
            Question::Paragraph(q) => AnswerControlVm::LongText {
                value: self.session.text_answer(index).to_string(),
                length_hint: q
                    .expected_length()
                    .map(|words| format!("Suggested length: about {words} words")),
            },
            Question::Matching(q) => {
                let placed = self.session.response(index).and_then(Response::matches);
                let rows = q
                    .items()
                    .map(|item| MatchRowVm {
                        item: item.to_string(),
                        selected: placed.and_then(|map| map.get(item)).cloned(),
                    })
                    .collect();
                // Sorted so the option order does not give away the key.
                let mut targets = q.targets().map(str::to_string).collect::<Vec<_>>();
                targets.sort();
                AnswerControlVm::Matching { rows, targets }
            }
        };

        QuestionVm {
            index,
            prompt: question.prompt().to_string(),
            kind_label: question.kind().label(),
            control,
        }
    }

    pub fn apply(&mut self, session_loop: &SessionLoopService, intent: SessionIntent) -> SessionOutcome {
        let submitted = match intent {
            SessionIntent::SelectOption(option) => {
                session_loop.answer_current(&mut self.session, &option.to_string())
            }
            SessionIntent::EditText(text) => session_loop.answer_current(&mut self.session, &text),
            SessionIntent::PlaceMatch { item, target } => {
                session_loop.place_match(&mut self.session, &item, &target)
            }
            SessionIntent::ClearMatch(item) => session_loop.clear_match(&mut self.session, &item),
            SessionIntent::Previous => {
                let _ = session_loop.retreat(&mut self.session);
                return SessionOutcome::Continue;
            }
            SessionIntent::Next => {
                return match session_loop.advance(&mut self.session) {
                    Step::Finished(summary) => SessionOutcome::Completed(summary),
                    Step::Moved(_) | Step::AlreadyFinished => SessionOutcome::Continue,
                };
            }
            SessionIntent::TryAgain => {
                session_loop.restart(&mut self.session);
                return SessionOutcome::Continue;
            }
        };

        match submitted {
            SubmitOutcome::Accepted => SessionOutcome::Continue,
            SubmitOutcome::Rejected(reason) => SessionOutcome::Rejected(reason),
        }
    }
}

/// # Errors
///
/// Returns `ViewError::NotFound` when the set is not in the catalog.
/// Returns `ViewError::Unknown` for other failures.
pub fn start_session(session_loop: &SessionLoopService, set_id: SetId) -> Result<SessionVm, ViewError> {
    let session = match session_loop.start_session(set_id) {
        Ok(session) => session,
        Err(services::SessionError::Catalog(CatalogError::NotFound(_))) => {
            return Err(ViewError::NotFound);
        }
        Err(_) => return Err(ViewError::Unknown),
    };
    let set = session_loop
        .catalog()
        .get_set(set_id)
        .ok_or(ViewError::NotFound)?;

    Ok(SessionVm::new(set.title(), set.passage(), session))
}
