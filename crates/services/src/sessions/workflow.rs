use std::sync::Arc;

use practice_core::model::SetId;
use practice_core::{PracticeSession, Step, SubmitOutcome};
use tracing::{debug, info};

use crate::catalog::CatalogService;
use crate::error::SessionError;

/// Orchestrates session start and answering against the catalog.
///
/// The session itself stays owned by the caller; this service only looks up sets
/// and records what happened.
#[derive(Clone)]
pub struct SessionLoopService {
    catalog: Arc<CatalogService>,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Start a new session for the given practice set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` if the set does not exist.
    pub fn start_session(&self, set_id: SetId) -> Result<PracticeSession, SessionError> {
        let set = self.catalog.require_set(set_id)?;
        let session = PracticeSession::new(set);
        info!(
            set_id = %set_id,
            questions = session.total(),
            "practice session started"
        );
        Ok(session)
    }

    /// Answer the displayed question with free text or a stringified option index.
    pub fn answer_current(&self, session: &mut PracticeSession, value: &str) -> SubmitOutcome {
        let index = session.current_index();
        let outcome = session.submit_answer(index, value);
        log_rejection(session, index, outcome);
        outcome
    }

    /// Place a matching item on a target for the displayed question.
    pub fn place_match(
        &self,
        session: &mut PracticeSession,
        item: &str,
        target: &str,
    ) -> SubmitOutcome {
        let index = session.current_index();
        let outcome = session.submit_match(index, item, target);
        log_rejection(session, index, outcome);
        outcome
    }

    pub fn clear_match(&self, session: &mut PracticeSession, item: &str) -> SubmitOutcome {
        let index = session.current_index();
        let outcome = session.clear_match(index, item);
        log_rejection(session, index, outcome);
        outcome
    }

    /// Move forward, finishing the session from the last question.
    pub fn advance(&self, session: &mut PracticeSession) -> Step {
        let step = session.advance();
        if let Step::Finished(summary) = &step {
            info!(
                set_id = ?session.set_id(),
                total_questions = summary.total_questions(),
                multiple_choice_accuracy = summary.multiple_choice_accuracy(),
                short_answer_attempted = summary.short_answer_attempted(),
                paragraph_attempted = summary.paragraph_attempted(),
                matching_attempted = summary.matching_attempted(),
                "practice session completed"
            );
        }
        step
    }

    pub fn retreat(&self, session: &mut PracticeSession) -> bool {
        session.retreat()
    }

    /// Clear answers and return to the first question of the same set.
    pub fn restart(&self, session: &mut PracticeSession) {
        session.reset();
        debug!(set_id = ?session.set_id(), "practice session restarted");
    }
}

fn log_rejection(session: &PracticeSession, index: usize, outcome: SubmitOutcome) {
    if let SubmitOutcome::Rejected(reason) = outcome {
        debug!(
            set_id = ?session.set_id(),
            index,
            reason = ?reason,
            "answer rejected"
        );
    }
}
