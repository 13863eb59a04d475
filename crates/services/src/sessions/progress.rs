use practice_core::PracticeSession;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    /// 1-based position of the displayed question.
    pub position: usize,
    pub answered: usize,
    pub percent: u32,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn of(session: &PracticeSession) -> Self {
        Self {
            total: session.total(),
            position: session.current_index() + 1,
            answered: session.answered_count(),
            percent: session.progress_percent(),
            is_complete: session.is_completed(),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.position, self.total)
    }
}
