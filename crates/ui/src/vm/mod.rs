mod library_vm;
mod practice_vm;
mod session_vm;
mod summary_vm;

pub use library_vm::{ALL_OPTION, LibraryCardVm, filter_from_inputs, map_library_card};
pub use practice_vm::{PracticeSetCardVm, map_practice_set_card};
pub use session_vm::{
    AnswerControlVm, ChoiceVm, MatchRowVm, QuestionVm, SessionIntent, SessionOutcome, SessionVm,
    start_session,
};
pub use summary_vm::{ScoreSummaryVm, map_score_summary};
