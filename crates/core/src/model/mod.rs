mod ids;
mod library;
mod practice_set;
mod question;
mod response;
mod summary;

pub use ids::{ParseIdError, SetId};
pub use library::{Difficulty, LibraryEntry, LibraryFilter, ProblemKind};
pub use practice_set::{PracticeSet, PracticeSetError};
pub use question::{
    Matching, MatchingPair, MultipleChoice, Paragraph, Question, QuestionError, QuestionKind,
    ShortAnswer,
};
pub use response::Response;
pub use summary::ScoreSummary;
