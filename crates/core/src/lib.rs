#![forbid(unsafe_code)]

pub mod model;
pub mod session;
pub mod text;

pub use session::{Phase, PracticeSession, Rejection, SessionError, Step, SubmitOutcome};
