mod create_set;
mod home;
mod library;
mod practice;
mod session;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use create_set::CreateSetModal;
pub use home::HomeView;
pub use library::LibraryView;
pub use practice::PracticeView;
pub use session::SessionView;
pub use state::{ViewError, ViewState, view_state_from_resource};
