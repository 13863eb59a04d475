#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod sessions;

pub use app_services::AppServices;
pub use catalog::CatalogService;
pub use error::{CatalogError, SessionError};
pub use sessions::{SessionLoopService, SessionProgress};
