mod mapping;
mod records;
mod service;

pub use crate::error::CatalogError;
pub use service::CatalogService;
