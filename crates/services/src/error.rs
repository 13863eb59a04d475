//! Shared error types for the services crate.

use thiserror::Error;

use practice_core::model::{PracticeSetError, QuestionError, SetId};

/// Errors emitted while loading or querying the question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("malformed {table} data: {source}")]
    Malformed {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("practice set {id}, question {index}: {source}")]
    InvalidQuestion {
        id: SetId,
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error("practice set {id}: {source}")]
    InvalidSet {
        id: SetId,
        #[source]
        source: PracticeSetError,
    },
    #[error("library entry {id}: {reason}")]
    InvalidLibraryEntry { id: SetId, reason: String },
    #[error("duplicate practice set id {0}")]
    DuplicateSet(SetId),
    #[error("practice set {0} not found")]
    NotFound(SetId),
}

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
