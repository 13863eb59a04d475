use std::collections::HashSet;

use practice_core::model::{LibraryEntry, LibraryFilter, PracticeSet, SetId};
use tracing::{debug, info};

use super::mapping::{map_library_entry, map_practice_set};
use super::records::{LibraryRecord, PracticeSetRecord};
use crate::error::CatalogError;

const PRACTICE_SETS_JSON: &str = include_str!("../../data/practice_sets.json");
const LIBRARY_JSON: &str = include_str!("../../data/library.json");

/// Read-only question bank: the practice sets and the library listing.
#[derive(Debug, Clone)]
pub struct CatalogService {
    sets: Vec<PracticeSet>,
    library: Vec<LibraryEntry>,
}

impl CatalogService {
    /// Build a catalog from already validated sets and entries.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateSet` if two practice sets share an id.
    pub fn new(sets: Vec<PracticeSet>, library: Vec<LibraryEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for set in &sets {
            if !seen.insert(set.id()) {
                return Err(CatalogError::DuplicateSet(set.id()));
            }
        }
        Ok(Self { sets, library })
    }

    /// Load the question bank compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded tables are malformed or invalid.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(PRACTICE_SETS_JSON, LIBRARY_JSON)
    }

    /// Parse and validate both data tables.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` for JSON that does not match the table shape,
    /// and the matching validation error for records that break a domain rule.
    pub fn from_json(sets_json: &str, library_json: &str) -> Result<Self, CatalogError> {
        let set_records: Vec<PracticeSetRecord> =
            serde_json::from_str(sets_json).map_err(|source| CatalogError::Malformed {
                table: "practice set",
                source,
            })?;
        let library_records: Vec<LibraryRecord> =
            serde_json::from_str(library_json).map_err(|source| CatalogError::Malformed {
                table: "library",
                source,
            })?;

        let sets = set_records
            .into_iter()
            .map(map_practice_set)
            .collect::<Result<Vec<_>, _>>()?;
        let library = library_records
            .into_iter()
            .map(map_library_entry)
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self::new(sets, library)?;
        info!(
            sets = catalog.sets.len(),
            library_entries = catalog.library.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn sets(&self) -> &[PracticeSet] {
        &self.sets
    }

    #[must_use]
    pub fn get_set(&self, id: SetId) -> Option<&PracticeSet> {
        self.sets.iter().find(|set| set.id() == id)
    }

    #[must_use]
    pub fn has_set(&self, id: SetId) -> bool {
        self.get_set(id).is_some()
    }

    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` for an unknown id.
    pub fn require_set(&self, id: SetId) -> Result<&PracticeSet, CatalogError> {
        self.get_set(id).ok_or(CatalogError::NotFound(id))
    }

    #[must_use]
    pub fn library(&self) -> &[LibraryEntry] {
        &self.library
    }

    #[must_use]
    pub fn search_library(&self, filter: &LibraryFilter) -> Vec<&LibraryEntry> {
        let hits = filter.apply(&self.library);
        debug!(
            query = %filter.query,
            kind = ?filter.kind,
            difficulty = ?filter.difficulty,
            hits = hits.len(),
            "library filtered"
        );
        hits
    }
}
