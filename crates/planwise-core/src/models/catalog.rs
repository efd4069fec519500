//! Lookup catalogs for subjects, terms, and years.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanwiseError, Result};

/// One row of a lookup table: an identifier and its display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Backend identifier
    pub id: u64,
    /// Human-readable name (e.g. "Mathematics", "Term 1", "Year 9")
    pub display_name: String,
}

/// Read-only lookup tables supplied by collaborators.
///
/// The rule engine performs no fetching of its own; whoever calls it loads
/// these tables (from the backend in the real system, from a JSON file in
/// the CLI) and passes them in. Unknown ids simply fail to resolve; the
/// naming rules treat that as "omit" or "no suggestion", never as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    /// Academic subjects
    #[serde(default)]
    pub subjects: Vec<CatalogEntry>,
    /// Academic terms
    #[serde(default)]
    pub terms: Vec<CatalogEntry>,
    /// Academic years
    #[serde(default)]
    pub years: Vec<CatalogEntry>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// * [`PlanwiseError::FileSystem`] - When the file cannot be read
    /// * [`PlanwiseError::Serialization`] - When the JSON is malformed
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PlanwiseError::file_system(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Resolve a subject id to its display name.
    pub fn subject_name(&self, id: u64) -> Option<&str> {
        Self::find(&self.subjects, id)
    }

    /// Resolve a term id to its display name.
    pub fn term_name(&self, id: u64) -> Option<&str> {
        Self::find(&self.terms, id)
    }

    /// Resolve a year id to its display name.
    pub fn year_name(&self, id: u64) -> Option<&str> {
        Self::find(&self.years, id)
    }

    fn find(entries: &[CatalogEntry], id: u64) -> Option<&str> {
        entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.display_name.as_str())
    }
}
