use std::{fs::File, io::BufReader, io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{BirdcardError, BirdcardResult};

/// One catalog entry identifying a bird species.
///
/// Field names on the wire are the catalog's own keys (`目`, `科`, `种`, `href`).
/// Identity is the species name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// Taxonomic order.
    #[serde(rename = "目")]
    pub order: String,
    /// Taxonomic family.
    #[serde(rename = "科")]
    pub family: String,
    /// Species name.
    #[serde(rename = "种")]
    pub species: String,
    /// Reference page URL (empty when the catalog omits it).
    #[serde(default)]
    pub href: String,
}

/// Immutable, ordered list of species records loaded once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<SpeciesRecord>,
}

impl Catalog {
    /// Build a catalog from records, preserving their order.
    pub fn new(records: Vec<SpeciesRecord>) -> Self {
        Self { records }
    }

    /// Load a UTF-8 JSON array of records from `path`.
    #[tracing::instrument(skip_all)]
    pub fn load(path: impl AsRef<Path>) -> BirdcardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BirdcardError::catalog(format!("open catalog '{}': {e}", path.display()))
        })?;
        let catalog = Self::from_reader(BufReader::new(f)).map_err(|e| match e {
            BirdcardError::Catalog(msg) => {
                BirdcardError::catalog(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })?;
        tracing::debug!(path = %path.display(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse a JSON array of records.
    pub fn from_reader(r: impl Read) -> BirdcardResult<Self> {
        let records: Vec<SpeciesRecord> = serde_json::from_reader(r)
            .map_err(|e| BirdcardError::catalog(format!("parse catalog JSON: {e}")))?;
        Ok(Self::new(records))
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[SpeciesRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose species name contains `query` (case-sensitive), in catalog order.
    ///
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&SpeciesRecord> {
        if query.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.species.contains(query))
            .collect()
    }

    /// First record whose species name equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&SpeciesRecord> {
        self.records.iter().find(|r| r.species == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/species.rs"]
mod tests;
