use super::{write_atomic, CatalogStore};
use crate::error::{MovieDbError, Result};
use crate::model::Catalog;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog stored as a single JSON object keyed by title.
///
/// Records are free-form objects, so movies with and without optional fields
/// (`poster_url`, `notes`) sit side by side without any schema work.
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogStore for JsonCatalogStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn list(&self) -> Result<Catalog> {
        let content = fs::read_to_string(&self.path).map_err(MovieDbError::Io)?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        Ok(catalog)
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        let content = serde_json::to_string_pretty(catalog)?;
        write_atomic(&self.path, content.as_bytes())
    }
}
