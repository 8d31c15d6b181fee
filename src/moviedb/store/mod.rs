//! # Storage Layer
//!
//! This module defines the persistence contract for the movie catalog. The
//! [`CatalogStore`] trait is the only way the rest of the crate touches the
//! backing file.
//!
//! ## Implementations
//!
//! - [`json::JsonCatalogStore`]: the catalog as one JSON object keyed by title
//! - [`csv::CsvCatalogStore`]: a `title,...` header row plus one row per movie
//! - [`memory::InMemoryStore`]: no persistence, for command tests
//!
//! ## Load, Mutate, Store
//!
//! Every mutation reads the whole file, changes the in-memory [`Catalog`] and
//! rewrites the whole file. Nothing is cached between calls: the file is the
//! single source of truth. Backends only implement [`CatalogStore::list`] and
//! [`CatalogStore::save`]; `add`, `delete` and `update` are built on top of
//! those two, so every format shares the same mutation semantics.
//!
//! Writes never happen in place. The new content goes to a temporary file in
//! the same directory which is then renamed over the target, so a crash
//! mid-write leaves the previous catalog intact.
//!
//! The store trusts its caller: values are stored as given, and `delete` /
//! `update` fail with [`MovieDbError::NotFound`] on an unknown title instead of
//! recovering. Callers are expected to check membership with `list` first.

use crate::error::{MovieDbError, Result};
use crate::model::{Catalog, NewMovie, Record};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub mod csv;
pub mod json;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

pub use self::csv::CsvCatalogStore;
pub use self::json::JsonCatalogStore;

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Location of the backing file.
    fn path(&self) -> &Path;

    /// Read the entire backing file.
    fn list(&self) -> Result<Catalog>;

    /// Replace the backing file with the given catalog.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;

    /// Create the backing file holding an empty catalog. Returns `false`
    /// when the file already exists, which is left untouched.
    fn init(&mut self) -> Result<bool> {
        if self.path().exists() {
            return Ok(false);
        }
        self.save(&Catalog::new())?;
        Ok(true)
    }

    /// Insert or overwrite the entry for `movie.title`.
    fn add(&mut self, movie: &NewMovie) -> Result<()> {
        let mut catalog = self.list()?;
        catalog.insert(movie.title.clone(), Record::from_movie(movie));
        self.save(&catalog)
    }

    /// Remove the entry for `title`; `NotFound` when there is none.
    fn delete(&mut self, title: &str) -> Result<()> {
        let mut catalog = self.list()?;
        if catalog.shift_remove(title).is_none() {
            return Err(MovieDbError::NotFound(title.to_string()));
        }
        self.save(&catalog)
    }

    /// Set the notes of an existing entry.
    fn update(&mut self, title: &str, notes: &str) -> Result<()> {
        let mut catalog = self.list()?;
        let record = catalog
            .get_mut(title)
            .ok_or_else(|| MovieDbError::NotFound(title.to_string()))?;
        record.set_notes(notes);
        self.save(&catalog)
    }
}

impl<S: CatalogStore + ?Sized> CatalogStore for Box<S> {
    fn path(&self) -> &Path {
        (**self).path()
    }

    fn list(&self) -> Result<Catalog> {
        (**self).list()
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        (**self).save(catalog)
    }

    fn init(&mut self) -> Result<bool> {
        (**self).init()
    }

    fn add(&mut self, movie: &NewMovie) -> Result<()> {
        (**self).add(movie)
    }

    fn delete(&mut self, title: &str) -> Result<()> {
        (**self).delete(title)
    }

    fn update(&mut self, title: &str, notes: &str) -> Result<()> {
        (**self).update(title, notes)
    }
}

/// Supported file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Json,
    Csv,
}

impl StoreFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(StoreFormat::Json),
            Some("csv") => Ok(StoreFormat::Csv),
            Some(other) => Err(MovieDbError::Api(format!(
                "Unsupported catalog file extension: .{} (use .json or .csv)",
                other
            ))),
            None => Err(MovieDbError::Api(format!(
                "Catalog file has no extension: {} (use .json or .csv)",
                path.display()
            ))),
        }
    }
}

/// Open the backend matching the file's extension.
pub fn open_store(path: impl Into<PathBuf>) -> Result<Box<dyn CatalogStore>> {
    let path = path.into();
    let store: Box<dyn CatalogStore> = match StoreFormat::from_path(&path)? {
        StoreFormat::Json => Box::new(JsonCatalogStore::new(path)),
        StoreFormat::Csv => Box::new(CsvCatalogStore::new(path)),
    };
    Ok(store)
}

/// Write `content` to `target` through a temporary sibling file and a rename.
pub(crate) fn write_atomic(target: &Path, content: &[u8]) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(MovieDbError::Io)?;
    }

    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("catalog");
    let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    fs::write(&tmp_path, content).map_err(MovieDbError::Io)?;
    if let Err(e) = fs::rename(&tmp_path, target) {
        let _ = fs::remove_file(&tmp_path);
        return Err(MovieDbError::Io(e));
    }
    Ok(())
}
