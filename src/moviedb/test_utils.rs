use crate::error::{MovieDbError, Result};
use crate::metadata::MovieLookup;
use crate::model::NewMovie;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TITANIC_JSON: &str = r#"{"Titanic":{"rating":7.8,"year":1997,"imdbID":"tt0120338"}}"#;
pub const TITANIC_CSV: &str = "title,rating,year,imdbID,notes\nTitanic,7.8,1997,tt0120338,\n";

/// Lookup that answers from a fixed table.
#[derive(Default)]
pub struct FakeLookup {
    movies: HashMap<String, NewMovie>,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, movie: NewMovie) -> Self {
        self.movies.insert(movie.title.to_lowercase(), movie);
        self
    }
}

impl MovieLookup for FakeLookup {
    fn lookup(&self, title: &str) -> Result<NewMovie> {
        self.movies
            .get(&title.to_lowercase())
            .cloned()
            .ok_or_else(|| MovieDbError::Lookup("Movie not found!".to_string()))
    }
}

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Write `content` to `name` inside the temp dir and return its path.
    pub fn seed(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).expect("failed to seed catalog");
        path
    }
}
