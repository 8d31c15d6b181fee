use super::CatalogStore;
use crate::error::Result;
use crate::model::Catalog;
use std::path::Path;

/// Non-persistent store used by command and API tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalog: Catalog,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog, saves: 0 }
    }

    /// Number of full rewrites performed so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl CatalogStore for InMemoryStore {
    fn path(&self) -> &Path {
        Path::new(":memory:")
    }

    fn list(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.catalog = catalog.clone();
        self.saves += 1;
        Ok(())
    }

    fn init(&mut self) -> Result<bool> {
        Ok(false)
    }
}

// --- Test Fixtures ---

pub mod fixtures {
    use super::*;
    use crate::model::{NewMovie, NOT_AVAILABLE};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_movie(mut self, title: &str, year: i64, rating: f64) -> Self {
            let imdb_id = format!("tt{:07}", self.store.catalog.len() + 1);
            let movie = NewMovie::new(title, year, rating, NOT_AVAILABLE, imdb_id);
            self.store.add(&movie).unwrap();
            self
        }

        pub fn with_poster(mut self, title: &str, year: i64, rating: f64, poster: &str) -> Self {
            let imdb_id = format!("tt{:07}", self.store.catalog.len() + 1);
            let movie = NewMovie::new(title, year, rating, poster, imdb_id);
            self.store.add(&movie).unwrap();
            self
        }

        pub fn with_notes(mut self, title: &str, notes: &str) -> Self {
            self.store.update(title, notes).unwrap();
            self
        }

        /// Titanic, Up and Alien with their IMDb ratings.
        pub fn classics() -> Self {
            Self::new()
                .with_poster("Titanic", 1997, 7.8, "http://posters/titanic.jpg")
                .with_movie("Up", 2009, 8.3)
                .with_movie("Alien", 1979, 8.5)
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
