//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI (the one-shot CLI and the interactive menu alike).
//!
//! It dispatches to `commands/*.rs`, normalizes inputs (trimming titles and
//! search terms) and returns `Result<CmdResult>`. It never prints.
//!
//! ## Generic Over CatalogStore
//!
//! `MovieApi<S: CatalogStore>` is generic over the storage backend:
//! - Production: `MovieApi<Box<dyn CatalogStore>>`, chosen by file extension
//! - Testing: `MovieApi<InMemoryStore>`
//!
//! The metadata lookup is injected the same way, so nothing in here needs the
//! network.

use crate::commands;
use crate::error::{MovieDbError, Result};
use crate::metadata::MovieLookup;
use crate::model::NewMovie;
use crate::store::CatalogStore;
use std::path::Path;
use tracing::debug;

/// The main API facade for catalog operations.
pub struct MovieApi<S: CatalogStore> {
    store: S,
    lookup: Box<dyn MovieLookup>,
    website: WebsiteOptions,
}

impl<S: CatalogStore> MovieApi<S> {
    pub fn new(store: S, lookup: Box<dyn MovieLookup>, website: WebsiteOptions) -> Self {
        Self {
            store,
            lookup,
            website,
        }
    }

    pub fn catalog_path(&self) -> &Path {
        self.store.path()
    }

    /// Membership check for UIs that must confirm a title before
    /// deleting or updating it.
    pub fn has_movie(&self, title: &str) -> Result<bool> {
        Ok(self.store.list()?.contains_key(title))
    }

    pub fn list_movies(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_movie(&mut self, title: &str) -> Result<commands::CmdResult> {
        debug!(title, "add via lookup");
        commands::add::run(&mut self.store, self.lookup.as_ref(), title)
    }

    pub fn add_movie_manual(&mut self, movie: NewMovie) -> Result<commands::CmdResult> {
        if movie.title.trim().is_empty() {
            return Err(MovieDbError::Api("Movie title cannot be empty".into()));
        }
        commands::add::run_manual(&mut self.store, movie)
    }

    pub fn delete_movie(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, title)
    }

    pub fn update_movie(&mut self, title: &str, notes: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, title, notes)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn random_movie(&self) -> Result<commands::CmdResult> {
        commands::random::run(&self.store, &mut rand::rng())
    }

    pub fn search_movies(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term.trim())
    }

    pub fn sorted_movies(&self) -> Result<commands::CmdResult> {
        commands::sort::run(&self.store)
    }

    pub fn generate_website(&self) -> Result<commands::CmdResult> {
        commands::website::run(&self.store, &self.website)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn set_output_path(&mut self, path: impl Into<std::path::PathBuf>) {
        self.website.output_path = path.into();
    }
}

pub use commands::website::WebsiteOptions;
pub use commands::{CmdMessage, CmdResult, MessageLevel, MovieRow, Stats};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::FakeLookup;
    use std::path::PathBuf;

    fn api_with(store: InMemoryStore, lookup: FakeLookup) -> MovieApi<InMemoryStore> {
        let website = WebsiteOptions {
            site_title: "Test".into(),
            template_path: None,
            output_path: PathBuf::from("unused.html"),
        };
        MovieApi::new(store, Box::new(lookup), website)
    }

    #[test]
    fn add_dispatches_through_lookup() {
        let lookup =
            FakeLookup::new().with(NewMovie::new("Up", "2009", 8.3, "N/A", "tt1049413"));
        let mut api = api_with(InMemoryStore::new(), lookup);

        api.add_movie("Up").unwrap();
        assert!(api.has_movie("Up").unwrap());
        assert_eq!(api.list_movies().unwrap().listed_movies.len(), 1);
    }

    #[test]
    fn manual_add_rejects_blank_title() {
        let mut api = api_with(InMemoryStore::new(), FakeLookup::new());
        let movie = NewMovie::new(" ", 2000, 5.0, "N/A", "tt0");
        assert!(matches!(
            api.add_movie_manual(movie),
            Err(MovieDbError::Api(_))
        ));
    }

    #[test]
    fn delete_and_update_go_through_commands() {
        let mut api = api_with(StoreFixture::classics().build(), FakeLookup::new());

        api.update_movie("Up", "Squirrel!").unwrap();
        api.delete_movie("Titanic").unwrap();

        let listed = api.list_movies().unwrap().listed_movies;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "Up");
        assert_eq!(listed[0].record.notes(), Some("Squirrel!"));
        assert!(matches!(
            api.delete_movie("Titanic"),
            Err(MovieDbError::NotFound(_))
        ));
    }

    #[test]
    fn search_term_is_trimmed() {
        let api = api_with(StoreFixture::classics().build(), FakeLookup::new());
        let result = api.search_movies("  alien ").unwrap();
        assert_eq!(result.listed_movies.len(), 1);
    }

    #[test]
    fn random_and_sorted_cover_catalog() {
        let api = api_with(StoreFixture::classics().build(), FakeLookup::new());
        assert_eq!(api.random_movie().unwrap().listed_movies.len(), 1);
        assert_eq!(api.sorted_movies().unwrap().listed_movies[0].title, "Alien");
        assert!(api.stats().unwrap().stats.is_some());
    }
}
