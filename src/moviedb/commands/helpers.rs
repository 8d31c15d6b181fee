use super::MovieRow;
use crate::error::{MovieDbError, Result};
use crate::model::Catalog;
use crate::store::CatalogStore;

pub fn movie_rows(catalog: Catalog) -> Vec<MovieRow> {
    catalog
        .into_iter()
        .map(|(title, record)| MovieRow::new(title, record))
        .collect()
}

pub fn listed_movies<S: CatalogStore>(store: &S) -> Result<Vec<MovieRow>> {
    Ok(movie_rows(store.list()?))
}

/// Membership pre-check required before `delete` / `update`.
pub fn ensure_exists<S: CatalogStore>(store: &S, title: &str) -> Result<()> {
    if store.list()?.contains_key(title) {
        Ok(())
    } else {
        Err(MovieDbError::NotFound(title.to_string()))
    }
}
