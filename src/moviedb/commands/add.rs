use crate::commands::{CmdMessage, CmdResult, MovieRow};
use crate::error::{MovieDbError, Result};
use crate::metadata::MovieLookup;
use crate::model::{NewMovie, Record};
use crate::store::CatalogStore;
use tracing::info;

/// Look the title up and store whatever the lookup returns.
pub fn run<S: CatalogStore, L: MovieLookup + ?Sized>(
    store: &mut S,
    lookup: &L,
    title: &str,
) -> Result<CmdResult> {
    let title = title.trim();
    if title.is_empty() {
        return Err(MovieDbError::Api("Movie title cannot be empty".into()));
    }
    let movie = lookup.lookup(title)?;
    store_movie(store, movie)
}

/// Store a movie whose details were supplied directly.
pub fn run_manual<S: CatalogStore>(store: &mut S, movie: NewMovie) -> Result<CmdResult> {
    store_movie(store, movie)
}

fn store_movie<S: CatalogStore>(store: &mut S, movie: NewMovie) -> Result<CmdResult> {
    let replaced = store.list()?.contains_key(&movie.title);
    store.add(&movie)?;
    info!(title = %movie.title, replaced, "movie stored");

    let mut result = CmdResult::default();
    let verb = if replaced { "replaced" } else { "added" };
    result.add_message(CmdMessage::success(format!(
        "Movie \"{}\" {}",
        movie.title, verb
    )));
    result.listed_movies = vec![MovieRow::new(movie.title.clone(), Record::from_movie(&movie))];
    Ok(result)
}
