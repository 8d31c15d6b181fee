use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::helpers::listed_movies;

pub fn run<S: CatalogStore, R: Rng + ?Sized>(store: &S, rng: &mut R) -> Result<CmdResult> {
    let movies = listed_movies(store)?;
    let mut result = CmdResult::default();

    match movies.choose(rng) {
        Some(movie) => Ok(result.with_listed_movies(vec![movie.clone()])),
        None => {
            result.add_message(CmdMessage::warning("No movies in the database"));
            Ok(result)
        }
    }
}
