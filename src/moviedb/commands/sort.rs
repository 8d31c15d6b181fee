use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;
use std::cmp::Ordering;

use super::helpers::listed_movies;

/// Movies by rating, best first. Movies without a numeric rating go last.
pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let mut movies = listed_movies(store)?;
    movies.sort_by(|a, b| {
        match (a.record.rating_value(), b.record.rating_value()) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    Ok(CmdResult::default().with_listed_movies(movies))
}
