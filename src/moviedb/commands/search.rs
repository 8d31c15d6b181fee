use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::listed_movies;

/// Case-insensitive substring match on titles, in catalog order.
pub fn run<S: CatalogStore>(store: &S, term: &str) -> Result<CmdResult> {
    let term_lower = term.to_lowercase();
    let matches: Vec<_> = listed_movies(store)?
        .into_iter()
        .filter(|m| m.title.to_lowercase().contains(&term_lower))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::warning("Movie not in list."));
    }
    Ok(result.with_listed_movies(matches))
}
