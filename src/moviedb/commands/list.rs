use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::listed_movies;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let movies = listed_movies(store)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("{} movies in total", movies.len())));
    Ok(result.with_listed_movies(movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_catalog_order() {
        let store = StoreFixture::classics().build();
        let result = run(&store).unwrap();

        let titles: Vec<_> = result.listed_movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Titanic", "Up", "Alien"]);
        assert_eq!(result.listed_movies[0].year_text(), "1997");
        assert_eq!(result.listed_movies[0].rating_text(), "7.8");
        assert_eq!(result.messages[0].content, "3 movies in total");
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_movies.is_empty());
        assert_eq!(result.messages[0].content, "0 movies in total");
    }
}
