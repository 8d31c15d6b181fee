use crate::commands::{CmdMessage, CmdResult, MovieRow};
use crate::error::Result;
use crate::store::CatalogStore;
use serde::Serialize;

use super::helpers::listed_movies;

/// Rating statistics over the movies that have a numeric rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub rated: usize,
    pub average: f64,
    pub median: f64,
    pub best: Vec<MovieRow>,
    pub worst: Vec<MovieRow>,
}

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let movies = listed_movies(store)?;
    let mut result = CmdResult::default();

    match compute(&movies) {
        Some(stats) => {
            let skipped = movies.len() - stats.rated;
            if skipped > 0 {
                result.add_message(CmdMessage::info(format!(
                    "{} movie(s) without a numeric rating were skipped",
                    skipped
                )));
            }
            Ok(result.with_stats(stats))
        }
        None => {
            result.add_message(CmdMessage::warning("No rated movies in the database"));
            Ok(result)
        }
    }
}

/// `None` when no movie has a usable rating.
pub fn compute(movies: &[MovieRow]) -> Option<Stats> {
    let rated: Vec<(&MovieRow, f64)> = movies
        .iter()
        .filter_map(|m| m.record.rating_value().map(|r| (m, r)))
        .collect();
    if rated.is_empty() {
        return None;
    }

    let mut ratings: Vec<f64> = rated.iter().map(|(_, r)| *r).collect();
    ratings.sort_by(|a, b| a.total_cmp(b));

    let n = ratings.len();
    let average = ratings.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (ratings[n / 2 - 1] + ratings[n / 2]) / 2.0
    } else {
        ratings[n / 2]
    };
    let min = ratings[0];
    let max = ratings[n - 1];

    let with_rating = |target: f64| -> Vec<MovieRow> {
        rated
            .iter()
            .filter(|(_, r)| *r == target)
            .map(|(m, _)| (*m).clone())
            .collect()
    };

    Some(Stats {
        rated: n,
        average,
        median,
        best: with_rating(max),
        worst: with_rating(min),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn titles(rows: &[MovieRow]) -> Vec<&str> {
        rows.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn computes_average_median_and_extremes() {
        let store = StoreFixture::classics().build();
        let stats = run(&store).unwrap().stats.unwrap();

        assert_eq!(stats.rated, 3);
        assert!((stats.average - 8.2).abs() < 1e-9);
        assert!((stats.median - 8.3).abs() < 1e-9);
        assert_eq!(titles(&stats.best), vec!["Alien"]);
        assert_eq!(titles(&stats.worst), vec!["Titanic"]);
    }

    #[test]
    fn even_count_median_is_mean_of_middle_pair() {
        let store = StoreFixture::new()
            .with_movie("A", 2000, 6.0)
            .with_movie("B", 2001, 7.0)
            .with_movie("C", 2002, 8.0)
            .with_movie("D", 2003, 9.0)
            .build();
        let stats = run(&store).unwrap().stats.unwrap();
        assert!((stats.median - 7.5).abs() < 1e-9);
    }

    #[test]
    fn ties_are_all_reported() {
        let store = StoreFixture::new()
            .with_movie("A", 2000, 9.0)
            .with_movie("B", 2001, 5.0)
            .with_movie("C", 2002, 9.0)
            .build();
        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(titles(&stats.best), vec!["A", "C"]);
        assert_eq!(titles(&stats.worst), vec!["B"]);
    }

    #[test]
    fn empty_catalog_warns_instead_of_dividing_by_zero() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.stats.is_none());
        assert_eq!(result.messages[0].content, "No rated movies in the database");
    }

    #[test]
    fn text_ratings_count_like_numbers() {
        use crate::model::{Catalog, Record};
        let mut catalog = Catalog::new();
        catalog.insert("A".into(), [("rating", "7.0")].into_iter().collect::<Record>());
        catalog.insert("B".into(), [("rating", "n/a")].into_iter().collect::<Record>());
        let store = InMemoryStore::with_catalog(catalog);

        let result = run(&store).unwrap();
        assert_eq!(result.stats.unwrap().rated, 1);
        assert!(result.messages[0].content.contains("1 movie(s)"));
    }

    #[test]
    fn non_finite_text_ratings_are_skipped() {
        use crate::model::{Catalog, Record};
        let mut catalog = Catalog::new();
        catalog.insert("A".into(), [("rating", "7.0")].into_iter().collect::<Record>());
        catalog.insert("B".into(), [("rating", "NaN")].into_iter().collect::<Record>());
        catalog.insert("C".into(), [("rating", "inf")].into_iter().collect::<Record>());
        let store = InMemoryStore::with_catalog(catalog);

        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(stats.rated, 1);
        assert!(stats.average.is_finite());
        assert_eq!(titles(&stats.best), vec!["A"]);
        assert_eq!(titles(&stats.worst), vec!["A"]);
    }
}
