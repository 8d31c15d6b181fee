use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names shared by both file formats.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const RATING: &str = "rating";
    pub const YEAR: &str = "year";
    pub const IMDB_ID: &str = "imdbID";
    pub const POSTER_URL: &str = "poster_url";
    pub const NOTES: &str = "notes";
}

/// Sentinel the metadata source uses for a missing poster.
pub const NOT_AVAILABLE: &str = "N/A";

/// The whole collection: title -> record, in insertion order.
///
/// Equality ignores ordering, so two catalogs with the same entries compare
/// equal regardless of how they were built.
pub type Catalog = IndexMap<String, Record>;

/// Attributes of one movie.
///
/// A record is a loose, ordered field map rather than a fixed struct: the JSON
/// format accepts any object, and the CSV format derives its columns from the
/// fields that are actually present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the record stored by `add`. The poster is dropped when the
    /// source reported it as `N/A`.
    pub fn from_movie(movie: &NewMovie) -> Self {
        let mut record = Record::new();
        record.set(fields::RATING, movie.rating.clone());
        record.set(fields::YEAR, movie.year.clone());
        record.set(fields::IMDB_ID, movie.imdb_id.clone());
        if movie.poster_url != NOT_AVAILABLE {
            record.set(fields::POSTER_URL, movie.poster_url.clone());
        }
        record
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn rating(&self) -> Option<&Value> {
        self.get(fields::RATING)
    }

    pub fn year(&self) -> Option<&Value> {
        self.get(fields::YEAR)
    }

    pub fn imdb_id(&self) -> Option<&str> {
        self.get(fields::IMDB_ID).and_then(Value::as_str)
    }

    pub fn poster_url(&self) -> Option<&str> {
        self.get(fields::POSTER_URL).and_then(Value::as_str)
    }

    pub fn notes(&self) -> Option<&str> {
        self.get(fields::NOTES).and_then(Value::as_str)
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.set(fields::NOTES, notes.into());
    }

    /// Rating as a number, whether it was stored as a number (JSON) or as
    /// text (CSV). `None` when missing, not numeric, or not finite.
    pub fn rating_value(&self) -> Option<f64> {
        let value = match self.rating()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|r| r.is_finite())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}

/// Values handed to `add`, usually straight from the metadata lookup.
/// Nothing here is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: Value,
    pub rating: Value,
    pub poster_url: String,
    pub imdb_id: String,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<Value>,
        rating: impl Into<Value>,
        poster_url: impl Into<String>,
        imdb_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            rating: rating.into(),
            poster_url: poster_url.into(),
            imdb_id: imdb_id.into(),
        }
    }
}

/// Text form of a scalar value, as it would appear in a table cell.
/// Objects and arrays have no cell form.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text form of any value for display.
pub fn display_text(value: &Value) -> String {
    scalar_text(value).unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_movie_drops_unavailable_poster() {
        let movie = NewMovie::new("Up", 2009, 8.3, NOT_AVAILABLE, "tt1049413");
        let record = Record::from_movie(&movie);
        assert!(!record.contains(fields::POSTER_URL));
        assert_eq!(record.imdb_id(), Some("tt1049413"));
        assert_eq!(
            record.field_names().collect::<Vec<_>>(),
            vec!["rating", "year", "imdbID"]
        );
    }

    #[test]
    fn from_movie_keeps_real_poster() {
        let movie = NewMovie::new("Up", 2009, 8.3, "http://img/up.jpg", "tt1049413");
        let record = Record::from_movie(&movie);
        assert_eq!(record.poster_url(), Some("http://img/up.jpg"));
    }

    #[test]
    fn rating_value_parses_numbers_and_text() {
        let numeric: Record = [("rating", json!(7.8))].into_iter().collect();
        let text: Record = [("rating", "8.5")].into_iter().collect();
        let junk: Record = [("rating", "great")].into_iter().collect();
        assert_eq!(numeric.rating_value(), Some(7.8));
        assert_eq!(text.rating_value(), Some(8.5));
        assert_eq!(junk.rating_value(), None);
        assert_eq!(Record::new().rating_value(), None);
    }

    #[test]
    fn rating_value_rejects_non_finite_text() {
        for text in ["NaN", "inf", "-infinity"] {
            let record: Record = [("rating", text)].into_iter().collect();
            assert_eq!(record.rating_value(), None, "{}", text);
        }
    }

    #[test]
    fn equality_ignores_field_order() {
        let a: Record = [("rating", "1"), ("year", "2000")].into_iter().collect();
        let b: Record = [("year", "2000"), ("rating", "1")].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn scalar_text_rejects_nested_values() {
        assert_eq!(scalar_text(&json!(1997)), Some("1997".to_string()));
        assert_eq!(scalar_text(&json!(null)), Some(String::new()));
        assert_eq!(scalar_text(&json!(["a"])), None);
        assert_eq!(display_text(&json!({"a": 1})), "{\"a\":1}");
    }
}
