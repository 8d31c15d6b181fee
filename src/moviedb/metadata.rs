//! Movie metadata lookup.
//!
//! New catalog entries are filled in from the [OMDb API](https://www.omdbapi.com/).
//! The lookup is behind the [`MovieLookup`] trait so commands can be tested
//! without the network.

use crate::error::{MovieDbError, Result};
use crate::model::NewMovie;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "http://www.omdbapi.com/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of `(title, year, rating, poster, imdb id)` tuples for `add`.
pub trait MovieLookup {
    fn lookup(&self, title: &str) -> Result<NewMovie>;
}

pub struct OmdbClient {
    client: Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbResponse {
    response: String,
    title: Option<String>,
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    poster: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    error: Option<String>,
}

impl OmdbClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MovieDbError::Lookup(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }
}

impl MovieLookup for OmdbClient {
    fn lookup(&self, title: &str) -> Result<NewMovie> {
        if self.api_key.is_empty() {
            return Err(MovieDbError::Lookup(
                "No OMDb API key configured (set OMDB_API_KEY or api_key in config.json)"
                    .to_string(),
            ));
        }

        debug!(title, url = %self.api_url, "querying OMDb");
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .map_err(|e| {
                debug!(error = %e, "OMDb request failed");
                MovieDbError::Lookup("Failed to connect to Movie API".to_string())
            })?;

        let body: OmdbResponse = response.json().map_err(|e| {
            MovieDbError::Lookup(format!("Unexpected response from Movie API: {}", e))
        })?;

        movie_from_response(body)
    }
}

fn movie_from_response(body: OmdbResponse) -> Result<NewMovie> {
    if body.response != "True" {
        let message = body
            .error
            .unwrap_or_else(|| "Movie not found!".to_string());
        return Err(MovieDbError::Lookup(message));
    }

    let unexpected = || MovieDbError::Lookup("Unexpected value in API, could not add movie".into());

    let rating: f64 = body
        .imdb_rating
        .as_deref()
        .and_then(|r| r.trim().parse().ok())
        .ok_or_else(unexpected)?;
    let title = body.title.ok_or_else(unexpected)?;
    let imdb_id = body.imdb_id.ok_or_else(unexpected)?;

    Ok(NewMovie::new(
        title,
        body.year.unwrap_or_default(),
        rating,
        body.poster.unwrap_or_else(|| crate::model::NOT_AVAILABLE.to_string()),
        imdb_id,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: &str) -> Result<NewMovie> {
        movie_from_response(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn found_movie_becomes_new_movie() {
        let movie = parse(
            r#"{"Title":"Up","Year":"2009","imdbRating":"8.3","Poster":"N/A",
                "imdbID":"tt1049413","Response":"True"}"#,
        )
        .unwrap();
        assert_eq!(movie.title, "Up");
        assert_eq!(movie.year, json!("2009"));
        assert_eq!(movie.rating, json!(8.3));
        assert_eq!(movie.poster_url, "N/A");
        assert_eq!(movie.imdb_id, "tt1049413");
    }

    #[test]
    fn api_error_is_reported() {
        let err = parse(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Movie not found!");
    }

    #[test]
    fn unrated_movie_is_rejected() {
        let err = parse(
            r#"{"Title":"Obscure","Year":"2024","imdbRating":"N/A","Poster":"N/A",
                "imdbID":"tt9999999","Response":"True"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MovieDbError::Lookup(_)));
    }

    #[test]
    fn missing_key_fails_before_request() {
        let client = OmdbClient::new(DEFAULT_API_URL, "").unwrap();
        assert!(matches!(
            client.lookup("Up"),
            Err(MovieDbError::Lookup(_))
        ));
    }
}
