use crate::commands::{CmdMessage, CmdResult, MovieRow};
use crate::error::{MovieDbError, Result};
use crate::store::{write_atomic, CatalogStore};
use chrono::Local;
use minijinja::{context, Environment};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::helpers::listed_movies;

const DEFAULT_TEMPLATE: &str = include_str!("../templates/index.html");
const TEMPLATE_NAME: &str = "index.html";
const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

#[derive(Debug, Clone)]
pub struct WebsiteOptions {
    pub site_title: String,
    /// Custom minijinja template; `None` uses the built-in gallery.
    pub template_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

/// What a template sees for each movie.
#[derive(Debug, Serialize)]
struct GalleryItem {
    title: String,
    year: String,
    rating: String,
    poster_url: Option<String>,
    imdb_url: Option<String>,
    notes: Option<String>,
}

impl From<&MovieRow> for GalleryItem {
    fn from(movie: &MovieRow) -> Self {
        let record = &movie.record;
        Self {
            title: movie.title.clone(),
            year: movie.year_text(),
            rating: movie.rating_text(),
            poster_url: record.poster_url().map(str::to_string),
            imdb_url: record
                .imdb_id()
                .map(|id| format!("{}{}", IMDB_TITLE_URL, id)),
            notes: record
                .notes()
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        }
    }
}

pub fn run<S: CatalogStore>(store: &S, options: &WebsiteOptions) -> Result<CmdResult> {
    let movies = listed_movies(store)?;
    let html = render(&options.site_title, &movies, options.template_path.as_deref())?;
    write_atomic(&options.output_path, html.as_bytes())?;
    debug!(path = %options.output_path.display(), movies = movies.len(), "website written");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Website was generated successfully."));
    Ok(result.with_output_path(options.output_path.clone()))
}

/// Render the gallery page to a string.
pub fn render(
    site_title: &str,
    movies: &[MovieRow],
    template_path: Option<&Path>,
) -> Result<String> {
    let source = match template_path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            MovieDbError::Api(format!("Cannot read template {}: {}", path.display(), e))
        })?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, &source)?;
    let template = env.get_template(TEMPLATE_NAME)?;

    let items: Vec<GalleryItem> = movies.iter().map(GalleryItem::from).collect();
    let html = template.render(context! {
        site_title => site_title,
        movies => items,
        generated_at => Local::now().format("%Y-%m-%d %H:%M").to_string(),
    })?;
    Ok(html)
}
