//! # Dispatch
//!
//! `run()` parses arguments, sets up logging, builds the context and hands the
//! subcommand to its `handle_*` function. Handlers call one `MovieApi` method
//! and print the result; they never touch the store directly.

use super::menu;
use super::render::{
    print_messages, render_movie_list, render_output_path, render_rated_list, render_stats,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use moviedb::api::{CmdResult, MovieApi};
use moviedb::error::{MovieDbError, Result};
use moviedb::init::initialize;
use moviedb::model::{NewMovie, NOT_AVAILABLE};
use moviedb::store::CatalogStore;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MOVIEDB_LOG";

type AppApi = MovieApi<Box<dyn CatalogStore>>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.file.as_deref())?;
    debug!(catalog = %ctx.api.catalog_path().display(), "context ready");

    match cli.command {
        None | Some(Commands::Menu) => menu::run(&mut ctx.api),
        Some(Commands::List) => handle_list(&ctx.api),
        Some(Commands::Add {
            title,
            year,
            rating,
            imdb_id,
            poster,
        }) => {
            let title = title.join(" ");
            let manual = ManualFields {
                year,
                rating,
                imdb_id,
                poster,
            };
            handle_add(&mut ctx.api, title, manual)
        }
        Some(Commands::Delete { title }) => handle_delete(&mut ctx.api, title.join(" ")),
        Some(Commands::Update { title, notes }) => handle_update(&mut ctx.api, title, notes),
        Some(Commands::Stats) => handle_stats(&ctx.api),
        Some(Commands::Random) => handle_random(&ctx.api),
        Some(Commands::Search { term }) => handle_search(&ctx.api, term.join(" ")),
        Some(Commands::Sort) => handle_sort(&ctx.api),
        Some(Commands::Website { output }) => handle_website(&mut ctx.api, output),
        Some(Commands::Init) => handle_init(&mut ctx.api),
    }
}

/// Logs go to stderr. `-v` forces debug; otherwise `MOVIEDB_LOG` or `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Fields given on the command line instead of an OMDb lookup.
#[derive(Debug, Default)]
pub(super) struct ManualFields {
    pub year: Option<String>,
    pub rating: Option<f64>,
    pub imdb_id: Option<String>,
    pub poster: Option<String>,
}

impl ManualFields {
    fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.rating.is_none()
            && self.imdb_id.is_none()
            && self.poster.is_none()
    }

    /// Numeric years are stored as numbers, anything else as given.
    fn into_movie(self, title: String) -> NewMovie {
        let year = match self.year {
            Some(y) => match y.trim().parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(y),
            },
            None => Value::Null,
        };
        let rating = self.rating.map(Value::from).unwrap_or(Value::Null);
        NewMovie::new(
            title,
            year,
            rating,
            self.poster.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            self.imdb_id.unwrap_or_default(),
        )
    }
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
}

fn handle_list(api: &AppApi) -> Result<()> {
    let result = api.list_movies()?;
    print_result(&result);
    print!("{}", render_movie_list(&result.listed_movies));
    Ok(())
}

fn handle_add(api: &mut AppApi, title: String, manual: ManualFields) -> Result<()> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(MovieDbError::Api("Movie title cannot be empty".into()));
    }
    let result = if manual.is_empty() {
        api.add_movie(&title)?
    } else {
        api.add_movie_manual(manual.into_movie(title))?
    };
    print_result(&result);
    Ok(())
}

fn handle_delete(api: &mut AppApi, title: String) -> Result<()> {
    let result = api.delete_movie(&title)?;
    print_result(&result);
    Ok(())
}

fn handle_update(api: &mut AppApi, title: String, notes: String) -> Result<()> {
    let result = api.update_movie(&title, &notes)?;
    print_result(&result);
    Ok(())
}

fn handle_stats(api: &AppApi) -> Result<()> {
    let result = api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    print_result(&result);
    Ok(())
}

fn handle_random(api: &AppApi) -> Result<()> {
    let result = api.random_movie()?;
    print!("{}", render_rated_list(&result.listed_movies));
    print_result(&result);
    Ok(())
}

fn handle_search(api: &AppApi, term: String) -> Result<()> {
    let result = api.search_movies(&term)?;
    print!("{}", render_rated_list(&result.listed_movies));
    print_result(&result);
    Ok(())
}

fn handle_sort(api: &AppApi) -> Result<()> {
    let result = api.sorted_movies()?;
    print!("{}", render_rated_list(&result.listed_movies));
    print_result(&result);
    Ok(())
}

fn handle_website(api: &mut AppApi, output: Option<PathBuf>) -> Result<()> {
    if let Some(path) = output {
        api.set_output_path(path);
    }
    let result = api.generate_website()?;
    print_result(&result);
    if let Some(path) = &result.output_path {
        print!("{}", render_output_path(path));
    }
    Ok(())
}

fn handle_init(api: &mut AppApi) -> Result<()> {
    let result = api.init()?;
    print_result(&result);
    Ok(())
}
