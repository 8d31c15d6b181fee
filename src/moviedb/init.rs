use crate::api::{MovieApi, WebsiteOptions};
use crate::config::AppConfig;
use crate::error::{MovieDbError, Result};
use crate::metadata::OmdbClient;
use crate::store::{open_store, CatalogStore};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the platform config directory.
pub const HOME_ENV: &str = "MOVIEDB_HOME";

pub struct MovieDbContext {
    pub api: MovieApi<Box<dyn CatalogStore>>,
    pub config_dir: PathBuf,
}

/// `$MOVIEDB_HOME` when set, else the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "moviedb", "moviedb")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MovieDbError::Api("Could not determine config dir".into()))
}

pub fn initialize(file: Option<&Path>) -> Result<MovieDbContext> {
    initialize_in(config_dir()?, file)
}

/// Build the context from the config in `config_dir`. `file` wins over the
/// configured `default_file`.
pub fn initialize_in(config_dir: PathBuf, file: Option<&Path>) -> Result<MovieDbContext> {
    let config = AppConfig::load(&config_dir)?.with_env();

    let catalog_path = file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.default_file.clone());
    debug!(
        config_dir = %config_dir.display(),
        catalog = %catalog_path.display(),
        "initializing"
    );

    let store = open_store(catalog_path)?;
    let lookup = OmdbClient::new(config.api_url, config.api_key)?;
    let website = WebsiteOptions {
        site_title: config.site_title,
        template_path: config.template_path,
        output_path: config.output_path,
    };
    let api = MovieApi::new(store, Box::new(lookup), website);

    Ok(MovieDbContext { api, config_dir })
}
