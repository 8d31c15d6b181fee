use crate::error::{MovieDbError, Result};
use crate::metadata::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Configuration for moviedb, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// OMDb API key; `OMDB_API_KEY` takes precedence
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Catalog file used when none is given on the command line
    #[serde(default = "default_file")]
    pub default_file: PathBuf,

    /// Heading of the generated website
    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// Custom website template (minijinja); the built-in one is used if unset
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_file() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_site_title() -> String {
    "My Movie Collection".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("_static/index.html")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            default_file: default_file(),
            site_title: default_site_title(),
            template_path: None,
            output_path: default_output_path(),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MovieDbError::Io)?;
        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| MovieDbError::Api(format!("Invalid {}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MovieDbError::Io)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(MovieDbError::Io)?;
        Ok(())
    }

    /// Apply environment overrides (currently only the API key).
    pub fn with_env(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api_key = key.trim().to_string();
            }
        }
        self
    }
}
