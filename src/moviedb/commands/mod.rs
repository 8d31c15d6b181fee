use crate::model::{display_text, Record};
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod random;
pub mod search;
pub mod sort;
pub mod stats;
pub mod update;
pub mod website;

pub use stats::Stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One catalog entry as handed to a UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRow {
    pub title: String,
    pub record: Record,
}

impl MovieRow {
    pub fn new(title: impl Into<String>, record: Record) -> Self {
        Self {
            title: title.into(),
            record,
        }
    }

    pub fn year_text(&self) -> String {
        self.record.year().map(display_text).unwrap_or_default()
    }

    pub fn rating_text(&self) -> String {
        self.record.rating().map(display_text).unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_movies: Vec<MovieRow>,
    pub stats: Option<Stats>,
    pub output_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_movies(mut self, movies: Vec<MovieRow>) -> Self {
        self.listed_movies = movies;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
}
