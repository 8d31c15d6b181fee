use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieDbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog file: {0}")]
    Format(String),

    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Cannot store \"{title}\" as a row: field \"{field}\" {reason}")]
    SchemaConflict {
        title: String,
        field: String,
        reason: String,
    },

    #[error("{0}")]
    Lookup(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<serde_json::Error> for MovieDbError {
    fn from(err: serde_json::Error) -> Self {
        MovieDbError::Format(err.to_string())
    }
}

impl From<csv::Error> for MovieDbError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return MovieDbError::Format(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => MovieDbError::Io(io),
            other => MovieDbError::Format(format!("{:?}", other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, MovieDbError>;
