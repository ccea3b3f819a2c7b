//! Loader error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Fixture {path}, pk {pk}: unsupported model '{model}'")]
    UnknownModel {
        path: PathBuf,
        pk: i32,
        model: String,
    },

    #[error("Fixture {path}, pk {pk}: {source}")]
    Invalid {
        path: PathBuf,
        pk: i32,
        source: validator::ValidationErrors,
    },
}

pub type Result<T> = std::result::Result<T, FixtureError>;
