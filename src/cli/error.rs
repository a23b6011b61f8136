//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

use crate::guesser::GuesserError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to load config {0}: {1}")]
    ConfigError(PathBuf, String),

    #[error("Failed to format output: {0}")]
    OutputError(String),

    #[error(transparent)]
    Guesser(#[from] GuesserError),
}
