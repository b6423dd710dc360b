//! Error types for rosetil

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building filters or searching directories
#[derive(Error, Debug)]
pub enum RosetilError {
    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Invalid regular expression
    #[error("invalid regex pattern '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },

    /// The process working directory could not be determined
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The directory a downward search starts from could not be listed
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to stat a path that was found
    #[error("failed to read metadata for '{path}': {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}
