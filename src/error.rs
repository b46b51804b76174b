//! Error types for schemadoc

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building schema catalogs
#[derive(Error, Debug)]
pub enum SchemaDocError {
    #[error("Failed to read SQL file: {path}")]
    SqlFileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQL parse error in {path} at line {line}, column {column}: {message}")]
    SqlParseError {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Invalid exclude pattern \"{pattern}\": {message}")]
    InvalidPattern { pattern: String, message: String },
}
