//! Error types for the fallible edges of the crate (files, JSON, field names).
//!
//! Editing and rendering never fail; only the surfaces that touch the outside
//! world return these.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while exporting, loading configuration or parsing input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    /// Reading or writing a file failed
    #[error("I/O error at {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// JSON could not be encoded or decoded
    #[error("JSON error: {message}")]
    Json { message: String },

    /// A field name did not match any field of the entity
    #[error("Unknown {entity} field: {name}")]
    UnknownField { entity: &'static str, name: String },

    /// The course catalogue has no courses to draw samples from
    #[error("Course catalogue contains no courses")]
    EmptyCatalog,
}

impl TranscriptError {
    /// Wraps an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        TranscriptError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TranscriptError {
    fn from(err: serde_json::Error) -> Self {
        TranscriptError::Json {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TranscriptError>;
