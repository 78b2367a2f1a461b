//! Error types for schema resolution and mock synthesis

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while obtaining a schema or synthesizing mock data
#[derive(Debug, Error)]
pub enum SynthError {
    /// The extraction collaborator has no declaration with this name
    #[error("Schema \"{name}\" not found in \"{source_path}\"")]
    SchemaNotFound { name: String, source_path: String },

    /// The schema exists but declares no fields
    #[error("Schema is empty: no fields could be resolved")]
    EmptySchema,

    /// The TypeScript source could not be parsed
    #[error("TypeScript parse error: {0}")]
    Parse(String),

    /// Batch size must be at least one
    #[error("Count must be a positive number, got {0}")]
    InvalidCount(i64),

    /// Output destination rejected before writing
    #[error("Invalid output path \"{path}\": {reason}")]
    InvalidOutputPath { path: PathBuf, reason: String },

    /// Reading a schema source or writing output failed
    #[error("I/O error on \"{path}\": {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON rendering error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SynthError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
