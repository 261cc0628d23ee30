use std::io;

use thiserror::Error;

/// Library-wide error type for gebug operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A prompt could not gather its input.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Serialization error.
    #[error("Failed to serialize {what}: {details}")]
    Serialization { what: String, details: String },

    /// A failure annotated with the stage it happened in.
    #[error("{stage}: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Wrap `err` with a short label naming the failing stage.
    pub fn at_stage<E: Into<AppError>>(stage: &'static str, err: E) -> Self {
        AppError::Stage { stage, source: Box::new(err.into()) }
    }
}
