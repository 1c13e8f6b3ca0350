use std::process::ExitStatus;
use thiserror::Error;

/// Failures at the worker process boundary.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to run worker '{path}': {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker exited with {status}: {stderr}")]
    Server { status: ExitStatus, stderr: String },

    #[error("Could not encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Could not decode worker response: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum FitrecError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Invalid input: {0}")]
    UserInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FitrecError>;
