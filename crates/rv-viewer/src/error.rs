//! Error types for viewer communication.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to connect to viewer at {address}: {source}")]
    Connection {
        address: String,
        source: std::io::Error,
    },

    #[error("Viewer rejected {method}: {message}")]
    Protocol {
        method: &'static str,
        message: String,
    },

    #[error("Viewer closed the connection")]
    Disconnected,

    #[error("Invalid color '{input}': expected r,g,b[,a]")]
    InvalidColor { input: String },

    #[error("Invalid viewer configuration: {what}")]
    Config { what: String },

    #[error("Injected failure on call {call_index} ({method})")]
    Injected {
        call_index: usize,
        method: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ViewerResult<T> = Result<T, ViewerError>;
