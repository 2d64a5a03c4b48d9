//! Error types for rod model operations.

use rv_core::RvError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RodError {
    #[error("Invalid rod parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("Node index out of range (index={index}, num_nodes={num_nodes})")]
    NodeOutOfRange { index: usize, num_nodes: usize },

    #[error("Node count mismatch: expected {expected}, found {found}")]
    NodeCount { expected: usize, found: usize },

    #[error("Frame {frame} is malformed: {what}")]
    Frame { frame: usize, what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] RvError),
}

pub type RodResult<T> = Result<T, RodError>;
