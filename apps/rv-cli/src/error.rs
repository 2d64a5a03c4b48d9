//! Error type for the command-line front end.

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Rod error: {0}")]
    Rod(#[from] rv_rod::RodError),

    #[error("Viewer error: {0}")]
    Viewer(#[from] rv_viewer::ViewerError),

    #[error("{0}")]
    Visual(#[from] rv_visual::VisualError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
