//! Errors surfaced by rod visuals. Both variants pass the source through unchanged.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualError {
    #[error(transparent)]
    Viewer(#[from] rv_viewer::ViewerError),

    #[error(transparent)]
    Rod(#[from] rv_rod::RodError),
}

pub type VisualResult<T> = Result<T, VisualError>;
