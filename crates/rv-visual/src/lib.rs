//! Rod visualization: mirror solver states onto a remote 3D viewer.
//!
//! A [`RodVisual`] registers a rod once with a viewer session and then pushes
//! the pose of its base and of every node capsule on each [`RodVisual::plot`].

pub mod adapter;
pub mod error;

pub use adapter::{Converter, RodVisual, cap_name};
pub use error::{VisualError, VisualResult};
