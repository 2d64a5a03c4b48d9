//! Client side of the remote 3D viewer protocol.
//!
//! Provides:
//! - the `ViewerClient` trait (the remote call surface)
//! - a blocking TCP transport speaking newline-delimited JSON
//! - an in-memory recording client for dry runs and tests
//! - viewer connection configuration

pub mod client;
pub mod color;
pub mod config;
pub mod error;
pub mod protocol;
pub mod recording;
pub mod tcp;

pub use client::{SharedViewer, ViewerClient, share};
pub use color::Color;
pub use config::ViewerConfig;
pub use error::{ViewerError, ViewerResult};
pub use protocol::ViewerCall;
pub use recording::RecordingViewer;
pub use tcp::TcpViewerClient;
