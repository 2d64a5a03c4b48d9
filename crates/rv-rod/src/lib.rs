//! Rod model types consumed from an elastic rod solver.
//!
//! The solver itself lives elsewhere; this crate only describes what it hands
//! out: rod parameters, node displacements and the per-step workspace state,
//! plus the conversion of a displacement into the pose viewers understand.

pub mod displacement;
pub mod error;
pub mod io;
pub mod parameters;
pub mod rod;
pub mod shapes;
pub mod state;

pub use displacement::{Displacement, displacement_to_tq};
pub use error::{RodError, RodResult};
pub use io::{FrameDef, ParametersDef, RodRecording};
pub use parameters::{RodModel, RodParameters};
pub use rod::{Rod, RodSpec};
pub use state::{RodState, WorkspaceState};
