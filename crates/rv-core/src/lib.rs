//! rv-core: stable foundation for rodview.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - transform (translation/quaternion pair sent to viewers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod transform;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RvError, RvResult};
pub use numeric::*;
pub use transform::Tq;
pub use units::*;
