pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod payload;

pub use error::{Result, TentformError};
pub use geometry::{Curve, Dimensions, Surface};
pub use operations::{build_tent_geometry, BuildTent, TentConfig, TentGeometry};
pub use payload::{PayloadOptions, TentPayload};
