pub mod curve;
pub mod dimensions;
pub mod profile;
pub mod surface;

pub use curve::Curve;
pub use dimensions::Dimensions;
pub use profile::{ArcFamily, CircularArc, EndpointPolicy, ParametricArc, Profile, SemiEllipse};
pub use surface::Surface;
