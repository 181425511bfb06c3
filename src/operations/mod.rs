pub mod build;
pub mod diagonals;
pub mod interpolate;
pub mod query;

pub use build::{
    build_tent_geometry, ArcRole, BuildTent, FrameArc, TentConfig, TentGeometry, Wall,
    WallSelection, WallSurface,
};
pub use diagonals::{calculate_diagonals, DiagonalPair};
pub use interpolate::{find_intersection, InterpolateSurface, InterpolationParams};
pub use query::{arc_length, surface_area};
