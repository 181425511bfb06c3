use serde::Serialize;

use crate::geometry::{Curve, Dimensions, Surface};
use crate::operations::{DiagonalPair, InterpolationParams};

/// Role of an arc in the tent frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcRole {
    /// Arc over diagonal 1, front-left to back-right.
    Primary,
    /// Mirror of the primary arc over diagonal 2, front-right to back-left.
    Mirrored,
    /// Point-reversed mirrored arc; boundary of the side wall, drawn invisible.
    Helper,
}

/// One arc of the frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameArc {
    pub role: ArcRole,
    pub curve: Curve,
}

/// A wall of the tent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Wall {
    /// Ruled between the primary and mirrored arcs.
    FrontBack,
    /// Ruled between the primary arc and the helper arc.
    Sides,
}

/// A computed wall surface with its area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallSurface {
    pub wall: Wall,
    pub surface: Surface,
    pub area: f64,
}

/// Output of [`super::BuildTent`]: frame arcs, enabled walls and totals.
///
/// Plain data; the rendering and submission layers read it, nothing
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TentGeometry {
    /// Frame arcs: primary and mirrored, plus the helper when side walls are on.
    pub arcs: Vec<FrameArc>,
    /// Enabled walls only.
    pub surfaces: Vec<WallSurface>,
    /// Length of the primary plus the mirrored arc.
    pub total_arc_length: f64,
    /// Sum of the enabled walls' areas.
    pub total_surface_area: f64,
    #[serde(skip)]
    pub dimensions: Dimensions,
    #[serde(skip)]
    pub diagonals: DiagonalPair,
    #[serde(skip)]
    pub params: InterpolationParams,
}

impl TentGeometry {
    /// Returns the arc with the given role, if it was built.
    #[must_use]
    pub fn arc(&self, role: ArcRole) -> Option<&Curve> {
        self.arcs.iter().find(|a| a.role == role).map(|a| &a.curve)
    }

    /// Returns the given wall, if it was enabled.
    #[must_use]
    pub fn wall(&self, wall: Wall) -> Option<&WallSurface> {
        self.surfaces.iter().find(|s| s.wall == wall)
    }

    /// Closed loop through the four arc feet: front-left, front-right,
    /// back-right, back-left and back to front-left.
    #[must_use]
    pub fn base_outline(&self) -> Curve {
        let feet = [
            self.arc(ArcRole::Primary).and_then(Curve::first),
            self.arc(ArcRole::Mirrored).and_then(Curve::first),
            self.arc(ArcRole::Primary).and_then(Curve::last),
            self.arc(ArcRole::Mirrored).and_then(Curve::last),
        ];
        let mut loop_points: Vec<_> = feet.into_iter().flatten().collect();
        if let Some(&start) = loop_points.first() {
            loop_points.push(start);
        }
        Curve::from_points(&loop_points)
    }

    /// Display label for the total surface area, e.g. `Surface area: 6.42 m²`.
    #[must_use]
    pub fn area_label(&self, unit: &str) -> String {
        format!("Surface area: {:.2} {unit}²", self.total_surface_area)
    }

    /// Display label for the total arc length, e.g. `Arcs length: 5.31 m`.
    #[must_use]
    pub fn length_label(&self, unit: &str) -> String {
        format!("Arcs length: {:.2} {unit}", self.total_arc_length)
    }
}
