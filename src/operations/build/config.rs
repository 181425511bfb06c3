use serde::{Deserialize, Serialize};

use crate::error::{PayloadError, Result};
use crate::geometry::{ArcFamily, EndpointPolicy};
use crate::operations::InterpolationParams;

/// Which wall surfaces are computed, measured and exposed.
///
/// A disabled wall costs nothing: it is neither interpolated nor counted in
/// the total surface area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallSelection {
    /// Wall spanned between the two frame arcs, running front to back.
    pub front_back: bool,
    /// Wall spanned between the primary arc and the reversed mirrored arc.
    pub sides: bool,
}

impl Default for WallSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl WallSelection {
    /// Both walls enabled.
    #[must_use]
    pub fn all() -> Self {
        Self {
            front_back: true,
            sides: true,
        }
    }

    /// No walls; only the frame arcs are built.
    #[must_use]
    pub fn none() -> Self {
        Self {
            front_back: false,
            sides: false,
        }
    }
}

/// Settings for [`super::BuildTent`].
///
/// Every field has a default, so a partial JSON object is accepted by
/// [`TentConfig::from_json`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TentConfig {
    /// Points per frame arc, also used as the column count of each wall.
    pub resolution: usize,
    /// Arch profile strategy.
    pub arc_family: ArcFamily,
    /// Out-of-domain handling for the semi-ellipse profile.
    pub endpoint_policy: EndpointPolicy,
    /// Walls to compute.
    pub walls: WallSelection,
    /// Per-coordinate tolerance for detecting where two arcs meet.
    pub coincidence_tolerance: f64,
}

impl Default for TentConfig {
    fn default() -> Self {
        Self {
            resolution: 100,
            arc_family: ArcFamily::default(),
            endpoint_policy: EndpointPolicy::default(),
            walls: WallSelection::default(),
            coincidence_tolerance: 1e-9,
        }
    }
}

impl TentConfig {
    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(PayloadError::from)?)
    }

    /// Sets the resolution.
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the arc family.
    #[must_use]
    pub fn with_arc_family(mut self, arc_family: ArcFamily) -> Self {
        self.arc_family = arc_family;
        self
    }

    /// Sets the endpoint policy.
    #[must_use]
    pub fn with_endpoint_policy(mut self, endpoint_policy: EndpointPolicy) -> Self {
        self.endpoint_policy = endpoint_policy;
        self
    }

    /// Sets the wall selection.
    #[must_use]
    pub fn with_walls(mut self, walls: WallSelection) -> Self {
        self.walls = walls;
        self
    }

    /// Sets the coincidence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.coincidence_tolerance = tolerance;
        self
    }

    /// Interpolation parameters derived from this configuration.
    #[must_use]
    pub fn interpolation_params(&self) -> InterpolationParams {
        InterpolationParams::default()
            .with_columns(self.resolution)
            .with_tolerance(self.coincidence_tolerance)
    }
}
