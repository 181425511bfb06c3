use serde::{Deserialize, Serialize};

use crate::error::{OperationError, PayloadError, Result};
use crate::geometry::{Curve, Surface};
use crate::operations::build::wall_surface;
use crate::operations::{ArcRole, TentGeometry, Wall};

/// A wall grid as sent to the model-generation service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfacePayload {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
}

impl From<Surface> for SurfacePayload {
    fn from(surface: Surface) -> Self {
        let (x, y, z) = surface.into_grids();
        Self { x, y, z }
    }
}

impl From<&Surface> for SurfacePayload {
    fn from(surface: &Surface) -> Self {
        Self {
            x: surface.x().to_vec(),
            y: surface.y().to_vec(),
            z: surface.z().to_vec(),
        }
    }
}

impl SurfacePayload {
    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.x.len()
    }
}

/// Options for [`TentPayload::from_geometry`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayloadOptions {
    /// Ask the service to relax the mesh before generating files.
    pub enable_relaxation: bool,
    /// Also send the walls cut at the apex (`surface3`, `surface4`),
    /// used by the service to lay out sewing patterns.
    pub include_pattern_walls: bool,
}

impl PayloadOptions {
    /// Sets the relaxation flag.
    #[must_use]
    pub fn with_relaxation(mut self, enable: bool) -> Self {
        self.enable_relaxation = enable;
        self
    }

    /// Sets whether pattern walls are included.
    #[must_use]
    pub fn with_pattern_walls(mut self, include: bool) -> Self {
        self.include_pattern_walls = include;
        self
    }
}

/// Request body for the remote model-generation service.
///
/// Field names are the service contract: `width`, `depth`, `height`,
/// `surface1` .. `surface4` and `enable_relaxation`. Absent surfaces are
/// omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TentPayload {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Front/back wall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface1: Option<SurfacePayload>,
    /// Side wall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface2: Option<SurfacePayload>,
    /// Front/back wall up to the apex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface3: Option<SurfacePayload>,
    /// Side wall up to the apex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface4: Option<SurfacePayload>,
    #[serde(default)]
    pub enable_relaxation: bool,
}

impl TentPayload {
    /// Assembles the request from built geometry.
    ///
    /// Both full walls are always sent, even if the geometry was built with
    /// a wall disabled for display; missing walls are interpolated here
    /// from the frame arcs.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry lacks its frame arcs or a wall
    /// cannot be interpolated.
    pub fn from_geometry(geometry: &TentGeometry, options: PayloadOptions) -> Result<Self> {
        let surface = |wall: Wall, bounded: bool| -> Result<SurfacePayload> {
            if !bounded {
                if let Some(existing) = geometry.wall(wall) {
                    return Ok(SurfacePayload::from(&existing.surface));
                }
            }
            let (primary, mirrored) = frame(geometry)?;
            let built = wall_surface(wall, primary, mirrored, geometry.params, bounded)?;
            Ok(built.into())
        };

        let (surface3, surface4) = if options.include_pattern_walls {
            (
                Some(surface(Wall::FrontBack, true)?),
                Some(surface(Wall::Sides, true)?),
            )
        } else {
            (None, None)
        };

        let dims = geometry.dimensions;
        Ok(Self {
            width: dims.width(),
            depth: dims.depth(),
            height: dims.height(),
            surface1: Some(surface(Wall::FrontBack, false)?),
            surface2: Some(surface(Wall::Sides, false)?),
            surface3,
            surface4,
            enable_relaxation: options.enable_relaxation,
        })
    }

    /// Serializes the payload to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self).map_err(PayloadError::from)?)
    }

    /// Parses a payload from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid payload.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(PayloadError::from)?)
    }

    /// Iterates over the present surfaces with their field names.
    pub fn surfaces(&self) -> impl Iterator<Item = (&'static str, &SurfacePayload)> + '_ {
        [
            ("surface1", self.surface1.as_ref()),
            ("surface2", self.surface2.as_ref()),
            ("surface3", self.surface3.as_ref()),
            ("surface4", self.surface4.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, s)| s.map(|s| (name, s)))
    }
}

fn frame(geometry: &TentGeometry) -> Result<(&Curve, &Curve)> {
    match (geometry.arc(ArcRole::Primary), geometry.arc(ArcRole::Mirrored)) {
        (Some(primary), Some(mirrored)) => Ok((primary, mirrored)),
        _ => Err(OperationError::InvalidInput("tent geometry has no frame arcs".into()).into()),
    }
}
