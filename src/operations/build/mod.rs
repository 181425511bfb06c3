mod config;
mod model;

pub use config::{TentConfig, WallSelection};
pub use model::{ArcRole, FrameArc, TentGeometry, Wall, WallSurface};

use tracing::debug;

use crate::error::Result;
use crate::geometry::{Curve, Dimensions, Surface};
use crate::math::Point3;
use crate::operations::{calculate_diagonals, InterpolateSurface, InterpolationParams};

/// Builds the full tent geometry from its dimensions.
///
/// Steps:
/// 1. Compute the base diagonals.
/// 2. Sample the arch profile over half a diagonal and lay it along
///    diagonal 1 (z up): the primary arc.
/// 3. Mirror it about `x = 0` onto diagonal 2: the mirrored arc.
/// 4. Interpolate the enabled walls and measure them.
pub struct BuildTent {
    dimensions: Dimensions,
    config: TentConfig,
}

impl BuildTent {
    /// Creates a new `BuildTent` operation with the default configuration.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            config: TentConfig::default(),
        }
    }

    /// Sets a custom configuration.
    #[must_use]
    pub fn with_config(mut self, config: TentConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution is below 2 or the profile cannot
    /// be generated for these dimensions.
    pub fn execute(&self) -> Result<TentGeometry> {
        let dims = self.dimensions;
        let cfg = self.config;
        debug!(
            width = dims.width(),
            depth = dims.depth(),
            height = dims.height(),
            resolution = cfg.resolution,
            family = ?cfg.arc_family,
            "building tent geometry"
        );

        let diagonals = calculate_diagonals(dims.width(), dims.depth());
        let profile = cfg.arc_family.generate(
            diagonals.diagonal1 / 2.0,
            dims.height(),
            cfg.resolution,
            cfg.endpoint_policy,
        )?;

        let primary = place_on_diagonal(&profile, dims.width(), dims.depth(), diagonals.diagonal1);
        let mirrored = primary.mirrored();
        let total_arc_length = primary.length() + mirrored.length();

        let params = cfg.interpolation_params();
        let mut surfaces = Vec::new();
        for (wall, enabled) in [
            (Wall::FrontBack, cfg.walls.front_back),
            (Wall::Sides, cfg.walls.sides),
        ] {
            if enabled {
                let surface = wall_surface(wall, &primary, &mirrored, params, false)?;
                surfaces.push(measure(wall, surface));
            }
        }
        let total_surface_area: f64 = surfaces.iter().map(|s| s.area).sum();

        let mut arcs = vec![
            FrameArc {
                role: ArcRole::Primary,
                curve: primary,
            },
            FrameArc {
                role: ArcRole::Mirrored,
                curve: mirrored,
            },
        ];
        if cfg.walls.sides {
            let helper = arcs[1].curve.reversed();
            arcs.push(FrameArc {
                role: ArcRole::Helper,
                curve: helper,
            });
        }

        debug!(
            arcs = arcs.len(),
            surfaces = surfaces.len(),
            total_arc_length,
            total_surface_area,
            "tent geometry built"
        );

        Ok(TentGeometry {
            arcs,
            surfaces,
            total_arc_length,
            total_surface_area,
            dimensions: dims,
            diagonals,
            params,
        })
    }
}

/// Builds tent geometry with the default configuration at `resolution`.
///
/// # Errors
///
/// See [`BuildTent::execute`].
pub fn build_tent_geometry(dimensions: Dimensions, resolution: usize) -> Result<TentGeometry> {
    BuildTent::new(dimensions)
        .with_config(TentConfig::default().with_resolution(resolution))
        .execute()
}

/// Interpolates one wall from the primary and mirrored arcs.
///
/// `bounded` stops each wall at the row where its boundary arcs meet (the
/// apex for odd resolutions), giving the half panel used for patterns.
pub(crate) fn wall_surface(
    wall: Wall,
    primary: &Curve,
    mirrored: &Curve,
    params: InterpolationParams,
    bounded: bool,
) -> Result<Surface> {
    let helper;
    let second = match wall {
        Wall::FrontBack => mirrored,
        Wall::Sides => {
            helper = mirrored.reversed();
            &helper
        }
    };
    let op = InterpolateSurface::new(primary, second).with_params(params);
    if bounded {
        op.execute_until_intersection()
    } else {
        op.execute()
    }
}

fn measure(wall: Wall, surface: Surface) -> WallSurface {
    let area = surface.area();
    WallSurface {
        wall,
        surface,
        area,
    }
}

/// Lays a planar profile `(s, rise)` along the base diagonal through the
/// origin with direction `(width, depth) / diagonal`, rise on Z.
fn place_on_diagonal(profile: &Curve, width: f64, depth: f64, diagonal: f64) -> Curve {
    let (ux, uy) = (width / diagonal, depth / diagonal);
    profile.map_points(|p| Point3::new(p.x * ux, p.x * uy, p.y))
}
