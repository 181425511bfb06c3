use std::f64::consts::PI;

use crate::error::Result;
use crate::geometry::Curve;
use crate::math::circle_2d::{angle_from, circumcircle};
use crate::math::{linspace, Point2};

use super::{check_inputs, Profile};

/// Circular arch through both feet `(-a, 0)`, `(a, 0)` and the apex `(0, h)`.
///
/// The circle is the circumcircle of those three points. Samples are
/// uniform in angle, sweeping over the top of the circle from the left
/// foot to the right foot. When `h > a` the arch bulges past the feet
/// (more than a semicircle).
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularArc;

impl Profile for CircularArc {
    fn generate(&self, half_span: f64, height: f64, num_points: usize) -> Result<Curve> {
        check_inputs(half_span, height, num_points)?;

        let left = Point2::new(-half_span, 0.0);
        let right = Point2::new(half_span, 0.0);
        let (center, radius) = circumcircle(left, Point2::new(0.0, height), right)?;

        // The arch is symmetric about x = 0, so the left foot sits at PI - end.
        let end = angle_from(&center, &right);
        let start = PI - end;

        let mut xs = Vec::with_capacity(num_points);
        let mut ys = Vec::with_capacity(num_points);
        for theta in linspace(start, end, num_points)? {
            xs.push(center.x + radius * theta.cos());
            ys.push(center.y + radius * theta.sin());
        }

        // Pin the feet onto the base line.
        xs[0] = -half_span;
        ys[0] = 0.0;
        xs[num_points - 1] = half_span;
        ys[num_points - 1] = 0.0;

        Curve::from_profile(xs, ys)
    }
}
