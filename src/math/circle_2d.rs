/// 2D circle helpers used by the circular arc profile.
use crate::error::{GeometryError, Result};

use super::{Point2, TOLERANCE};

/// Computes the circle passing through three points.
///
/// Returns `(center, radius)`. The center is the intersection of the
/// perpendicular bisectors of `ab` and `bc`.
///
/// # Errors
///
/// Returns an error if the three points are collinear (or coincident).
pub fn circumcircle(a: Point2, b: Point2, c: Point2) -> Result<(Point2, f64)> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    // `d` scales with area; compare against |ab|·|bc| so the test is unit-free.
    let scale = (b - a).norm() * (c - b).norm();
    if d.abs() <= TOLERANCE * scale {
        return Err(GeometryError::Degenerate("circumcircle points are collinear".into()).into());
    }

    let a_sq = a.coords.norm_squared();
    let b_sq = b.coords.norm_squared();
    let c_sq = c.coords.norm_squared();

    let ux = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
    let uy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;
    let center = Point2::new(ux, uy);

    Ok((center, (a - center).norm()))
}

/// Returns the angle of `p` as seen from `center`, in `(-PI, PI]`.
#[must_use]
pub fn angle_from(center: &Point2, p: &Point2) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}
