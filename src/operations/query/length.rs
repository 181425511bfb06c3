use crate::geometry::Curve;

/// Computes the polyline length of a curve.
///
/// Sums the 3D Euclidean distance between consecutive points. A curve
/// with fewer than two points has length `0`.
#[must_use]
pub fn arc_length(curve: &Curve) -> f64 {
    let points: Vec<_> = curve.points().collect();
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::geometry::{EndpointPolicy, Profile, SemiEllipse};
    use crate::math::Point3;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn single_point_has_zero_length() {
        let c = Curve::from_points(&[Point3::new(1.0, 2.0, 3.0)]);
        assert_eq!(arc_length(&c), 0.0);
        assert_eq!(arc_length(&Curve::default()), 0.0);
    }

    #[test]
    fn two_points_give_their_distance() {
        let c = Curve::from_points(&[Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 12.0)]);
        assert_relative_eq!(arc_length(&c), 13.0, epsilon = 1e-12);
    }

    #[test]
    fn polyline_sums_segments() {
        let c = Curve::from_points(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(1.0, 2.0, -2.0),
        ]);
        assert_relative_eq!(c.length(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn semicircle_converges_to_pi_r() {
        let arc = SemiEllipse::new(EndpointPolicy::Clamp)
            .generate(1.0, 1.0, 2001)
            .unwrap();
        assert_relative_eq!(arc_length(&arc), PI, max_relative = 1e-3);
    }
}
