use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::geometry::Curve;
use crate::math::linspace;

use super::{check_inputs, Profile};

/// How the semi-ellipse treats samples whose radicand `1 - (x/a)^2`
/// falls outside `[0, 1]` through floating-point noise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointPolicy {
    /// Clamp the radicand to `[0, 1]`; the curve always has `num_points` points.
    #[default]
    Clamp,
    /// Drop samples with a non-real or negative rise, shrinking the curve.
    Discard,
}

/// Half-ellipse arch: `y = height * sqrt(1 - (x / half_span)^2)`,
/// with X sampled uniformly over `[-half_span, half_span]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiEllipse {
    policy: EndpointPolicy,
}

impl SemiEllipse {
    /// Creates a semi-ellipse generator with the given endpoint policy.
    #[must_use]
    pub fn new(policy: EndpointPolicy) -> Self {
        Self { policy }
    }

    /// Returns the endpoint policy.
    #[must_use]
    pub fn policy(&self) -> EndpointPolicy {
        self.policy
    }
}

impl Profile for SemiEllipse {
    fn generate(&self, half_span: f64, height: f64, num_points: usize) -> Result<Curve> {
        check_inputs(half_span, height, num_points)?;

        let mut xs = Vec::with_capacity(num_points);
        let mut ys = Vec::with_capacity(num_points);
        for x in linspace(-half_span, half_span, num_points)? {
            let u = x / half_span;
            let radicand = 1.0 - u * u;
            let y = match self.policy {
                EndpointPolicy::Clamp => height * radicand.clamp(0.0, 1.0).sqrt(),
                EndpointPolicy::Discard => {
                    let y = height * radicand.sqrt();
                    if y.is_nan() || y < 0.0 {
                        continue;
                    }
                    y
                }
            };
            xs.push(x);
            ys.push(y);
        }

        let dropped = num_points - xs.len();
        if dropped > 0 {
            warn!(dropped, num_points, "semi-ellipse discarded out-of-domain samples");
        }

        Curve::from_profile(xs, ys)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn diagonal_arc_of_reference_tent() {
        // 140 x 230 base: half diagonal = sqrt(140^2 + 230^2) / 2 ~ 134.63
        let half = 140.0_f64.hypot(230.0) / 2.0;
        let arc = SemiEllipse::default().generate(half, 120.0, 100).unwrap();
        assert_eq!(arc.len(), 100);
        assert_abs_diff_eq!(arc.x()[0], -134.63, epsilon = 0.01);
        assert_abs_diff_eq!(arc.x()[99], 134.63, epsilon = 0.01);
        // Even count: the two middle samples straddle x = 0.
        assert_abs_diff_eq!(arc.y()[49], 120.0, epsilon = 0.01);
        assert_abs_diff_eq!(arc.y()[50], 120.0, epsilon = 0.01);
    }

    #[test]
    fn odd_count_hits_the_apex_exactly() {
        let arc = SemiEllipse::default().generate(134.63, 120.0, 101).unwrap();
        assert_abs_diff_eq!(arc.x()[50], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arc.y()[50], 120.0, epsilon = 1e-9);
    }

    #[test]
    fn samples_lie_on_the_ellipse() {
        let (a, h) = (3.0, 2.0);
        let arc = SemiEllipse::default().generate(a, h, 25).unwrap();
        for p in arc.points() {
            let residual = (p.x / a).powi(2) + (p.y / h).powi(2);
            assert_abs_diff_eq!(residual, 1.0, epsilon = 1e-9);
            assert!(p.y >= 0.0);
        }
    }

    #[test]
    fn profile_is_symmetric() {
        let arc = SemiEllipse::default().generate(1.7, 0.9, 30).unwrap();
        let n = arc.len();
        for i in 0..n {
            assert_abs_diff_eq!(arc.x()[i], -arc.x()[n - 1 - i], epsilon = 1e-12);
            assert_abs_diff_eq!(arc.y()[i], arc.y()[n - 1 - i], epsilon = 1e-9);
        }
    }

    #[test]
    fn discard_drops_nothing_when_every_sample_is_in_domain() {
        for n in [2, 11, 100, 101] {
            let clamped = SemiEllipse::new(EndpointPolicy::Clamp).generate(2.0, 1.0, n).unwrap();
            let discarded = SemiEllipse::new(EndpointPolicy::Discard)
                .generate(2.0, 1.0, n)
                .unwrap();
            assert_eq!(discarded.len(), n);
            assert_eq!(discarded, clamped);
        }
    }
}
