use std::f64::consts::FRAC_PI_2;

use crate::error::Result;
use crate::geometry::Curve;
use crate::math::linspace;

use super::{check_inputs, Profile};

/// Angle-parameterized arch: `x = a * sin(t)`, `y = h * cos(t)` for
/// `t` uniform over `[-PI/2, PI/2]`.
///
/// Traces the same ellipse as [`super::SemiEllipse`] but concentrates
/// samples near the feet, where the arch is steepest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParametricArc;

impl Profile for ParametricArc {
    fn generate(&self, half_span: f64, height: f64, num_points: usize) -> Result<Curve> {
        check_inputs(half_span, height, num_points)?;

        let (xs, ys) = linspace(-FRAC_PI_2, FRAC_PI_2, num_points)?
            .into_iter()
            .map(|t| (half_span * t.sin(), height * t.cos()))
            .unzip();

        Curve::from_profile(xs, ys)
    }
}
