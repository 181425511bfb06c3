mod circular;
mod parametric;
mod semi_ellipse;

pub use circular::CircularArc;
pub use parametric::ParametricArc;
pub use semi_ellipse::{EndpointPolicy, SemiEllipse};

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Curve;

/// Generator of a planar arch profile.
///
/// A profile lies in the XY plane: X runs across the span from
/// `-half_span` to `half_span`, Y is the rise above the base and `Z = 0`.
/// The curve starts at the left foot and ends at the right foot.
pub trait Profile {
    /// Samples the full profile with `num_points` points.
    ///
    /// Some generators may return fewer points than requested (see
    /// [`EndpointPolicy::Discard`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `half_span` or `height` is not positive, or
    /// `num_points < 2`.
    fn generate(&self, half_span: f64, height: f64, num_points: usize) -> Result<Curve>;

    /// Samples the profile and keeps only its first `ceil(num_points / 2)` points.
    ///
    /// # Errors
    ///
    /// Same as [`Profile::generate`].
    fn half(&self, half_span: f64, height: f64, num_points: usize) -> Result<Curve> {
        let full = self.generate(half_span, height, num_points)?;
        Ok(full.truncated(num_points.div_ceil(2)))
    }
}

/// The closed set of arch profile strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcFamily {
    /// `y = h * sqrt(1 - (x / a)^2)` sampled uniformly in X.
    #[default]
    SemiEllipse,
    /// Circle through both feet and the apex.
    Circular,
    /// `x = a * sin(t)`, `y = h * cos(t)` sampled uniformly in `t`.
    Parametric,
}

impl ArcFamily {
    /// Samples a full profile with the strategy this variant names.
    ///
    /// `policy` only affects [`ArcFamily::SemiEllipse`].
    ///
    /// # Errors
    ///
    /// See [`Profile::generate`].
    pub fn generate(
        self,
        half_span: f64,
        height: f64,
        num_points: usize,
        policy: EndpointPolicy,
    ) -> Result<Curve> {
        match self {
            Self::SemiEllipse => SemiEllipse::new(policy).generate(half_span, height, num_points),
            Self::Circular => CircularArc.generate(half_span, height, num_points),
            Self::Parametric => ParametricArc.generate(half_span, height, num_points),
        }
    }

    /// Samples the first half of a profile. See [`Profile::half`].
    ///
    /// # Errors
    ///
    /// See [`Profile::generate`].
    pub fn half(
        self,
        half_span: f64,
        height: f64,
        num_points: usize,
        policy: EndpointPolicy,
    ) -> Result<Curve> {
        match self {
            Self::SemiEllipse => SemiEllipse::new(policy).half(half_span, height, num_points),
            Self::Circular => CircularArc.half(half_span, height, num_points),
            Self::Parametric => ParametricArc.half(half_span, height, num_points),
        }
    }
}

/// Validates the common `(half_span, height, num_points)` inputs.
fn check_inputs(half_span: f64, height: f64, num_points: usize) -> Result<()> {
    if !(half_span.is_finite() && half_span > 0.0) {
        return Err(GeometryError::InvalidDimension {
            name: "half_span",
            value: half_span,
        }
        .into());
    }
    if !(height.is_finite() && height > 0.0) {
        return Err(GeometryError::InvalidDimension {
            name: "height",
            value: height,
        }
        .into());
    }
    if num_points < 2 {
        return Err(OperationError::PreconditionViolated(format!(
            "a profile needs at least 2 points, got {num_points}"
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const FAMILIES: [ArcFamily; 3] = [
        ArcFamily::SemiEllipse,
        ArcFamily::Circular,
        ArcFamily::Parametric,
    ];

    #[test]
    fn every_family_spans_foot_to_foot() {
        for family in FAMILIES {
            let c = family.generate(2.0, 1.5, 41, EndpointPolicy::Clamp).unwrap();
            assert_eq!(c.len(), 41, "{family:?}");
            let first = c.first().unwrap();
            let last = c.last().unwrap();
            assert_abs_diff_eq!(first.x, -2.0, epsilon = 1e-9);
            assert_abs_diff_eq!(last.x, 2.0, epsilon = 1e-9);
            assert_abs_diff_eq!(first.y, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn every_family_peaks_at_height() {
        for family in FAMILIES {
            let c = family.generate(2.0, 1.5, 41, EndpointPolicy::Clamp).unwrap();
            let peak = c.y().iter().copied().fold(f64::MIN, f64::max);
            assert_abs_diff_eq!(peak, 1.5, epsilon = 1e-9);
            assert_abs_diff_eq!(c.y()[20], 1.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn half_keeps_leading_points() {
        for family in FAMILIES {
            let full = family.generate(1.0, 1.0, 9, EndpointPolicy::Clamp).unwrap();
            let half = family.half(1.0, 1.0, 9, EndpointPolicy::Clamp).unwrap();
            assert_eq!(half.len(), 5);
            assert_eq!(half, full.truncated(5));
        }
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        for family in FAMILIES {
            assert!(family.generate(0.0, 1.0, 10, EndpointPolicy::Clamp).is_err());
            assert!(family.generate(1.0, -1.0, 10, EndpointPolicy::Clamp).is_err());
            assert!(family.generate(1.0, 1.0, 1, EndpointPolicy::Clamp).is_err());
        }
    }

    #[test]
    fn family_names_round_trip_through_serde() {
        let json = serde_json::to_string(&ArcFamily::SemiEllipse).unwrap();
        assert_eq!(json, "\"semi_ellipse\"");
        let f: ArcFamily = serde_json::from_str("\"circular\"").unwrap();
        assert_eq!(f, ArcFamily::Circular);
    }
}
