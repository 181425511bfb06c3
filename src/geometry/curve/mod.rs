use serde::Serialize;

use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::operations::query::arc_length;

/// A discretized space curve stored as three parallel coordinate sequences.
///
/// Points are ordered from one physical end of the arch to the other.
/// A `Curve` is never mutated after construction: mirrored, reversed or
/// placed variants are new values.
///
/// Serializes as `{ "x": [..], "y": [..], "z": [..] }`, the shape the
/// rendering layer consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Curve {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Curve {
    /// Creates a curve from parallel coordinate sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if the three sequences differ in length.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(OperationError::PreconditionViolated(format!(
                "curve coordinate lengths differ: x={}, y={}, z={}",
                x.len(),
                y.len(),
                z.len()
            ))
            .into());
        }
        Ok(Self { x, y, z })
    }

    /// Creates a curve from an ordered list of points.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Self {
        Self {
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            z: points.iter().map(|p| p.z).collect(),
        }
    }

    /// Creates a planar profile curve in the XY plane (`z = 0`).
    ///
    /// # Errors
    ///
    /// Returns an error if `x` and `y` differ in length.
    pub fn from_profile(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        let z = vec![0.0; x.len()];
        Self::new(x, y, z)
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns whether the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns the X coordinates.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the Y coordinates.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the Z coordinates.
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Returns the `i`-th point, if any.
    #[must_use]
    pub fn point(&self, i: usize) -> Option<Point3> {
        (i < self.len()).then(|| Point3::new(self.x[i], self.y[i], self.z[i]))
    }

    /// Iterates over the points in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point3> + '_ {
        (0..self.len()).map(|i| Point3::new(self.x[i], self.y[i], self.z[i]))
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point3> {
        self.point(0)
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point3> {
        self.len().checked_sub(1).and_then(|i| self.point(i))
    }

    /// Mirror image about the `x = 0` plane: every X is negated.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            x: self.x.iter().map(|x| -x).collect(),
            y: self.y.clone(),
            z: self.z.clone(),
        }
    }

    /// Point-reversed copy; the three sequences are reversed together.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let rev = |v: &[f64]| v.iter().rev().copied().collect::<Vec<_>>();
        Self {
            x: rev(&self.x),
            y: rev(&self.y),
            z: rev(&self.z),
        }
    }

    /// Returns the first `count` points (or all of them if shorter).
    #[must_use]
    pub fn truncated(&self, count: usize) -> Self {
        let n = count.min(self.len());
        Self {
            x: self.x[..n].to_vec(),
            y: self.y[..n].to_vec(),
            z: self.z[..n].to_vec(),
        }
    }

    /// Applies `f` to every point, producing a new curve.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point3) -> Point3) -> Self {
        let points: Vec<Point3> = self.points().map(f).collect();
        Self::from_points(&points)
    }

    /// Total polyline length. See [`arc_length`].
    #[must_use]
    pub fn length(&self) -> f64 {
        arc_length(self)
    }
}
