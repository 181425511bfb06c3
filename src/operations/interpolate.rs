use tracing::{debug, trace};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Curve, Surface};
use crate::math::Point3;

/// Parameters controlling ruled-surface interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationParams {
    /// Number of samples along each ruling line (grid columns). At least 2.
    pub columns: usize,
    /// Per-coordinate tolerance under which two curve points count as the
    /// same point when looking for the curves' first meeting row.
    pub coincidence_tolerance: f64,
}

impl Default for InterpolationParams {
    fn default() -> Self {
        Self {
            columns: 100,
            coincidence_tolerance: 1e-9,
        }
    }
}

impl InterpolationParams {
    /// Sets the number of columns.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the coincidence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.coincidence_tolerance = tolerance;
        self
    }
}

/// Builds a ruled surface between two curves with the same point count.
///
/// Row `i` is the straight segment from `first[i]` to `second[i]`, sampled
/// at `t = j / (columns - 1)` as `(1 - t) * first[i] + t * second[i]`.
/// This is a per-row blend, not a surface fit.
pub struct InterpolateSurface<'a> {
    first: &'a Curve,
    second: &'a Curve,
    params: InterpolationParams,
}

impl<'a> InterpolateSurface<'a> {
    /// Creates a new `InterpolateSurface` operation with default parameters.
    #[must_use]
    pub fn new(first: &'a Curve, second: &'a Curve) -> Self {
        Self {
            first,
            second,
            params: InterpolationParams::default(),
        }
    }

    /// Sets custom interpolation parameters.
    #[must_use]
    pub fn with_params(mut self, params: InterpolationParams) -> Self {
        self.params = params;
        self
    }

    /// Interpolates over every row of the two curves.
    ///
    /// # Errors
    ///
    /// Returns an error if the curves differ in length, `columns < 2` or the
    /// coincidence tolerance is negative or not finite.
    pub fn execute(&self) -> Result<Surface> {
        self.check()?;
        self.blend_rows(self.first.len())
    }

    /// Interpolates only up to the first row where the two curves meet.
    ///
    /// The meeting row is included. When the curves never meet within the
    /// tolerance, every row is used (the last row index is `len - 1`).
    /// Empty curves produce an empty surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the curves differ in length, `columns < 2` or the
    /// coincidence tolerance is negative or not finite.
    pub fn execute_until_intersection(&self) -> Result<Surface> {
        self.check()?;
        if self.first.is_empty() {
            return Ok(Surface::empty());
        }

        let tolerance = self.params.coincidence_tolerance;
        let last_row = match find_intersection(self.first, self.second, tolerance) {
            Some(i) => i,
            None => {
                debug!(
                    rows = self.first.len(),
                    "curves never meet; interpolating the full row range"
                );
                self.first.len() - 1
            }
        };
        self.blend_rows(last_row + 1)
    }

    fn check(&self) -> Result<()> {
        if self.params.columns < 2 {
            return Err(OperationError::PreconditionViolated(format!(
                "interpolation needs at least 2 columns, got {}",
                self.params.columns
            ))
            .into());
        }
        let tolerance = self.params.coincidence_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "coincidence_tolerance",
                value: tolerance,
                min: 0.0,
                max: f64::MAX,
            }
            .into());
        }
        if self.first.len() != self.second.len() {
            return Err(OperationError::PreconditionViolated(format!(
                "boundary curves differ in length: {} vs {}",
                self.first.len(),
                self.second.len()
            ))
            .into());
        }
        Ok(())
    }

    fn blend_rows(&self, rows: usize) -> Result<Surface> {
        let columns = self.params.columns;
        #[allow(clippy::cast_precision_loss)]
        let last = (columns - 1) as f64;

        let grid: Vec<Vec<Point3>> = self
            .first
            .points()
            .zip(self.second.points())
            .take(rows)
            .map(|(a, b)| {
                (0..columns)
                    .map(|j| {
                        #[allow(clippy::cast_precision_loss)]
                        let t = j as f64 / last;
                        Point3::from(a.coords * (1.0 - t) + b.coords * t)
                    })
                    .collect()
            })
            .collect();

        trace!(rows = grid.len(), columns, "interpolated ruled surface");
        Surface::from_rows(&grid)
    }
}

/// Returns the first index at which the two curves' points coincide.
///
/// Points coincide when every coordinate differs by at most `tolerance`.
/// Only the index range shared by both curves is scanned.
#[must_use]
pub fn find_intersection(first: &Curve, second: &Curve, tolerance: f64) -> Option<usize> {
    first
        .points()
        .zip(second.points())
        .position(|(a, b)| (a - b).iter().all(|d| d.abs() <= tolerance))
}
