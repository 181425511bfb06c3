use serde::Serialize;

use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::operations::query::surface_area;

/// A ruled grid of 3D points stored as three parallel 2D arrays.
///
/// Row `i` follows the `i`-th point of the boundary curves; column `j`
/// walks the interpolation parameter from the first boundary curve
/// (`j = 0`) to the second (`j = columns - 1`). Every row has the same
/// number of columns. An empty surface (zero rows) is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Surface {
    x: Vec<Vec<f64>>,
    y: Vec<Vec<f64>>,
    z: Vec<Vec<f64>>,
}

impl Surface {
    /// Returns a surface with no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a surface from rows of points.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not all have the same length.
    pub fn from_rows(rows: &[Vec<Point3>]) -> Result<Self> {
        if let Some(first) = rows.first() {
            let columns = first.len();
            if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
                return Err(OperationError::PreconditionViolated(format!(
                    "surface row {i} has {} columns, expected {columns}",
                    row.len()
                ))
                .into());
            }
        }

        let axis = |f: fn(&Point3) -> f64| -> Vec<Vec<f64>> {
            rows.iter().map(|row| row.iter().map(f).collect()).collect()
        };

        Ok(Self {
            x: axis(|p| p.x),
            y: axis(|p| p.y),
            z: axis(|p| p.z),
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.x.len()
    }

    /// Returns the number of columns (0 for an empty surface).
    #[must_use]
    pub fn columns(&self) -> usize {
        self.x.first().map_or(0, Vec::len)
    }

    /// Returns whether the surface has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns the X grid.
    #[must_use]
    pub fn x(&self) -> &[Vec<f64>] {
        &self.x
    }

    /// Returns the Y grid.
    #[must_use]
    pub fn y(&self) -> &[Vec<f64>] {
        &self.y
    }

    /// Returns the Z grid.
    #[must_use]
    pub fn z(&self) -> &[Vec<f64>] {
        &self.z
    }

    /// Returns the grid point at row `i`, column `j`, if any.
    #[must_use]
    pub fn point(&self, i: usize, j: usize) -> Option<Point3> {
        let x = self.x.get(i)?.get(j)?;
        Some(Point3::new(*x, self.y[i][j], self.z[i][j]))
    }

    /// Total area estimated by triangle decomposition. See [`surface_area`].
    #[must_use]
    pub fn area(&self) -> f64 {
        surface_area(self)
    }

    /// Consumes the surface, returning the `(x, y, z)` grids.
    #[must_use]
    pub fn into_grids(self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<Vec<f64>>) {
        (self.x, self.y, self.z)
    }
}
