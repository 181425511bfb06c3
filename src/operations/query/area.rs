use crate::geometry::Surface;
use crate::math::Point3;

/// Computes the area of a ruled grid by triangle decomposition.
///
/// Each cell `(i, i+1) x (j, j+1)` is split along the diagonal from
/// `(i, j)` to `(i+1, j+1)`; each triangle contributes half the norm of
/// the cross product of two of its edges. Surfaces with fewer than two
/// rows or columns have zero area.
#[must_use]
pub fn surface_area(surface: &Surface) -> f64 {
    let rows = surface.rows();
    let columns = surface.columns();
    if rows < 2 || columns < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..rows - 1 {
        for j in 0..columns - 1 {
            let (Some(p00), Some(p10), Some(p01), Some(p11)) = (
                surface.point(i, j),
                surface.point(i + 1, j),
                surface.point(i, j + 1),
                surface.point(i + 1, j + 1),
            ) else {
                continue;
            };
            total += triangle_area(&p00, &p10, &p11) + triangle_area(&p00, &p11, &p01);
        }
    }
    total
}

fn triangle_area(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    (b - a).cross(&(c - a)).norm() * 0.5
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::geometry::Curve;
    use crate::operations::{InterpolateSurface, InterpolationParams};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn edge(a: Point3, b: Point3, n: usize) -> Curve {
        let pts: Vec<Point3> = (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                a + (b - a) * t
            })
            .collect();
        Curve::from_points(&pts)
    }

    fn flat_panel(n: usize) -> Surface {
        // 2 x 3 rectangle in the XZ plane.
        let a = edge(p(0.0, 0.0, 0.0), p(0.0, 0.0, 3.0), n);
        let b = edge(p(2.0, 0.0, 0.0), p(2.0, 0.0, 3.0), n);
        InterpolateSurface::new(&a, &b)
            .with_params(InterpolationParams::default().with_columns(n))
            .execute()
            .unwrap()
    }

    #[test]
    fn unit_square_cell() {
        let s = Surface::from_rows(&[
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)],
            vec![p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0)],
        ])
        .unwrap();
        assert_relative_eq!(surface_area(&s), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn flat_rectangle_is_exact() {
        assert_relative_eq!(flat_panel(10).area(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn doubling_resolution_on_flat_surface_changes_area_below_one_percent() {
        let coarse = flat_panel(20).area();
        let fine = flat_panel(40).area();
        assert!((fine - coarse).abs() / coarse < 0.01);
    }

    #[test]
    fn degenerate_grids_have_zero_area() {
        assert_eq!(surface_area(&Surface::empty()), 0.0);
        let one_row = Surface::from_rows(&[vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]]).unwrap();
        assert_eq!(surface_area(&one_row), 0.0);
    }

    #[test]
    fn collapsed_row_contributes_nothing() {
        // Triangle: the last row collapses to the apex.
        let s = Surface::from_rows(&[
            vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)],
            vec![p(1.0, 2.0, 0.0), p(1.0, 2.0, 0.0)],
        ])
        .unwrap();
        assert_relative_eq!(s.area(), 2.0, epsilon = 1e-12);
    }
}
