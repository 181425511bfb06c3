use crate::math::Point2;

/// Both diagonals of a rectangular base centered at the origin, plus its corners.
///
/// Corners are ordered front-left, front-right, back-right, back-left, where
/// "front" is `-depth/2` along Y. Diagonal 1 runs front-left to back-right,
/// diagonal 2 runs front-right to back-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagonalPair {
    /// Length of the front-left to back-right diagonal.
    pub diagonal1: f64,
    /// Length of the front-right to back-left diagonal.
    pub diagonal2: f64,
    /// Base corners in the order listed above.
    pub corners: [Point2; 4],
}

impl DiagonalPair {
    /// Front-left corner, the start of diagonal 1.
    #[must_use]
    pub fn front_left(&self) -> Point2 {
        self.corners[0]
    }

    /// Front-right corner, the start of diagonal 2.
    #[must_use]
    pub fn front_right(&self) -> Point2 {
        self.corners[1]
    }

    /// Back-right corner, the end of diagonal 1.
    #[must_use]
    pub fn back_right(&self) -> Point2 {
        self.corners[2]
    }

    /// Back-left corner, the end of diagonal 2.
    #[must_use]
    pub fn back_left(&self) -> Point2 {
        self.corners[3]
    }
}

/// Computes both base diagonals and the four base corners.
///
/// For a rectangle the diagonals are equal; both are kept so callers can
/// treat the pair uniformly.
#[must_use]
pub fn calculate_diagonals(width: f64, depth: f64) -> DiagonalPair {
    let diagonal = width.hypot(depth);
    let (hw, hd) = (width / 2.0, depth / 2.0);
    DiagonalPair {
        diagonal1: diagonal,
        diagonal2: diagonal,
        corners: [
            Point2::new(-hw, -hd),
            Point2::new(hw, -hd),
            Point2::new(hw, hd),
            Point2::new(-hw, hd),
        ],
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reference_tent_diagonals() {
        let d = calculate_diagonals(140.0, 230.0);
        assert_eq!(d.diagonal1, d.diagonal2);
        assert_abs_diff_eq!(d.diagonal1, (140.0_f64 * 140.0 + 230.0 * 230.0).sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(d.diagonal1, 269.26, epsilon = 0.01);
    }

    #[test]
    fn corners_are_centered() {
        let d = calculate_diagonals(2.0, 4.0);
        assert_eq!(d.front_left(), Point2::new(-1.0, -2.0));
        assert_eq!(d.front_right(), Point2::new(1.0, -2.0));
        assert_eq!(d.back_right(), Point2::new(1.0, 2.0));
        assert_eq!(d.back_left(), Point2::new(-1.0, 2.0));
    }

    #[test]
    fn diagonal_matches_corner_distance() {
        let d = calculate_diagonals(3.0, 4.0);
        assert_abs_diff_eq!((d.back_right() - d.front_left()).norm(), d.diagonal1, epsilon = 1e-12);
        assert_abs_diff_eq!((d.back_left() - d.front_right()).norm(), d.diagonal2, epsilon = 1e-12);
        assert_abs_diff_eq!(d.diagonal1, 5.0, epsilon = 1e-12);
    }
}
