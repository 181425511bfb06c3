use crate::error::{OperationError, Result};

/// Returns `count` evenly spaced values from `start` to `stop`, both inclusive.
///
/// Each value is computed as `start + i * step` rather than by repeated
/// addition, so the error does not accumulate along the sequence. The last
/// value is pinned to `stop`.
///
/// # Errors
///
/// Returns an error if `count < 2`.
pub fn linspace(start: f64, stop: f64, count: usize) -> Result<Vec<f64>> {
    if count < 2 {
        return Err(OperationError::PreconditionViolated(format!(
            "linspace needs at least 2 samples, got {count}"
        ))
        .into());
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (stop - start) / (count - 1) as f64;

    #[allow(clippy::cast_precision_loss)]
    let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
    values[count - 1] = stop;
    Ok(values)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn endpoints_are_exact() {
        for n in [2, 3, 7, 100, 1001] {
            let v = linspace(-134.63, 134.63, n).unwrap();
            assert_eq!(v.len(), n);
            assert_abs_diff_eq!(v[0], -134.63, epsilon = 1e-9);
            assert_abs_diff_eq!(v[n - 1], 134.63, epsilon = 1e-9);
        }
    }

    #[test]
    fn values_are_evenly_spaced() {
        let v = linspace(0.0, 1.0, 5).unwrap();
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn descending_range() {
        let v = linspace(3.0, -3.0, 4).unwrap();
        assert_abs_diff_eq!(v[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn no_drift_over_many_samples() {
        let n = 100_000;
        let v = linspace(0.0, 0.1, n).unwrap();
        let step = 0.1 / (n - 1) as f64;
        assert_abs_diff_eq!(v[n / 2], (n / 2) as f64 * step, epsilon = 1e-15);
    }

    #[test]
    fn rejects_fewer_than_two_samples() {
        assert!(linspace(0.0, 1.0, 1).is_err());
        assert!(linspace(0.0, 1.0, 0).is_err());
    }
}
