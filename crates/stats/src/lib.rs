//! Statistical helper functions for the naiad streamflow toolkit.

mod gumbel;

pub use gumbel::{gumbel1, low_return_periods, return_periods, DEFAULT_RETURN_PERIODS};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let m = mean(data);
    (data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (nf - 1.0)).sqrt()
}

/// Population standard deviation with N denominator.
/// Returns 0.0 if empty.
pub fn sd_pop(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let nf = data.len() as f64;
    let m = mean(data);
    (data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / nf).sqrt()
}

/// Linear-interpolation percentile over the non-NaN values of `data`.
///
/// `q` is in percent (0..=100). Matches numpy's `nanpercentile` with the
/// default linear interpolation. Returns NaN when no valid values remain.
///
/// # Panics
///
/// Panics if `q` is outside 0..=100.
pub fn percentile_nan(data: &[f64], q: f64) -> f64 {
    assert!((0.0..=100.0).contains(&q), "q must be in 0..=100, got {q}");

    let mut valid: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    if valid.is_empty() {
        return f64::NAN;
    }
    valid.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = valid.len();
    let h = (n - 1) as f64 * (q / 100.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    valid[lo] + (h - h.floor()) * (valid[hi] - valid[lo])
}

/// Drops values whose z-score magnitude exceeds `max_z`.
///
/// A composable pre-filter for flow samples ahead of curve construction;
/// curve builders never filter internally. The z-score uses the population
/// standard deviation of the non-NaN values. NaN values are dropped (they
/// cannot be scored). A sample with zero spread is returned without its
/// NaN values but otherwise unchanged.
pub fn drop_outliers_zscore(data: &[f64], max_z: f64) -> Vec<f64> {
    let valid: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    let m = mean(&valid);
    let s = sd_pop(&valid);
    if s == 0.0 {
        return valid;
    }
    valid
        .into_iter()
        .filter(|&v| ((v - m) / s).abs() <= max_z)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_basic() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn sd_basic() {
        // sample sd of [2, 4, 4, 4, 5, 5, 7, 9] is ~2.138
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.13809, epsilon = 1e-4);
        assert_eq!(sd(&[1.0]), 0.0);
    }

    #[test]
    fn sd_pop_basic() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd_pop(&data), 2.0);
        assert_eq!(sd_pop(&[]), 0.0);
    }

    #[test]
    fn percentile_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(percentile_nan(&data, 0.0), 1.0);
        assert_relative_eq!(percentile_nan(&data, 100.0), 4.0);
        assert_relative_eq!(percentile_nan(&data, 50.0), 2.5);
        assert_relative_eq!(percentile_nan(&data, 25.0), 1.75);
    }

    #[test]
    fn percentile_ignores_nan() {
        let data = [1.0, f64::NAN, 2.0, 3.0, f64::NAN, 4.0];
        assert_relative_eq!(percentile_nan(&data, 50.0), 2.5);
    }

    #[test]
    fn percentile_all_nan_is_nan() {
        assert!(percentile_nan(&[f64::NAN, f64::NAN], 50.0).is_nan());
        assert!(percentile_nan(&[], 50.0).is_nan());
    }

    #[test]
    #[should_panic(expected = "q must be in 0..=100")]
    fn percentile_rejects_bad_q() {
        percentile_nan(&[1.0], 101.0);
    }

    #[test]
    fn zscore_filter_drops_outlier() {
        let mut data = vec![10.0; 20];
        data[0] = 9.0;
        data[1] = 11.0;
        data.push(1000.0);
        let kept = drop_outliers_zscore(&data, 3.0);
        assert!(!kept.contains(&1000.0));
        assert_eq!(kept.len(), data.len() - 1);
    }

    #[test]
    fn zscore_filter_constant_sample_unchanged() {
        let data = [5.0, 5.0, 5.0, f64::NAN];
        let kept = drop_outliers_zscore(&data, 3.0);
        assert_eq!(kept, vec![5.0, 5.0, 5.0]);
    }
}
