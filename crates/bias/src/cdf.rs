//! Monthly empirical CDF mappers built from flow histograms.

use tracing::warn;

use crate::error::BiasError;
use crate::interp::{make_interpolator, FillMode, Interp1d};

/// Width of the single bin standing in for the histogram of a
/// zero-variance sample.
const DEGENERATE_BIN_WIDTH: f64 = 1.0;

/// Which way a [`CdfMapper`] maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Flow to cumulative probability (the CDF itself).
    ToProbability,
    /// Cumulative probability to flow (the inverse CDF).
    ToFlow,
}

/// One calendar month's empirical flow distribution, exposed as a
/// piecewise-linear interpolant in either direction.
///
/// Built from a histogram of the month's flow sample: bin count follows
/// Sturges' rule `ceil(1 + 3.322 * log10(n))`, bins are aligned to zero
/// with a mirrored leading edge at `-w`, and the *trailing* edge of each
/// bin is the flow coordinate paired with the cumulative probability
/// reached by that bin.
///
/// Probability outputs are always clamped to [0, 1]; flow outputs are
/// not clamped (extrapolated flow may exceed the historical range).
#[derive(Debug, Clone, PartialEq)]
pub struct CdfMapper {
    interp: Interp1d,
    direction: Direction,
    bin_width: f64,
}

impl CdfMapper {
    /// Builds a mapper from one month's flow sample.
    ///
    /// `values` must already be restricted to the target calendar month;
    /// NaN entries are dropped here. With `extrapolate` the interpolant
    /// extends linearly beyond the sample's range, otherwise queries
    /// outside it fail with [`BiasError::OutOfDomain`].
    ///
    /// A zero-variance sample has no usable histogram; it falls back to a
    /// single bin centred on the value, reported with a warning rather
    /// than failing, so the round trip returns the value itself.
    ///
    /// # Errors
    ///
    /// Returns [`BiasError::EmptySample`] if no values remain after
    /// dropping NaN.
    pub fn build(
        values: &[f64],
        direction: Direction,
        extrapolate: bool,
    ) -> Result<Self, BiasError> {
        let clean: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        let n = clean.len();
        if n == 0 {
            return Err(BiasError::EmptySample);
        }

        let max = clean.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = clean.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val = max.ceil();
        let min_val = min.floor();
        if max_val == min_val {
            // The bin grid is aligned to zero, so padding the range still
            // leaves the constant value on a bin edge whenever it divides
            // the width evenly. Skip the histogram instead.
            warn!(
                value = min,
                n, "zero-variance sample; mapping through a single centred bin"
            );
            return Self::degenerate(min, direction, extrapolate);
        }

        // Sturges' rule
        let classes = (1.0 + 3.322 * (n as f64).log10()).ceil().max(1.0);
        let width = (max_val - min_val) / classes;

        // Bin edges aligned to zero: -w, 0, w, .. through max_val + 2w.
        let n_edges = ((max_val + 3.0 * width) / width).ceil() as usize;
        let edges: Vec<f64> = (0..n_edges).map(|i| (i as f64 - 1.0) * width).collect();
        let n_bins = n_edges - 1;

        // Histogram counts; values outside the edge range are not counted.
        let mut counts = vec![0usize; n_bins];
        for &v in &clean {
            if v < edges[0] || v > edges[n_bins] {
                continue;
            }
            let idx = (((v - edges[0]) / width) as usize).min(n_bins - 1);
            counts[idx] += 1;
        }

        // Cumulative distribution over the trailing bin edges. Integer
        // accumulation keeps the final value exactly 1.0 when every
        // sample landed in a bin.
        let mut cum = 0usize;
        let mut cdf = Vec::with_capacity(n_bins);
        for &c in &counts {
            cum += c;
            cdf.push(cum as f64 / n as f64);
        }
        let flow_coords = &edges[1..];

        let mode = if extrapolate {
            FillMode::Linear
        } else {
            FillMode::Fail
        };

        let interp = match direction {
            Direction::ToProbability => make_interpolator(flow_coords, &cdf, mode, None)?,
            Direction::ToFlow => {
                // The CDF is flat across empty bins; keep the first flow
                // coordinate reaching each probability so the inverse is
                // strictly increasing.
                let mut xs = Vec::with_capacity(n_bins);
                let mut ys = Vec::with_capacity(n_bins);
                for (&p, &f) in cdf.iter().zip(flow_coords) {
                    if xs.last().is_none_or(|&last| p > last) {
                        xs.push(p);
                        ys.push(f);
                    }
                }
                make_interpolator(&xs, &ys, mode, None)?
            }
        };

        Ok(Self {
            interp,
            direction,
            bin_width: width,
        })
    }

    /// Mapper for a sample with no spread: one bin centred on the value,
    /// so `to_probability(value)` is 0.5 and the round trip is exact.
    fn degenerate(value: f64, direction: Direction, extrapolate: bool) -> Result<Self, BiasError> {
        let half = DEGENERATE_BIN_WIDTH / 2.0;
        let mode = if extrapolate {
            FillMode::Linear
        } else {
            FillMode::Fail
        };
        let interp = match direction {
            Direction::ToProbability => {
                make_interpolator(&[value - half, value + half], &[0.0, 1.0], mode, None)?
            }
            Direction::ToFlow => {
                make_interpolator(&[0.0, 1.0], &[value - half, value + half], mode, None)?
            }
        };
        Ok(Self {
            interp,
            direction,
            bin_width: DEGENERATE_BIN_WIDTH,
        })
    }

    /// The mapping direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Histogram bin width, the discretisation error bound of a
    /// round trip through both directions.
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Evaluates the mapper at `x`.
    ///
    /// For [`Direction::ToProbability`] the result is clamped to [0, 1]
    /// whatever the extrapolation mode; probabilities outside that range
    /// are meaningless. [`Direction::ToFlow`] output is not clamped.
    ///
    /// # Errors
    ///
    /// Returns [`BiasError::OutOfDomain`] outside the sample's range when
    /// built without extrapolation.
    pub fn eval(&self, x: f64) -> Result<f64, BiasError> {
        let y = self.interp.eval(x)?;
        Ok(match self.direction {
            Direction::ToProbability => y.clamp(0.0, 1.0),
            Direction::ToFlow => y,
        })
    }

    /// Evaluates the mapper at every value of `xs`.
    pub fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, BiasError> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decade() -> Vec<f64> {
        (1..=10).map(|i| i as f64).collect()
    }

    #[test]
    fn empty_sample_rejected() {
        assert!(matches!(
            CdfMapper::build(&[], Direction::ToProbability, false),
            Err(BiasError::EmptySample)
        ));
        assert!(matches!(
            CdfMapper::build(&[f64::NAN], Direction::ToProbability, false),
            Err(BiasError::EmptySample)
        ));
    }

    #[test]
    fn probability_in_unit_interval() {
        let mapper = CdfMapper::build(&decade(), Direction::ToProbability, true).unwrap();
        for v in [-1e6, -5.0, 0.0, 1.0, 5.5, 10.0, 50.0, 1e6] {
            let p = mapper.eval(v).unwrap();
            assert!((0.0..=1.0).contains(&p), "p({v}) = {p} outside [0, 1]");
        }
    }

    #[test]
    fn probability_monotone_over_sample_range() {
        let mapper = CdfMapper::build(&decade(), Direction::ToProbability, true).unwrap();
        let mut prev = -1.0;
        for i in 0..=100 {
            let v = 10.0 * i as f64 / 100.0;
            let p = mapper.eval(v).unwrap();
            assert!(p >= prev, "CDF not monotone at {v}: {p} < {prev}");
            prev = p;
        }
    }

    #[test]
    fn median_probability_near_half() {
        let mapper = CdfMapper::build(&decade(), Direction::ToProbability, true).unwrap();
        let p = mapper.eval(5.5).unwrap();
        assert!((p - 0.5).abs() < 0.1, "p(median) = {p}, expected ~0.5");
    }

    #[test]
    fn round_trip_within_one_bin_width() {
        let sample = decade();
        let to_prob = CdfMapper::build(&sample, Direction::ToProbability, true).unwrap();
        let to_flow = CdfMapper::build(&sample, Direction::ToFlow, true).unwrap();
        for v in [2.0, 3.5, 5.5, 7.0, 9.0] {
            let p = to_prob.eval(v).unwrap();
            let back = to_flow.eval(p).unwrap();
            assert!(
                (back - v).abs() <= to_prob.bin_width(),
                "round trip of {v} gave {back}, bin width {}",
                to_prob.bin_width()
            );
        }
    }

    #[test]
    fn strict_mapper_fails_outside_range() {
        let mapper = CdfMapper::build(&decade(), Direction::ToProbability, false).unwrap();
        assert!(matches!(
            mapper.eval(1e6),
            Err(BiasError::OutOfDomain { .. })
        ));
        assert!(mapper.eval(-50.0).is_err());
        // interior still fine
        assert!(mapper.eval(5.0).is_ok());
    }

    #[test]
    fn to_flow_unclamped_when_extrapolating() {
        let to_flow = CdfMapper::build(&decade(), Direction::ToFlow, true).unwrap();
        // probability 1.0 sits at the top of the histogram; linear
        // extension past it may exceed the sample maximum
        let top = to_flow.eval(1.0).unwrap();
        assert!(top >= 10.0, "inverse CDF at p=1 should reach the max, got {top}");
    }

    #[test]
    fn zero_variance_sample_degrades_gracefully() {
        let sample = vec![5.0; 30];
        let to_prob = CdfMapper::build(&sample, Direction::ToProbability, true).unwrap();
        let to_flow = CdfMapper::build(&sample, Direction::ToFlow, true).unwrap();
        // the value sits at the centre of the stand-in bin, never on an
        // edge where the CDF would read 0
        let p = to_prob.eval(5.0).unwrap();
        assert!((p - 0.5).abs() < 1e-12, "p(constant) = {p}, expected 0.5");
        let back = to_flow.eval(p).unwrap();
        assert!(
            (back - 5.0).abs() < 1e-12,
            "constant sample must round-trip to itself, gave {back}"
        );
    }

    #[test]
    fn zero_variance_sample_usable_without_extrapolation() {
        let sample = vec![5.0; 30];
        let strict = CdfMapper::build(&sample, Direction::ToProbability, false).unwrap();
        assert!(strict.eval(5.0).is_ok());
        assert!(strict.eval(100.0).is_err());
    }

    #[test]
    fn nan_values_dropped() {
        let mut sample = decade();
        sample.push(f64::NAN);
        let a = CdfMapper::build(&sample, Direction::ToProbability, true).unwrap();
        let b = CdfMapper::build(&decade(), Direction::ToProbability, true).unwrap();
        for v in [1.0, 5.0, 9.5] {
            assert_eq!(a.eval(v).unwrap(), b.eval(v).unwrap());
        }
    }

    #[test]
    fn direction_accessor() {
        let m = CdfMapper::build(&decade(), Direction::ToFlow, true).unwrap();
        assert_eq!(m.direction(), Direction::ToFlow);
    }
}
