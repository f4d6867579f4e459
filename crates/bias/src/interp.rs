//! One-dimensional linear interpolation with configurable extrapolation.

use crate::error::BiasError;

/// Behaviour outside the domain of an [`Interp1d`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Error on any query outside the domain.
    #[default]
    Fail,
    /// Clamp to the nearest endpoint value.
    Nearest,
    /// Requires a fill value supplied at construction.
    Const,
    /// Extend the first/last segment's slope.
    Linear,
    /// Fill with the mean of the y values.
    Average,
    /// Fill with the maximum of the y values.
    Max,
    /// Fill with the minimum of the y values.
    Min,
}

/// Resolved out-of-domain behaviour, computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Fill {
    Fail,
    Nearest,
    Linear,
    Value(f64),
}

/// A piecewise-linear interpolant over strictly increasing knots.
///
/// Inside the domain evaluation is ordinary linear interpolation; outside
/// it the behaviour is fixed by the [`FillMode`] chosen at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Interp1d {
    xs: Vec<f64>,
    ys: Vec<f64>,
    fill: Fill,
}

/// Builds an interpolant over `(x, y)` knots.
///
/// `x` must be strictly increasing with at least 2 points. `fill_value`
/// is consulted only by [`FillMode::Const`].
///
/// # Errors
///
/// Returns [`BiasError::InvalidArgument`] if the slices differ in length,
/// have fewer than 2 points, `x` is not strictly increasing, any knot is
/// non-finite, or `Const` mode is requested without a fill value.
pub fn make_interpolator(
    x: &[f64],
    y: &[f64],
    mode: FillMode,
    fill_value: Option<f64>,
) -> Result<Interp1d, BiasError> {
    if x.len() != y.len() {
        return Err(BiasError::InvalidArgument {
            reason: format!("x has {} points but y has {}", x.len(), y.len()),
        });
    }
    if x.len() < 2 {
        return Err(BiasError::InvalidArgument {
            reason: format!("interpolation needs at least 2 points, got {}", x.len()),
        });
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(BiasError::InvalidArgument {
            reason: "interpolation knots must be finite".to_string(),
        });
    }
    for pair in x.windows(2) {
        if pair[1] <= pair[0] {
            return Err(BiasError::InvalidArgument {
                reason: format!("x must be strictly increasing ({} then {})", pair[0], pair[1]),
            });
        }
    }

    let fill = match mode {
        FillMode::Fail => Fill::Fail,
        FillMode::Nearest => Fill::Nearest,
        FillMode::Linear => Fill::Linear,
        FillMode::Const => match fill_value {
            Some(v) => Fill::Value(v),
            None => {
                return Err(BiasError::InvalidArgument {
                    reason: "const mode requires a fill value".to_string(),
                })
            }
        },
        FillMode::Average => Fill::Value(y.iter().sum::<f64>() / y.len() as f64),
        FillMode::Max => Fill::Value(y.iter().copied().fold(f64::NEG_INFINITY, f64::max)),
        FillMode::Min => Fill::Value(y.iter().copied().fold(f64::INFINITY, f64::min)),
    };

    Ok(Interp1d {
        xs: x.to_vec(),
        ys: y.to_vec(),
        fill,
    })
}

impl Interp1d {
    /// Lower end of the domain.
    pub fn min_x(&self) -> f64 {
        self.xs[0]
    }

    /// Upper end of the domain.
    pub fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`BiasError::OutOfDomain`] for a query outside the domain
    /// when the interpolant was built with [`FillMode::Fail`].
    pub fn eval(&self, x: f64) -> Result<f64, BiasError> {
        let n = self.xs.len();

        if x < self.xs[0] {
            return match self.fill {
                Fill::Fail => Err(self.out_of_domain(x)),
                Fill::Nearest => Ok(self.ys[0]),
                Fill::Value(v) => Ok(v),
                Fill::Linear => Ok(segment(
                    self.xs[0], self.ys[0], self.xs[1], self.ys[1], x,
                )),
            };
        }
        if x > self.xs[n - 1] {
            return match self.fill {
                Fill::Fail => Err(self.out_of_domain(x)),
                Fill::Nearest => Ok(self.ys[n - 1]),
                Fill::Value(v) => Ok(v),
                Fill::Linear => Ok(segment(
                    self.xs[n - 2],
                    self.ys[n - 2],
                    self.xs[n - 1],
                    self.ys[n - 1],
                    x,
                )),
            };
        }

        // first knot >= x; x is within [xs[0], xs[n-1]] here
        let hi = self.xs.partition_point(|&k| k < x);
        if (self.xs[hi] - x).abs() == 0.0 {
            return Ok(self.ys[hi]);
        }
        Ok(segment(
            self.xs[hi - 1],
            self.ys[hi - 1],
            self.xs[hi],
            self.ys[hi],
            x,
        ))
    }

    /// Evaluates the interpolant at every value of `xs`.
    pub fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, BiasError> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    fn out_of_domain(&self, x: f64) -> BiasError {
        BiasError::OutOfDomain {
            value: x,
            min: self.min_x(),
            max: self.max_x(),
        }
    }
}

/// Linear interpolation through two points.
fn segment(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn knots() -> (Vec<f64>, Vec<f64>) {
        (vec![0.0, 1.0, 2.0, 4.0], vec![0.0, 10.0, 20.0, 40.0])
    }

    #[test]
    fn interior_linear() {
        let (x, y) = knots();
        let f = make_interpolator(&x, &y, FillMode::Fail, None).unwrap();
        assert_relative_eq!(f.eval(0.5).unwrap(), 5.0);
        assert_relative_eq!(f.eval(3.0).unwrap(), 30.0);
    }

    #[test]
    fn exact_knot_hits() {
        let (x, y) = knots();
        let f = make_interpolator(&x, &y, FillMode::Fail, None).unwrap();
        for (&xi, &yi) in x.iter().zip(&y) {
            assert_relative_eq!(f.eval(xi).unwrap(), yi);
        }
    }

    #[test]
    fn fail_mode_errors_outside_domain() {
        let (x, y) = knots();
        let f = make_interpolator(&x, &y, FillMode::Fail, None).unwrap();
        assert!(matches!(
            f.eval(-0.1),
            Err(BiasError::OutOfDomain { min, max, .. }) if min == 0.0 && max == 4.0
        ));
        assert!(f.eval(4.1).is_err());
    }

    #[test]
    fn nearest_clamps() {
        let (x, y) = knots();
        let f = make_interpolator(&x, &y, FillMode::Nearest, None).unwrap();
        assert_relative_eq!(f.eval(-5.0).unwrap(), 0.0);
        assert_relative_eq!(f.eval(99.0).unwrap(), 40.0);
    }

    #[test]
    fn linear_extends_end_slopes() {
        let (x, y) = knots();
        let f = make_interpolator(&x, &y, FillMode::Linear, None).unwrap();
        assert_relative_eq!(f.eval(-1.0).unwrap(), -10.0);
        assert_relative_eq!(f.eval(5.0).unwrap(), 50.0);
    }

    #[test]
    fn const_uses_fill_value() {
        let (x, y) = knots();
        let f = make_interpolator(&x, &y, FillMode::Const, Some(-1.0)).unwrap();
        assert_relative_eq!(f.eval(-2.0).unwrap(), -1.0);
        assert_relative_eq!(f.eval(100.0).unwrap(), -1.0);
        // interior unaffected
        assert_relative_eq!(f.eval(1.0).unwrap(), 10.0);
    }

    #[test]
    fn const_without_fill_value_rejected() {
        let (x, y) = knots();
        let result = make_interpolator(&x, &y, FillMode::Const, None);
        assert!(matches!(result, Err(BiasError::InvalidArgument { .. })));
    }

    #[test]
    fn average_max_min_fills() {
        let (x, y) = knots();
        let avg = make_interpolator(&x, &y, FillMode::Average, None).unwrap();
        assert_relative_eq!(avg.eval(-1.0).unwrap(), 17.5);
        let max = make_interpolator(&x, &y, FillMode::Max, None).unwrap();
        assert_relative_eq!(max.eval(-1.0).unwrap(), 40.0);
        let min = make_interpolator(&x, &y, FillMode::Min, None).unwrap();
        assert_relative_eq!(min.eval(99.0).unwrap(), 0.0);
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(make_interpolator(&[0.0, 1.0], &[0.0], FillMode::Fail, None).is_err());
    }

    #[test]
    fn rejects_single_point() {
        assert!(make_interpolator(&[0.0], &[0.0], FillMode::Fail, None).is_err());
    }

    #[test]
    fn rejects_unsorted_x() {
        assert!(make_interpolator(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0], FillMode::Fail, None).is_err());
        // ties rejected too
        assert!(make_interpolator(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0], FillMode::Fail, None).is_err());
    }

    #[test]
    fn rejects_non_finite_knots() {
        assert!(make_interpolator(&[0.0, f64::NAN], &[0.0, 1.0], FillMode::Fail, None).is_err());
    }

    #[test]
    fn eval_many_matches_eval() {
        let (x, y) = knots();
        let f = make_interpolator(&x, &y, FillMode::Nearest, None).unwrap();
        let queries = [-1.0, 0.5, 2.0, 10.0];
        let batch = f.eval_many(&queries).unwrap();
        for (&q, &b) in queries.iter().zip(&batch) {
            assert_relative_eq!(f.eval(q).unwrap(), b);
        }
    }
}
