//! Single-feature ordinary least squares.
//!
//! The slope and intercept come from `linreg`. When every x is the same the
//! least squares line is not unique; we pin that case to a flat line through
//! the mean of y so a one-year selection still draws something sensible.

use linreg::linear_regression;

use crate::error::FitError;

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination on the fitted data.
    pub r_squared: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `ys` against `xs`.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Result<LinearFit, FitError> {
    if xs.is_empty() {
        return Err(FitError::Regression("no data points".to_string()));
    }
    if xs.len() != ys.len() {
        return Err(FitError::Regression(format!(
            "{} x values but {} y values",
            xs.len(),
            ys.len()
        )));
    }

    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(FitError::Regression("values must be finite numbers".to_string()));
    }

    let (slope, intercept) = if xs.iter().all(|&x| x == xs[0]) {
        (0.0, mean(ys))
    } else {
        linear_regression::<f64, f64, f64>(xs, ys).map_err(|err| {
            log::debug!("linreg rejected {} points: {err:?}", xs.len());
            FitError::Regression(format!("no line fits the {} selected points", xs.len()))
        })?
    };

    let mut fit = LinearFit {
        slope,
        intercept,
        r_squared: 0.0,
    };
    fit.r_squared = r_squared(&fit, xs, ys);
    Ok(fit)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// `1 - SS_res / SS_tot`, or 1.0 when y has no variance.
fn r_squared(fit: &LinearFit, xs: &[f64], ys: &[f64]) -> f64 {
    let y_mean = mean(ys);
    let ss_tot: f64 = ys.iter().map(|y| (y - y_mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return 1.0;
    }
    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (y - fit.predict(x)).powi(2))
        .sum();
    1.0 - ss_res / ss_tot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_exact_line() {
        let fit = fit_line(&[2000.0, 2001.0, 2002.0], &[15.0, 16.0, 17.0]).unwrap();
        assert_eq!(fit.slope, 1.0);
        assert_eq!(fit.intercept, -1985.0);
        assert_eq!(fit.predict(2001.0), 16.0);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fits_noisy_points() {
        // y = 2 + 3x with symmetric noise on the ends
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [2.5, 5.0, 8.0, 10.5];
        let fit = fit_line(&xs, &ys).unwrap();
        assert!((fit.slope - 2.7).abs() < 1e-10);
        assert!((fit.intercept - 2.45).abs() < 1e-10);
        assert!(fit.r_squared > 0.99 && fit.r_squared < 1.0);
    }

    #[test]
    fn single_point_is_flat() {
        let fit = fit_line(&[2000.0], &[15.0]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.predict(2000.0), 15.0);
    }

    #[test]
    fn repeated_x_predicts_mean() {
        let fit = fit_line(&[2000.0, 2000.0], &[10.0, 20.0]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.predict(2000.0), 15.0);
        assert_eq!(fit.r_squared, 0.0);
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = fit_line(&[2000.0, 2001.0], &[f64::NAN, 16.0]).unwrap_err();
        assert_eq!(err.to_string(), "Regression failed: values must be finite numbers");
        assert!(fit_line(&[2000.0, 2001.0], &[15.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn rejects_empty_and_mismatched() {
        assert!(matches!(fit_line(&[], &[]), Err(FitError::Regression(_))));
        assert!(matches!(
            fit_line(&[1.0, 2.0], &[1.0]),
            Err(FitError::Regression(_))
        ));
    }
}
