//! Least-squares fits: ordinary linear regression and polynomial fitting
//! via the normal equations.

use nalgebra::{DMatrix, DVector};

/// Result of an ordinary least squares line fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares slope/intercept over paired samples.
///
/// When the denominator `n*sum(x^2) - sum(x)^2` is numerically degenerate
/// (all x equal, or fewer than two points) the fit falls back to slope 0
/// and intercept mean(y), so callers always get a drawable line.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> LinearFit {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return LinearFit { slope: 0.0, intercept: 0.0 };
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_xy = 0.0;
    for i in 0..n {
        sum_x += xs[i];
        sum_y += ys[i];
        sum_xx += xs[i] * xs[i];
        sum_xy += xs[i] * ys[i];
    }

    let denom = n as f64 * sum_xx - sum_x * sum_x;
    if denom.abs() <= 1e-12 {
        return LinearFit { slope: 0.0, intercept: sum_y / n as f64 };
    }

    let slope = (n as f64 * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n as f64;
    LinearFit { slope, intercept }
}

/// Fit a polynomial of the given degree, returning coefficients ordered
/// highest-degree-first (`degree + 1` entries).
///
/// Builds the Vandermonde design matrix and solves the normal equations
/// `(A^T A) c = A^T y` with an LU decomposition (partial pivoting). Fewer
/// samples than `degree + 1`, or a singular system, yields an all-zero
/// coefficient vector.
pub fn poly_fit(xs: &[f64], ys: &[f64], degree: usize) -> Vec<f64> {
    let terms = degree + 1;
    let n = xs.len().min(ys.len());
    if n < terms {
        return vec![0.0; terms];
    }

    // Vandermonde matrix, column j = x^(degree - j).
    let design = DMatrix::from_fn(n, terms, |row, col| {
        xs[row].powi((degree - col) as i32)
    });
    let rhs = DVector::from_fn(n, |row, _| ys[row]);

    let normal = design.transpose() * &design;
    let projected = design.transpose() * rhs;
    match normal.lu().solve(&projected) {
        Some(solution) => solution.iter().copied().collect(),
        None => vec![0.0; terms],
    }
}

/// Evaluate a highest-degree-first coefficient vector at `x` using
/// Horner's method.
pub fn poly_eval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}
