//! Ordinary least-squares fit of a straight line.

use crate::error::Shortfall;

/// A fitted line `y = slope * x + intercept` and its goodness of fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Elastic modulus when fitting stress against strain.
    pub slope: f64,
    /// Stress-axis offset.
    pub intercept: f64,
    /// Coefficient of determination, the squared Pearson correlation.
    pub r_squared: f64,
}

impl LinearFit {
    /// Fitted y at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The x at which the fitted line reaches `y`.
    ///
    /// Not finite when the slope is zero.
    pub fn solve_for_x(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }
}

/// Fit `ys` against `xs` by minimizing the sum of squared residuals.
///
/// slope = Sxy / Sxx, intercept = ȳ − slope·x̄ and r = Sxy / √(Sxx·Syy),
/// with r taken as 0 when `ys` is constant.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Result<LinearFit, Shortfall> {
    debug_assert_eq!(xs.len(), ys.len());

    let n = xs.len();
    if n < 2 {
        return Err(Shortfall::TooFewSamples { count: n });
    }
    if xs.iter().all(|&x| x == xs[0]) {
        return Err(Shortfall::ConstantStrain);
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let (sxx, syy, sxy) = xs.iter().zip(ys).fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (&x, &y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
    });

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let r_den = (sxx * syy).sqrt();
    let r = if r_den == 0.0 {
        0.0
    } else {
        (sxy / r_den).clamp(-1.0, 1.0)
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared: r * r,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn exact_line_has_unit_r_squared() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x - 1.0).collect();

        let fit = linear_regression(&xs, &ys).unwrap();

        assert_relative_eq!(fit.slope, 3.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, -1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn noisy_points_match_hand_computed_fit() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [1.5, 3.5, 4.0];

        let fit = linear_regression(&xs, &ys).unwrap();

        // x̄ = 2, ȳ = 3, Sxx = 2, Sxy = 2.5, Syy = 3.5
        assert_relative_eq!(fit.slope, 1.25, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 0.5, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared, 6.25 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_y_gives_zero_slope_and_zero_r_squared() {
        let fit = linear_regression(&[0.0, 1.0, 2.0], &[5.0, 5.0, 5.0]).unwrap();

        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 5.0);
        assert_eq!(fit.r_squared, 0.0);
        assert!(!fit.solve_for_x(6.0).is_finite());
    }

    #[test]
    fn rejects_single_point() {
        assert_eq!(
            linear_regression(&[1.0], &[2.0]),
            Err(Shortfall::TooFewSamples { count: 1 })
        );
    }

    #[test]
    fn rejects_constant_x() {
        assert_eq!(
            linear_regression(&[0.5, 0.5, 0.5], &[1.0, 2.0, 3.0]),
            Err(Shortfall::ConstantStrain)
        );
    }

    #[test]
    fn solve_for_x_inverts_predict() {
        let fit = LinearFit {
            slope: 200.0,
            intercept: 0.5,
            r_squared: 1.0,
        };

        assert_relative_eq!(fit.solve_for_x(fit.predict(0.02)), 0.02, epsilon = 1e-12);
    }
}
