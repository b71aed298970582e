//! Mechanical properties of a tensile curve.
//!
//! The elastic region is taken to be every sample before the first
//! occurrence of the peak stress, and the modulus is the slope of a straight
//! line fitted to that region.

pub mod regression;

use std::fmt;

use crate::data::model::SampleSeries;
use crate::error::{AnalysisError, Shortfall};

pub use regression::{LinearFit, linear_regression};

// ---------------------------------------------------------------------------
// Peak stress
// ---------------------------------------------------------------------------

/// Ultimate tensile strength: the largest stress value.
pub fn compute_uts(stress: &[f64]) -> Result<f64, AnalysisError> {
    peak_index(stress)
        .map(|i| stress[i])
        .ok_or(AnalysisError::EmptyInput)
}

/// Index of the first occurrence of the maximum stress.
///
/// Later samples that tie with the maximum never move the peak.
pub fn peak_index(stress: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &value) in stress.iter().enumerate() {
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

// ---------------------------------------------------------------------------
// Elastic region
// ---------------------------------------------------------------------------

/// Fit stress against strain over the samples strictly before the peak.
pub fn detect_linear_region(strain: &[f64], stress: &[f64]) -> Result<LinearFit, AnalysisError> {
    debug_assert_eq!(strain.len(), stress.len());

    let uts_index = peak_index(stress).ok_or(AnalysisError::EmptyInput)?;
    if uts_index == 0 {
        return Err(AnalysisError::InsufficientData(Shortfall::PeakAtFirstSample));
    }

    let fit = linear_regression(&strain[..uts_index], &stress[..uts_index])
        .map_err(AnalysisError::InsufficientData)?;

    log::debug!(
        "Fitted {uts_index} pre-peak samples: slope={}, intercept={}, r²={}",
        fit.slope,
        fit.intercept,
        fit.r_squared
    );
    Ok(fit)
}

// ---------------------------------------------------------------------------
// Combined result
// ---------------------------------------------------------------------------

/// Everything the estimator derives from one curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicalProperties {
    /// Ultimate tensile strength (peak stress).
    pub uts: f64,
    /// Fit of the pre-peak region; `fit.slope` is the elastic modulus.
    pub fit: LinearFit,
}

impl MechanicalProperties {
    pub fn estimate(series: &SampleSeries) -> Result<Self, AnalysisError> {
        let uts = compute_uts(series.stress())?;
        let fit = detect_linear_region(series.strain(), series.stress())?;
        Ok(Self { uts, fit })
    }

    /// Elastic (Young's) modulus.
    pub fn elastic_modulus(&self) -> f64 {
        self.fit.slope
    }
}

/// The three console report lines.
impl fmt::Display for MechanicalProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ultimate Tensile Strength (UTS): {:.3} GPa", self.uts)?;
        writeln!(
            f,
            "Elastic Modulus (Young's Modulus): {:.3} GPa",
            self.elastic_modulus()
        )?;
        write!(f, "Coefficient of Determination (R²): {:.3}", self.fit.r_squared)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn uts_is_maximum_stress() {
        assert_eq!(compute_uts(&[1.0, 7.5, -2.0, 3.0]), Ok(7.5));
        assert_eq!(compute_uts(&[-3.0, -1.0]), Ok(-1.0));
    }

    #[test]
    fn uts_does_not_depend_on_order() {
        let stress = [0.3, 2.2, 1.1, 4.4, 0.0];
        let mut reversed = stress;
        reversed.reverse();

        assert_eq!(compute_uts(&stress), compute_uts(&reversed));
    }

    #[test]
    fn uts_of_empty_input_is_an_error() {
        assert_eq!(compute_uts(&[]), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn peak_index_prefers_first_tie() {
        assert_eq!(peak_index(&[1.0, 5.0, 2.0, 5.0]), Some(1));
        assert_eq!(peak_index(&[]), None);
    }

    #[test]
    fn perfectly_linear_pre_peak_region() {
        let strain = [0.0, 1.0, 2.0, 3.0, 4.0];
        let stress = [0.0, 2.0, 4.0, 6.0, 100.0];

        let fit = detect_linear_region(&strain, &stress).unwrap();

        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn tied_peak_uses_earlier_index() {
        // With the first peak (index 3) the region is the exact line y = x.
        // Using the second peak would pull the 9.0 sample into the fit.
        let strain = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let stress = [0.0, 1.0, 2.0, 9.0, 3.0, 9.0];

        let fit = detect_linear_region(&strain, &stress).unwrap();

        assert_relative_eq!(fit.slope, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn peak_at_first_sample_is_insufficient() {
        assert_eq!(
            detect_linear_region(&[0.0, 0.1, 0.2], &[9.0, 1.0, 2.0]),
            Err(AnalysisError::InsufficientData(Shortfall::PeakAtFirstSample))
        );
    }

    #[test]
    fn single_pre_peak_sample_is_insufficient() {
        assert_eq!(
            detect_linear_region(&[0.0, 0.1], &[1.0, 2.0]),
            Err(AnalysisError::InsufficientData(Shortfall::TooFewSamples { count: 1 }))
        );
    }

    #[test]
    fn constant_pre_peak_strain_is_insufficient() {
        assert_eq!(
            detect_linear_region(&[0.1, 0.1, 0.2], &[1.0, 2.0, 3.0]),
            Err(AnalysisError::InsufficientData(Shortfall::ConstantStrain))
        );
    }

    #[test]
    fn empty_input_is_reported_before_fitting() {
        assert_eq!(detect_linear_region(&[], &[]), Err(AnalysisError::EmptyInput));
        assert_eq!(
            MechanicalProperties::estimate(&SampleSeries::new()),
            Err(AnalysisError::EmptyInput)
        );
    }

    #[test]
    fn four_sample_scenario() {
        let series =
            SampleSeries::from_pairs([(0.0, 0.0), (0.01, 2.0), (0.02, 4.0), (0.03, 3.0)]);

        let props = MechanicalProperties::estimate(&series).unwrap();

        assert_eq!(props.uts, 4.0);
        assert_relative_eq!(props.elastic_modulus(), 200.0, epsilon = 1e-9);
        assert_relative_eq!(props.fit.intercept, 0.0, epsilon = 1e-9);
        assert_relative_eq!(props.fit.r_squared, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn report_lines_use_three_decimals() {
        let props = MechanicalProperties {
            uts: 4.0,
            fit: LinearFit {
                slope: 200.0,
                intercept: 0.0,
                r_squared: 0.99949,
            },
        };

        assert_eq!(
            props.to_string(),
            "Ultimate Tensile Strength (UTS): 4.000 GPa\n\
             Elastic Modulus (Young's Modulus): 200.000 GPa\n\
             Coefficient of Determination (R²): 0.999"
        );
    }
}
