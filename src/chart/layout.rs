use std::ops::Range;

use crate::analysis::MechanicalProperties;
use crate::data::model::SampleSeries;
use crate::error::{AnalysisError, DegenerateReason};

/// Figure size in inches.
pub const FIGURE_INCHES: (f64, f64) = (8.0, 6.0);

/// Output resolution.
pub const DPI: f64 = 300.0;

/// Number of points sampled along the extended elastic fit.
pub const FIT_LINE_POINTS: usize = 100;

/// Image size in pixels.
pub fn pixel_size() -> (u32, u32) {
    (
        (FIGURE_INCHES.0 * DPI).round() as u32,
        (FIGURE_INCHES.1 * DPI).round() as u32,
    )
}

// ---------------------------------------------------------------------------
// Annotation – a boxed block of text anchored in data coordinates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Bottom-left corner of the text box, in (strain, stress).
    pub anchor: (f64, f64),
    pub lines: Vec<String>,
}

// ---------------------------------------------------------------------------
// ChartLayout – everything the renderer draws, in data coordinates
// ---------------------------------------------------------------------------

/// Geometry and labels of the stress-strain chart, independent of any
/// drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Raw samples in input order.
    pub curve: Vec<(f64, f64)>,
    /// Elastic fit sampled from zero strain up to `fit_bound`.
    pub fit_line: Vec<(f64, f64)>,
    /// Strain at which the fitted line reaches the maximum stress.
    pub fit_bound: f64,
    /// Height of the horizontal UTS line.
    pub uts: f64,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub equation: Annotation,
    pub uts_label: Annotation,
}

impl ChartLayout {
    /// Lay out the chart, failing when the fitted line cannot be extended
    /// to the maximum stress.
    pub fn new(series: &SampleSeries, props: &MechanicalProperties) -> Result<Self, AnalysisError> {
        let (min_stress, max_stress) = series.stress_bounds().ok_or(AnalysisError::EmptyInput)?;
        let (min_strain, max_strain) = series.strain_bounds().ok_or(AnalysisError::EmptyInput)?;

        let fit = &props.fit;
        let fit_bound = fit_bound(props, max_stress)?;

        let fit_line = linspace(0.0, fit_bound, FIT_LINE_POINTS)
            .map(|x| (x, fit.predict(x)))
            .collect();

        let x_range = padded(min_strain.min(0.0), max_strain.max(fit_bound), 0.05);
        let y_range = ordered(min_stress * 1.1, max_stress * 1.2);
        check_axis("strain", &x_range)?;
        check_axis("stress", &y_range)?;

        let equation = Annotation {
            anchor: (0.6 * fit_bound, 0.8 * max_stress),
            lines: vec![
                format!("y = {:.3}x + {:.3}", fit.slope, fit.intercept),
                format!("R² = {:.3}", fit.r_squared),
            ],
        };
        let uts_label = Annotation {
            anchor: (0.05, props.uts * 1.05),
            lines: vec![uts_caption(props.uts)],
        };

        Ok(Self {
            curve: series.points().collect(),
            fit_line,
            fit_bound,
            uts: props.uts,
            x_range,
            y_range,
            equation,
            uts_label,
        })
    }
}

/// Legend and annotation text for the UTS line.
pub fn uts_caption(uts: f64) -> String {
    format!("UTS = {uts:.3} GPa")
}

/// Solve `max_stress = slope * strain + intercept` for strain.
fn fit_bound(props: &MechanicalProperties, max_stress: f64) -> Result<f64, AnalysisError> {
    if props.fit.slope == 0.0 {
        return Err(AnalysisError::DegenerateFit(DegenerateReason::ZeroSlope));
    }
    let bound = props.fit.solve_for_x(max_stress);
    if !bound.is_finite() {
        return Err(AnalysisError::DegenerateFit(DegenerateReason::NonFiniteBound));
    }
    if bound < 0.0 {
        return Err(AnalysisError::DegenerateFit(DegenerateReason::NegativeBound(bound)));
    }
    Ok(bound)
}

/// Both limits and the span must be finite for the backend to place ticks.
fn check_axis(axis: &'static str, range: &Range<f64>) -> Result<(), AnalysisError> {
    if range.start.is_finite() && range.end.is_finite() && (range.end - range.start).is_finite() {
        Ok(())
    } else {
        Err(AnalysisError::DegenerateFit(DegenerateReason::NonFiniteAxis(axis)))
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if i + 1 == n { end } else { start + step * i as f64 })
}

/// Widen `[lo, hi]` by `fraction` of its span on each side.
fn padded(lo: f64, hi: f64, fraction: f64) -> Range<f64> {
    let span = hi - lo;
    let pad = if span > 0.0 { span * fraction } else { 1.0 };
    lo - pad..hi + pad
}

/// Axis range from two limits given in either order.
fn ordered(a: f64, b: f64) -> Range<f64> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi > lo {
        lo..hi
    } else {
        padded(lo, hi, 0.05)
    }
}
