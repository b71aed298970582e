use thiserror::Error;

/// Fatal conditions raised while estimating properties or laying out the
/// chart.  Malformed input lines are not errors; the loader drops them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("no valid strain/stress samples were loaded")]
    EmptyInput,

    #[error("cannot fit the pre-peak region: {0}")]
    InsufficientData(Shortfall),

    #[error("cannot extend the fitted line to the UTS: {0}")]
    DegenerateFit(DegenerateReason),
}

/// Why the pre-peak region cannot be regressed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Shortfall {
    #[error("the first sample is the peak, so the pre-peak region is empty")]
    PeakAtFirstSample,

    #[error("only {count} sample(s) precede the peak, at least 2 are required")]
    TooFewSamples { count: usize },

    #[error("strain is constant over the pre-peak region")]
    ConstantStrain,
}

/// Why the fitted line has no usable intersection with the UTS line.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DegenerateReason {
    #[error("fitted slope is zero")]
    ZeroSlope,

    #[error("intersection strain {0} is negative")]
    NegativeBound(f64),

    #[error("intersection strain is not finite")]
    NonFiniteBound,

    #[error("axis range overflows: {0}")]
    NonFiniteAxis(&'static str),
}
