// ---------------------------------------------------------------------------
// SampleSeries – the loaded strain/stress curve
// ---------------------------------------------------------------------------

/// Paired strain/stress samples in loading order.
///
/// Samples can only be appended as pairs, so `strain` and `stress` always
/// have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    strain: Vec<f64>,
    stress: Vec<f64>,
}

impl SampleSeries {
    /// An empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from `(strain, stress)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut series = Self::new();
        for (strain, stress) in pairs {
            series.push(strain, stress);
        }
        series
    }

    /// Append one sample.
    pub fn push(&mut self, strain: f64, stress: f64) {
        self.strain.push(strain);
        self.stress.push(stress);
    }

    /// Strain values (x).
    pub fn strain(&self) -> &[f64] {
        &self.strain
    }

    /// Stress values (y) – same length as `strain`.
    pub fn stress(&self) -> &[f64] {
        &self.stress
    }

    /// Iterate over `(strain, stress)` pairs in input order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.strain.iter().copied().zip(self.stress.iter().copied())
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.strain.len()
    }

    /// Whether no sample was loaded.
    pub fn is_empty(&self) -> bool {
        self.strain.is_empty()
    }

    /// Smallest and largest stress, `None` when empty.
    pub fn stress_bounds(&self) -> Option<(f64, f64)> {
        bounds(&self.stress)
    }

    /// Smallest and largest strain, `None` when empty.
    pub fn strain_bounds(&self) -> Option<(f64, f64)> {
        bounds(&self.strain)
    }
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}
