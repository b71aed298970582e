use std::path::PathBuf;

use crate::chart::render::ChartStyle;

/// Default input: LAMMPS `fix print` output of a Mg–1%Ca tensile run.
pub const DEFAULT_INPUT: &str = "CaMg_stress_strain.txt";

/// Default chart destination.
pub const DEFAULT_OUTPUT: &str = "stress_strain_curve.png";

/// Everything one analysis run needs, fixed before the run starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Strain/stress source file.
    pub input: PathBuf,
    /// Where the PNG chart is written.
    pub output: PathBuf,
    pub style: ChartStyle,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            style: ChartStyle::default(),
        }
    }

    /// Replace the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.style.title = title.into();
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}
