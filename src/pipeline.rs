use std::io::Write;

use anyhow::{Context, Result};

use crate::analysis::MechanicalProperties;
use crate::chart::render::render;
use crate::config::RunConfig;
use crate::data::loader::load_file;
use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Pipeline: load → estimate → render
// ---------------------------------------------------------------------------

/// Run one analysis: load the samples, print the three property lines to
/// `report`, then write the chart.
///
/// Every fatal condition is returned with the stage that raised it.  Nothing
/// is written to `config.output` unless the whole chart could be drawn.
pub fn run<W: Write>(config: &RunConfig, report: &mut W) -> Result<MechanicalProperties> {
    let series = load_file(&config.input).context("load stage failed")?;
    if series.is_empty() {
        return Err(AnalysisError::EmptyInput).with_context(|| {
            format!("load stage failed: {} has no strain/stress lines", config.input.display())
        });
    }

    let props = MechanicalProperties::estimate(&series).context("estimate stage failed")?;
    writeln!(report, "{props}").context("writing report")?;

    render(&series, &props, &config.style, &config.output).context("render stage failed")?;

    Ok(props)
}
