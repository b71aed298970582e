mod analysis;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod pipeline;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use config::{DEFAULT_INPUT, DEFAULT_OUTPUT, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "tensile-analyzer")]
#[command(about = "Estimate UTS and elastic modulus from a stress-strain curve and plot it")]
struct Args {
    /// Two-column strain/stress file (whitespace-separated, or .csv)
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output PNG path
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Chart title
    #[arg(short, long, default_value = "Stress-Strain Curve")]
    title: String,

    /// Log every skipped input line and intermediate fit values
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig::new(args.input, args.output).with_title(args.title)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = RunConfig::from(args);
    log::info!("Analysing {} → {}", config.input.display(), config.output.display());

    pipeline::run(&config, &mut std::io::stdout().lock())?;
    Ok(())
}
