// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gait_log_render::data_analysis::peak_detection::LocalMaximaPeakFinder;
use gait_log_render::plot_functions::plot_gait_report::{PngReportRenderer, ReportRenderer};
use gait_log_render::{crate_version, run_pipeline, PipelineConfig};

#[derive(Parser, Debug)]
#[command(author, version = crate_version(), about = "Step height and width charts from VR gait-training logs", long_about = None)]
struct Cli {
    /// Session log to analyze (defaults to HelloVR.log, or input_path from --config)
    #[arg(value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// TOML file with pipeline settings; flags given here override it
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Output PNG path (defaults to <input stem>_gait_report.png)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// First sample index kept after trimming
    #[arg(long)]
    trim_start: Option<usize>,

    /// Sample index (exclusive) where trimming stops keeping samples
    #[arg(long)]
    trim_end: Option<usize>,

    /// Lowest step height (cm) accepted as a peak
    #[arg(long)]
    peak_min: Option<f64>,

    /// Highest step height (cm) accepted as a peak
    #[arg(long)]
    peak_max: Option<f64>,

    /// Time between logged samples in ms
    #[arg(long)]
    sample_interval: Option<f64>,

    /// Skip chart rendering and only print the summary
    #[arg(long, action = ArgAction::SetTrue)]
    no_plot: bool,

    /// Enable debug logging (includes the full time axis)
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<PipelineConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = Some(output.clone());
        }
        if let Some(v) = self.trim_start {
            config.trim_start = v;
        }
        if let Some(v) = self.trim_end {
            config.trim_end = v;
        }
        if let Some(v) = self.peak_min {
            config.peak_min = v;
        }
        if let Some(v) = self.peak_max {
            config.peak_max = v;
        }
        if let Some(v) = self.sample_interval {
            config.sample_interval = v;
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.resolve_config()?;
    info!(?config, "Resolved pipeline configuration");

    let analysis = run_pipeline(&config, &LocalMaximaPeakFinder)?;

    println!("\n--- Gait Summary: {} ---", analysis.root_name);
    println!("  Samples analyzed: {}", analysis.sample_count());
    println!("  Step height peaks: {}", analysis.peaks.indices.len());
    println!("  Average peak step height: {:.2} cm", analysis.peaks.mean_height);
    println!("  Average step width at peaks: {:.2} cm", analysis.peaks.mean_width);

    if cli.no_plot {
        println!("  Skipping chart rendering (--no-plot).");
        return Ok(());
    }

    let output_path = config.resolved_output_path();
    PngReportRenderer::new(&output_path).render(&analysis)?;
    println!("  Gait report saved as '{}'.", output_path.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
