// File: crates/cli/src/main.rs
// Summary: Loads the examination CSV, applies config and flag overrides, then writes catplot.png and heatmap.png.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use medical_viz::{MedicalVisualizer, VisualizerConfig};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod summary;

#[derive(Parser)]
#[command(name = "medical-data-visualizer")]
#[command(about = "Draw indicator counts and a correlation heat map from medical examination data", long_about = None)]
#[command(version)]
struct Cli {
    /// CSV file with one examination per row [default: medical_examination.csv]
    #[arg(short, long, env = "MEDVIZ_DATASET")]
    dataset: Option<PathBuf>,

    /// JSON configuration file; missing keys use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory receiving catplot.png and heatmap.png [default: .]
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Theme preset (light, dark, high-contrast-dark)
    #[arg(short, long, default_value = "light")]
    theme: String,

    /// Print category counts and the correlation table instead of rendering
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = build_config(&cli)?;
    let theme = chart_core::theme::find(&cli.theme);
    if !theme.name.eq_ignore_ascii_case(&cli.theme) {
        warn!(requested = %cli.theme, using = theme.name, "unknown theme");
    }

    let dataset = config.dataset_path.clone();
    let viz = MedicalVisualizer::load(config)
        .with_context(|| format!("failed to load dataset '{}'", dataset.display()))?
        .with_theme(theme);
    info!(rows = viz.frame().row_count(), columns = viz.frame().column_count(), "prepared dataset");

    if cli.summary {
        let stdout = std::io::stdout();
        return summary::print(&viz, &mut stdout.lock());
    }

    let out_dir = &viz.config().output_dir;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory '{}'", out_dir.display()))?;
    let written = viz.save_figures().context("failed to render charts")?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Config file (or defaults), then command-line overrides.
fn build_config(cli: &Cli) -> Result<VisualizerConfig> {
    let mut config = match &cli.config {
        Some(path) => VisualizerConfig::from_file(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?,
        None => VisualizerConfig::default(),
    };
    if let Some(dataset) = &cli.dataset {
        config.dataset_path = dataset.clone();
    }
    if let Some(dir) = &cli.out_dir {
        config.output_dir = dir.clone();
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}
