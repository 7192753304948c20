use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use benchio::read_series;
use charts::{render_bar_panels, BarPanel};
use cxlplot::{PlotsConfig, Tier};

/// Render per-tier write-bandwidth bar panels from benchmark result tables.
#[derive(Parser, Debug)]
#[command(name = "plot_bandwidth")]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the result tables (overrides the config).
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// Output image path (overrides the config).
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PlotsConfig::load_or_default(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("loading configuration: {e}"))?;

    let results_dir = cli
        .results_dir
        .unwrap_or_else(|| config.paths.results_dir.clone());
    let output = cli
        .output
        .unwrap_or_else(|| config.paths.output_dir.join("write_bandwidth.png"));

    let mut panels = Vec::new();
    for tier in Tier::BANDWIDTH {
        let path = results_dir.join(tier.bandwidth_file());
        let series = read_series(&path, "bandwidth")
            .with_context(|| format!("loading write-bandwidth results for {tier}"))?;
        println!("Loaded {} samples from {}", series.len(), path.display());
        panels.push(BarPanel {
            title: format!("Write Bandwidth vs Number of Threads - {tier}"),
            points: series.points(),
        });
    }

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory for {}", output.display()))?;
    }
    render_bar_panels(&output, &panels, "Number of Threads", "Write Bandwidth (GB/s)")
        .map_err(|e| anyhow::anyhow!("rendering bandwidth chart: {e}"))?;

    println!("✓ Chart saved to {}", output.display());
    Ok(())
}
