use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use benchio::read_series;
use charts::{render_line_chart, LineChartOptions, LineSpec, TIER_COLORS};
use cxlplot::{PlotsConfig, Tier};

/// Render the atomic-operation throughput of every memory tier as one
/// line chart.
#[derive(Parser, Debug)]
#[command(name = "plot_atomic")]
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
        .unwrap_or_else(|| config.paths.output_dir.join("atomic_operation.png"));

    let mut series = Vec::new();
    for (tier, color) in Tier::ATOMIC.into_iter().zip(TIER_COLORS) {
        let path = results_dir.join(tier.atomic_file());
        let loaded = read_series(&path, "num_ops")
            .with_context(|| format!("loading atomic-operation results for {tier}"))?;
        println!("Loaded {} samples from {}", loaded.len(), path.display());
        series.push(LineSpec {
            label: tier.label().to_string(),
            points: loaded.points(),
            color,
            dashed: false,
        });
    }

    let options = LineChartOptions {
        x_label: "Number of Threads".to_string(),
        y_label: "Number of operations".to_string(),
        guides: Vec::new(),
        y_range: None,
    };

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory for {}", output.display()))?;
    }
    render_line_chart(&output, &series, &options)
        .map_err(|e| anyhow::anyhow!("rendering atomic-operation chart: {e}"))?;

    println!("✓ Chart saved to {}", output.display());
    Ok(())
}
