use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use charts::{render_line_chart, LineChartOptions, LineSpec, TIER_COLORS};
use cxlplot::PlotsConfig;

/// Coherence overhead against the number of soft-NUMA placements, measured
/// by hand with 8 threads per placement.
const OVERHEAD: [f64; 8] = [4.32, 7.53, 8.06, 8.82, 9.09, 9.44, 10.03, 10.99];

/// Render the soft-NUMA thread-placement overhead measurements.
#[derive(Parser, Debug)]
#[command(name = "plot_softnuma")]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output image path (overrides the config).
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PlotsConfig::load_or_default(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("loading configuration: {e}"))?;

    let output = cli
        .output
        .unwrap_or_else(|| config.paths.output_dir.join("softnuma.png"));

    let line = LineSpec {
        label: String::new(),
        points: OVERHEAD
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i + 1) as f64, v))
            .collect(),
        color: TIER_COLORS[0],
        dashed: false,
    };
    let options = LineChartOptions {
        x_label: "# of Soft NUMA placement by 8 threads".to_string(),
        y_label: "Coherence Overhead".to_string(),
        guides: Vec::new(),
        y_range: None,
    };

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory for {}", output.display()))?;
    }
    render_line_chart(&output, &[line], &options)
        .map_err(|e| anyhow::anyhow!("rendering soft-NUMA chart: {e}"))?;

    println!("✓ Chart saved to {}", output.display());
    Ok(())
}
