use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use benchio::read_series;
use charts::{render_line_chart, LineChartOptions, LineSpec, ESTIMATE_GREENS};
use cxlplot::PlotsConfig;
use plot_differential::smoothed_slope;

/// Render the smoothed derivative of the coherence overhead series.
#[derive(Parser, Debug)]
#[command(name = "plot_differential")]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Coherence result table (overrides the config).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output image path (overrides the config).
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PlotsConfig::load_or_default(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("loading configuration: {e}"))?;

    let input = cli
        .input
        .unwrap_or_else(|| config.paths.results_dir.join("coherence_atomic.csv"));
    let output = cli
        .output
        .unwrap_or_else(|| config.paths.output_dir.join("differential.png"));

    let series = read_series(&input, "diff")
        .with_context(|| format!("loading coherence results from {}", input.display()))?;
    println!("Loaded {} samples from {}", series.len(), input.display());

    let result = smoothed_slope(&series, &config.smoothing)
        .context("computing the smoothed derivative")?;

    // Guides only make sense strictly inside the observed thread range.
    let last_threads = series.threads.last().copied().unwrap_or(0.0);
    let guides: Vec<f64> = config
        .chart
        .core_boundaries
        .iter()
        .copied()
        .filter(|&g| g < last_threads)
        .collect();

    let line = LineSpec {
        label: "Atomic Derivative".to_string(),
        points: result.points(),
        color: ESTIMATE_GREENS[2],
        dashed: false,
    };
    let options = LineChartOptions {
        x_label: "Number of Cores".to_string(),
        y_label: "Derivatives".to_string(),
        guides,
        y_range: Some(config.chart.slope_y_range),
    };

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory for {}", output.display()))?;
    }
    render_line_chart(&output, &[line], &options)
        .map_err(|e| anyhow::anyhow!("rendering derivative chart: {e}"))?;

    println!("✓ Chart saved to {}", output.display());
    Ok(())
}
