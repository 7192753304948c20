use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use benchio::read_series;
use charts::{render_line_chart, LineChartOptions, LineSpec, ESTIMATE_GREENS, TIER_COLORS};
use cxlplot::PlotsConfig;
use plot_extrapolate::project_tiers;

/// Render the observed coherence overhead next to two-point estimates for
/// slower CXL interconnect latencies.
#[derive(Parser, Debug)]
#[command(name = "plot_extrapolate")]
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
        .unwrap_or_else(|| config.paths.output_dir.join("extrapolate.png"));

    let series = read_series(&input, "diff")
        .with_context(|| format!("loading coherence results from {}", input.display()))?;
    println!("Loaded {} samples from {}", series.len(), input.display());

    let result = project_tiers(&series, &config.extrapolation, &config.steps)
        .context("projecting onto the candidate latencies")?;

    println!("inter soft-NUMA step mean: {:.4}", result.steps.inter_mean);
    println!("intra soft-NUMA step mean: {:.4}", result.steps.intra_mean);
    println!(
        "baseline slope over rows {}..{}: {:.4}",
        config.extrapolation.baseline_rows.0, config.extrapolation.baseline_rows.1, result.base_slope
    );

    let mut lines = vec![LineSpec {
        label: "Empirical Single Node".to_string(),
        points: series.points(),
        color: TIER_COLORS[0],
        dashed: false,
    }];
    for (i, projection) in result.projections.iter().enumerate() {
        lines.push(LineSpec {
            label: format!("Est Multi Node {}ns", projection.target_ratio),
            points: projection.points.iter().map(|p| (p.threads, p.value)).collect(),
            color: ESTIMATE_GREENS[i % ESTIMATE_GREENS.len()],
            dashed: true,
        });
    }

    let options = LineChartOptions {
        x_label: "Number of Cores".to_string(),
        y_label: "Coherence Overhead".to_string(),
        guides: config.chart.core_boundaries.clone(),
        y_range: None,
    };

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory for {}", output.display()))?;
    }
    render_line_chart(&output, &lines, &options)
        .map_err(|e| anyhow::anyhow!("rendering extrapolation chart: {e}"))?;

    println!("✓ Chart saved to {}", output.display());
    Ok(())
}
