//! Configuration for the plotting binaries.
//!
//! Every constant the figures are tuned with (window sizes, latency
//! constants, classification thresholds, guide positions) lives here so
//! the binaries carry no magic literals.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration shared by all plotting binaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlotsConfig {
    /// Input/output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Smoothing pipeline windows
    #[serde(default)]
    pub smoothing: SmoothingConfig,

    /// Latency constants feeding the extrapolation
    #[serde(default)]
    pub extrapolation: ExtrapolationConfig,

    /// Step-classification thresholds
    #[serde(default)]
    pub steps: StepClassifyConfig,

    /// Chart-level options
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Input/output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the benchmark result tables.
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// Directory charts are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Windows of the smoothing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Savitzky-Golay window length (odd).
    #[serde(default = "default_window_length")]
    pub window_length: usize,

    /// Savitzky-Golay polynomial order.
    #[serde(default = "default_poly_order")]
    pub poly_order: usize,

    /// Trailing moving-average window applied to the derivative.
    #[serde(default = "default_slope_window")]
    pub slope_window: usize,
}

/// Latency constants feeding the extrapolation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtrapolationConfig {
    /// Measured inter-soft-NUMA latency (ns).
    #[serde(default = "default_inter_soft_numa_ns")]
    pub inter_soft_numa_ns: f64,

    /// Measured intra-node scaling constant (ns).
    #[serde(default = "default_intra_soft_numa_ns")]
    pub intra_soft_numa_ns: f64,

    /// Candidate CXL interconnect latencies to project (ns).
    #[serde(default = "default_cxl_latencies_ns")]
    pub cxl_latencies_ns: Vec<f64>,

    /// Row indices bounding the baseline-slope interval.
    #[serde(default = "default_baseline_rows")]
    pub baseline_rows: (usize, usize),

    /// Thread distance between the two projected points.
    #[serde(default = "default_step_threads")]
    pub step_threads: f64,

    /// Override for the measured inter-step mean; taken from the
    /// classification pass when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inter_step_override: Option<f64>,
}

/// Thresholds of the step-classification pass. Empirically chosen; see the
/// coherence experiment notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepClassifyConfig {
    /// Steps below this cost stay inside a soft-NUMA domain.
    #[serde(default = "default_inter_max")]
    pub inter_max: f64,

    /// Steps at or above `inter_max` but below this cross a domain
    /// boundary; anything larger is excluded.
    #[serde(default = "default_intra_max")]
    pub intra_max: f64,
}

/// Chart-level options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Thread counts where a core boundary is marked with a vertical guide.
    #[serde(default = "default_core_boundaries")]
    pub core_boundaries: Vec<f64>,

    /// Fixed y-range for the derivative figure.
    #[serde(default = "default_slope_y_range")]
    pub slope_y_range: (f64, f64),
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}
fn default_window_length() -> usize {
    11
}
fn default_poly_order() -> usize {
    3
}
fn default_slope_window() -> usize {
    5
}
fn default_inter_soft_numa_ns() -> f64 {
    25.8
}
fn default_intra_soft_numa_ns() -> f64 {
    106.6
}
fn default_cxl_latencies_ns() -> Vec<f64> {
    vec![200.0, 400.0, 800.0]
}
fn default_baseline_rows() -> (usize, usize) {
    (0, 127)
}
fn default_step_threads() -> f64 {
    128.0
}
fn default_inter_max() -> f64 {
    1.9
}
fn default_intra_max() -> f64 {
    4.0
}
fn default_core_boundaries() -> Vec<f64> {
    vec![128.0, 256.0]
}
fn default_slope_y_range() -> (f64, f64) {
    (0.0, 2.0)
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_length: default_window_length(),
            poly_order: default_poly_order(),
            slope_window: default_slope_window(),
        }
    }
}

impl Default for ExtrapolationConfig {
    fn default() -> Self {
        Self {
            inter_soft_numa_ns: default_inter_soft_numa_ns(),
            intra_soft_numa_ns: default_intra_soft_numa_ns(),
            cxl_latencies_ns: default_cxl_latencies_ns(),
            baseline_rows: default_baseline_rows(),
            step_threads: default_step_threads(),
            inter_step_override: None,
        }
    }
}

impl Default for StepClassifyConfig {
    fn default() -> Self {
        Self {
            inter_max: default_inter_max(),
            intra_max: default_intra_max(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            core_boundaries: default_core_boundaries(),
            slope_y_range: default_slope_y_range(),
        }
    }
}

impl PlotsConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: PlotsConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_experiment_constants() {
        let config = PlotsConfig::default();
        assert_eq!(config.smoothing.window_length, 11);
        assert_eq!(config.smoothing.poly_order, 3);
        assert_eq!(config.smoothing.slope_window, 5);
        assert_eq!(config.extrapolation.cxl_latencies_ns, vec![200.0, 400.0, 800.0]);
        assert_eq!(config.extrapolation.baseline_rows, (0, 127));
        assert!((config.steps.inter_max - 1.9).abs() < 1e-10);
        assert!((config.steps.intra_max - 4.0).abs() < 1e-10);
        assert_eq!(config.chart.core_boundaries, vec![128.0, 256.0]);
    }

    #[test]
    fn test_toml_round_trip() {
        let file = NamedTempFile::new().unwrap();
        let mut config = PlotsConfig::default();
        config.extrapolation.inter_step_override = Some(0.662);
        config.to_file(file.path()).unwrap();

        let loaded = PlotsConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded.extrapolation.inter_step_override, Some(0.662));
        assert_eq!(loaded.smoothing.window_length, 11);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let content = "[smoothing]\nwindow_length = 7\n";
        let config: PlotsConfig = toml::from_str(content).unwrap();
        assert_eq!(config.smoothing.window_length, 7);
        assert_eq!(config.smoothing.poly_order, 3);
        assert!((config.extrapolation.inter_soft_numa_ns - 25.8).abs() < 1e-10);
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = PlotsConfig::load_or_default(None).unwrap();
        assert_eq!(config.paths.results_dir, PathBuf::from("results"));
    }
}
