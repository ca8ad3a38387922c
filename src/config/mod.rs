//! Configuration for the `segment_image` CLI tool.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SegmentToolConfig {
    /// Source image (any format the `image` crate decodes).
    pub input: PathBuf,
    /// Scale constant `K` of the merge criterion. Required; there is no
    /// default the tool could silently substitute.
    pub k: u32,
    /// Probe each undirected neighbor pair once instead of twice.
    #[serde(default)]
    pub dedupe_edges: bool,
    /// Optional Gaussian pre-smoothing applied before segmentation.
    #[serde(default)]
    pub smoothing: Option<SmoothingConfig>,
    pub output: SegmentOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Odd kernel width in pixels.
    pub mask_size: usize,
    pub sigma: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            mask_size: 5,
            sigma: 1.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SegmentOutputConfig {
    /// Destination for the repainted segmentation.
    pub labeled_image: PathBuf,
    /// Segment report: count line, then one size per line, largest first.
    #[serde(default)]
    pub report: Option<PathBuf>,
    /// Optional JSON dump of the pipeline trace.
    #[serde(default)]
    pub trace_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SegmentToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: SegmentToolConfig = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    if let Some(smoothing) = &config.smoothing {
        if smoothing.mask_size % 2 == 0 || smoothing.sigma <= 0.0 {
            return Err(format!(
                "Invalid smoothing config in {}: mask_size must be odd and sigma positive",
                path.display()
            ));
        }
    }
    Ok(config)
}
