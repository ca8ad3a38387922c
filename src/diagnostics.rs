//! Serializable trace describing one segmentation run.
//!
//! [`PipelineTrace`] records what every stage did (edge counts and
//! component counts per channel, the consensus pass, wall-clock timings)
//! next to the flat [`SegmentationResult`](crate::SegmentationResult)
//! summary. Demos and the CLI can dump it as JSON for inspection.

use serde::Serialize;

/// Timing entry for a single pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for the run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Input grid description.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Per-channel stage outcome: graph construction + sort + greedy pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStage {
    pub channel: &'static str,
    /// Edges generated for this channel (reflects the directed-probe
    /// setting, so ≈8·N by default and ≈4·N when deduplicated).
    pub edge_count: usize,
    /// Components remaining after the greedy pass.
    pub component_count: usize,
    pub elapsed_ms: f64,
}

/// Consensus fusion outcome.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusStage {
    /// Neighbor pairs on which all three channels agreed.
    pub agreed_pairs: usize,
    /// Final consensus segment count.
    pub segment_count: usize,
    pub elapsed_ms: f64,
}

/// End-to-end trace of the segmentation pipeline.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub channels: Vec<ChannelStage>,
    pub consensus: ConsensusStage,
}
