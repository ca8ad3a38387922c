use serde::Serialize;

/// Pixel position in image coordinates (`x` = column, `y` = row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PixelCoord {
    pub x: usize,
    pub y: usize,
}

impl PixelCoord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Flat summary of one segmentation run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationResult {
    pub segment_count: usize,
    /// Pixel count of the largest final segment.
    pub largest_segment: u32,
    pub latency_ms: f64,
}
