#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod segmenter;
pub mod types;

// Building blocks of the pipeline; public for tools and advanced users.
pub mod config;
pub mod filters;
pub mod graph;
pub mod registry;
pub mod union_find;

// --- High-level re-exports -------------------------------------------------

// Main entry points: session object + results.
pub use crate::segmenter::{MergeOutcome, SegmentationOutcome, Segmenter, SegmenterParams};
pub use crate::types::{PixelCoord, SegmentationResult};

pub use crate::error::SegmentationError;
pub use crate::image::{Channel, Rgb, RgbImage};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use image_segmenter::prelude::*;
///
/// # fn main() {
/// let image = RgbImage::new(64, 64);
/// let mut segmenter = Segmenter::new(SegmenterParams::new(100));
/// let outcome = segmenter.segment(&image).expect("valid dimensions");
/// println!(
///     "{} segments in {:.3} ms",
///     outcome.result.segment_count, outcome.result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{Rgb, RgbImage};
    pub use crate::types::PixelCoord;
    pub use crate::{SegmentationResult, Segmenter, SegmenterParams};
}
