//! Segmentation session orchestrating the full pipeline.
//!
//! [`Segmenter`] exposes a simple API: feed an RGB image and get a labeled
//! copy plus per-stage diagnostics; afterwards, merge regions interactively
//! on the completed session. Internally it coordinates the three per-channel
//! passes (graph → stable sort → greedy merge), the consensus fusion
//! barrier, and the labeling pass.
//!
//! Typical usage:
//! ```no_run
//! use image_segmenter::{RgbImage, Segmenter, SegmenterParams};
//!
//! # fn example(image: RgbImage) {
//! let mut segmenter = Segmenter::new(SegmenterParams::new(300));
//! let outcome = segmenter.segment(&image).expect("valid dimensions");
//! println!("{} segments", outcome.result.segment_count);
//! # }
//! ```
//!
//! All session state (the consensus union-find and the segment registry)
//! is owned by the `Segmenter` and replaced wholesale when a new image is
//! segmented. The scale constant is part of [`SegmenterParams`], never
//! ambient state. Merge requests are serialized by the caller (methods take
//! `&mut self`); each one either completes fully or fails validation with
//! no partial effects.

use super::channels::segment_channels;
use super::fuse::fuse_channels;
use super::params::SegmenterParams;
use crate::diagnostics::{ChannelStage, ConsensusStage, InputDescriptor, PipelineTrace};
use crate::error::SegmentationError;
use crate::image::RgbImage;
use crate::registry::SegmentRegistry;
use crate::types::{PixelCoord, SegmentationResult};
use crate::union_find::WeightedDsu;
use log::debug;
use std::time::Instant;

/// Everything produced by one [`Segmenter::segment`] call.
#[derive(Clone, Debug)]
pub struct SegmentationOutcome {
    /// The input grid repainted with per-segment colors.
    pub image: RgbImage,
    /// Flat summary (segment count, largest size, latency).
    pub result: SegmentationResult,
    /// Per-stage diagnostics.
    pub trace: PipelineTrace,
}

/// Summary of one interactive merge request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Consensus root of the surviving segment.
    pub root: u32,
    /// Pixel count of the merged segment.
    pub size: u32,
    /// Distinct regions collapsed by this request.
    pub merged_regions: usize,
}

struct SessionState {
    width: usize,
    height: usize,
    consensus: WeightedDsu,
    registry: SegmentRegistry,
}

/// Graph-based segmentation session with interactive region merging.
pub struct Segmenter {
    params: SegmenterParams,
    session: Option<SessionState>,
}

impl Segmenter {
    /// Create a session with the supplied parameters.
    pub fn new(params: SegmenterParams) -> Self {
        Self {
            params,
            session: None,
        }
    }

    pub fn params(&self) -> &SegmenterParams {
        &self.params
    }

    /// Run the full pipeline on `image`, replacing any previous session
    /// state.
    ///
    /// Both dimensions must be in `1..=65535`.
    pub fn segment(&mut self, image: &RgbImage) -> Result<SegmentationOutcome, SegmentationError> {
        let (width, height) = (image.w, image.h);
        if width == 0 || height == 0 || width > u16::MAX as usize || height > u16::MAX as usize {
            return Err(SegmentationError::InvalidDimensions { width, height });
        }

        let total_start = Instant::now();
        let mut trace = PipelineTrace {
            input: InputDescriptor { width, height },
            ..Default::default()
        };

        // Three independent channel pipelines; joined before fusion.
        let channel_outcomes = segment_channels(image, &self.params);
        for outcome in &channel_outcomes {
            trace.channels.push(ChannelStage {
                channel: outcome.channel.label(),
                edge_count: outcome.edge_count,
                component_count: outcome.component_count,
                elapsed_ms: outcome.elapsed_ms,
            });
            trace
                .timings
                .push(format!("channel:{}", outcome.channel.label()), outcome.elapsed_ms);
        }

        let channel_dsus = {
            let [red, green, blue] = channel_outcomes;
            [red.dsu, green.dsu, blue.dsu]
        };
        let fused = fuse_channels(&channel_dsus, width, height);
        drop(channel_dsus);

        let label_start = Instant::now();
        let (registry, labeled) =
            SegmentRegistry::label_image(&fused.dsu, width, height, &mut rand::thread_rng());
        let label_ms = label_start.elapsed().as_secs_f64() * 1000.0;

        let sizes = registry.sizes_descending();
        let segment_count = sizes.len();
        trace.consensus = ConsensusStage {
            agreed_pairs: fused.agreed_pairs,
            segment_count,
            elapsed_ms: fused.elapsed_ms,
        };
        trace.timings.push("consensus", fused.elapsed_ms);
        trace.timings.push("labeling", label_ms);

        let latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        trace.timings.total_ms = latency_ms;
        debug!("segmented {width}x{height}: {segment_count} segments in {latency_ms:.3} ms");

        self.session = Some(SessionState {
            width,
            height,
            consensus: fused.dsu,
            registry,
        });

        Ok(SegmentationOutcome {
            image: labeled,
            result: SegmentationResult {
                segment_count,
                largest_segment: sizes.first().copied().unwrap_or(0),
                latency_ms,
            },
            trace,
        })
    }

    /// Merge the segments containing pixels `a` and `b` and repaint the
    /// merged region with the color of `a`'s segment.
    ///
    /// Requires a prior [`segment`](Segmenter::segment) call. Selecting two
    /// pixels of the same segment is reported as a degenerate selection and
    /// changes nothing.
    ///
    /// Panics if either coordinate is out of bounds or `image` does not
    /// match the segmented grid; coordinate validation is the caller's
    /// job.
    pub fn merge_pair(
        &mut self,
        image: &mut RgbImage,
        a: PixelCoord,
        b: PixelCoord,
    ) -> Result<MergeOutcome, SegmentationError> {
        self.merge_selection(image, &[a, b])
    }

    /// Merge every segment containing one of the selected pixels into the
    /// segment of the first selection, repainting with its color.
    ///
    /// At least two selections spanning at least two distinct segments are
    /// required; anything less is reported without mutating the session.
    ///
    /// Panics if a coordinate is out of bounds or `image` does not match
    /// the segmented grid.
    pub fn merge_selection(
        &mut self,
        image: &mut RgbImage,
        coords: &[PixelCoord],
    ) -> Result<MergeOutcome, SegmentationError> {
        let session = self
            .session
            .as_mut()
            .ok_or(SegmentationError::MissingSegmentation)?;
        assert_eq!(
            (image.w, image.h),
            (session.width, session.height),
            "image does not match the segmented grid"
        );

        if coords.len() < 2 {
            return Err(SegmentationError::SelectionTooSmall { got: coords.len() });
        }

        let mut roots: Vec<u32> = Vec::with_capacity(coords.len());
        for coord in coords {
            assert!(
                coord.x < session.width && coord.y < session.height,
                "pixel coordinate ({}, {}) outside {}x{} grid",
                coord.x,
                coord.y,
                session.width,
                session.height
            );
            let root = session.consensus.find(coord.y * session.width + coord.x) as u32;
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
        if roots.len() < 2 {
            return Err(SegmentationError::DegenerateSelection {
                distinct: roots.len(),
            });
        }

        let target = roots[0];
        for &other in &roots[1..] {
            session.consensus.union_unconditional(target as usize, other as usize);
        }
        let new_root = session.consensus.find(target as usize) as u32;
        let merged = session
            .registry
            .merge_entries(target, &roots[1..], new_root);

        // Membership is only tracked by the union-find, so repainting is a
        // full-grid pass.
        for idx in 0..session.width * session.height {
            if session.consensus.find(idx) as u32 == new_root {
                image.data[idx] = merged.color;
            }
        }

        debug!(
            "merged {} regions into root {} ({} px)",
            roots.len(),
            new_root,
            merged.size
        );
        Ok(MergeOutcome {
            root: new_root,
            size: merged.size,
            merged_regions: roots.len(),
        })
    }

    /// Segment sizes of the current session, largest first.
    pub fn segment_sizes(&self) -> Result<Vec<u32>, SegmentationError> {
        self.session
            .as_ref()
            .map(|s| s.registry.sizes_descending())
            .ok_or(SegmentationError::MissingSegmentation)
    }

    /// Number of segments in the current session.
    pub fn segment_count(&self) -> Result<usize, SegmentationError> {
        self.session
            .as_ref()
            .map(|s| s.registry.len())
            .ok_or(SegmentationError::MissingSegmentation)
    }
}
