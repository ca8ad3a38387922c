//! Segmentation pipeline and interactive session.
//!
//! Overview
//! - Runs one independent pipeline per color channel: 8-connected grid
//!   graph, stable counting sort, greedy adaptive merging into a private
//!   union-find (`channels`).
//! - Joins the three channel partitions at a barrier and fuses them into a
//!   consensus partition where adjacent pixels merge only under unanimous
//!   channel agreement (`fuse`).
//! - Labels the consensus partition with random segment colors and tracks
//!   per-segment sizes (see [`crate::registry`]).
//! - Serves interactive pairwise and multi-way region merges on the
//!   completed session (`pipeline`).
//!
//! Modules
//! - [`params`] – session parameters (scale constant, edge probing mode).
//! - `channels` – the per-channel build → sort → merge pass.
//! - `fuse` – consensus fusion (parallel detect, serial apply).
//! - `pipeline` – the [`Segmenter`] session object.

mod channels;
mod fuse;
pub mod params;
mod pipeline;

pub use params::SegmenterParams;
pub use pipeline::{MergeOutcome, SegmentationOutcome, Segmenter};
