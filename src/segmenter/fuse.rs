//! Consensus fusion of the three per-channel partitions.
//!
//! Two adjacent pixels end up in the same final region only if all three
//! channel segmentations already placed them in one component. The scan
//! over neighbor pairs is embarrassingly parallel, but the unions it
//! triggers are not: concurrent `union` calls on one shared structure
//! would race on the parent/rank/size arrays. The parallel build therefore
//! runs in two phases: workers detect agreed pairs over disjoint row
//! bands into private buffers, then all unions are applied serially.
//!
//! Callers must hand in flattened channel structures (the channel passes
//! do this before returning), so root resolution here is a read-only
//! array lookup shared safely across workers.

use crate::graph::NEIGH_OFFSETS;
use crate::union_find::WeightedDsu;
use log::debug;
use std::time::Instant;

pub(crate) struct FuseOutcome {
    pub dsu: WeightedDsu,
    pub agreed_pairs: usize,
    pub elapsed_ms: f64,
}

/// Build the consensus partition from three flattened channel partitions.
pub(crate) fn fuse_channels(
    channels: &[WeightedDsu; 3],
    width: usize,
    height: usize,
) -> FuseOutcome {
    let start = Instant::now();
    let n = width * height;
    let mut dsu = WeightedDsu::new(n, 0);

    #[cfg(feature = "parallel")]
    let agreed_pairs = {
        use rayon::prelude::*;
        let pairs: Vec<(u32, u32)> = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| detect_row(channels, width, height, y))
            .collect();
        for &(a, b) in &pairs {
            dsu.union_unconditional(a as usize, b as usize);
        }
        pairs.len()
    };
    #[cfg(not(feature = "parallel"))]
    let agreed_pairs = {
        let mut agreed = 0usize;
        for y in 0..height {
            for (a, b) in detect_row(channels, width, height, y) {
                dsu.union_unconditional(a as usize, b as usize);
                agreed += 1;
            }
        }
        agreed
    };

    dsu.flatten();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "consensus: {} agreed pairs -> {} segments in {:.3} ms",
        agreed_pairs,
        dsu.component_count(),
        elapsed_ms
    );

    FuseOutcome {
        dsu,
        agreed_pairs,
        elapsed_ms,
    }
}

/// Agreed neighbor pairs for one row. Both directed probes of a pair are
/// examined, matching the grid builder's edge multiset.
fn detect_row(
    channels: &[WeightedDsu; 3],
    width: usize,
    height: usize,
    y: usize,
) -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    for x in 0..width {
        let idx = y * width + x;
        for &(dx, dy) in &NEIGH_OFFSETS {
            let xn = x as isize + dx;
            let yn = y as isize + dy;
            if xn < 0 || yn < 0 || xn >= width as isize || yn >= height as isize {
                continue;
            }
            let nidx = yn as usize * width + xn as usize;
            let agreed = channels
                .iter()
                .all(|channel| channel.root(idx) == channel.root(nidx));
            if agreed {
                pairs.push((idx as u32, nidx as u32));
            }
        }
    }
    pairs
}
