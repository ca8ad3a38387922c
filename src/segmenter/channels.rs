//! Independent per-channel segmentation passes.
//!
//! Each channel owns its edge list and union-find, so the three passes
//! share no mutable state and run concurrently under the `parallel`
//! feature. Every returned structure is flattened, which makes the
//! post-barrier root lookups of consensus fusion plain array reads.

use super::params::SegmenterParams;
use crate::graph::{build_channel_graph, build_channel_graph_dedup, sort_edges_by_weight};
use crate::image::{Channel, RgbImage};
use crate::union_find::WeightedDsu;
use log::debug;
use std::time::Instant;

pub(crate) struct ChannelOutcome {
    pub channel: Channel,
    pub dsu: WeightedDsu,
    pub edge_count: usize,
    pub component_count: usize,
    pub elapsed_ms: f64,
}

/// Run graph construction, edge sorting and the greedy merge pass for all
/// three channels.
pub(crate) fn segment_channels(image: &RgbImage, params: &SegmenterParams) -> [ChannelOutcome; 3] {
    #[cfg(feature = "parallel")]
    {
        let ((red, green), blue) = rayon::join(
            || {
                rayon::join(
                    || run_channel(image, Channel::Red, params),
                    || run_channel(image, Channel::Green, params),
                )
            },
            || run_channel(image, Channel::Blue, params),
        );
        [red, green, blue]
    }
    #[cfg(not(feature = "parallel"))]
    {
        Channel::ALL.map(|channel| run_channel(image, channel, params))
    }
}

fn run_channel(image: &RgbImage, channel: Channel, params: &SegmenterParams) -> ChannelOutcome {
    let start = Instant::now();

    let edges = if params.dedupe_edges {
        build_channel_graph_dedup(image, channel)
    } else {
        build_channel_graph(image, channel)
    };
    let edge_count = edges.len();
    let sorted = sort_edges_by_weight(&edges);
    drop(edges);

    let mut dsu = WeightedDsu::new(image.len(), params.k);
    for edge in &sorted {
        dsu.union(edge.a as usize, edge.b as usize, edge.weight);
    }
    dsu.flatten();

    let component_count = dsu.component_count();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "channel {}: {} edges -> {} components in {:.3} ms",
        channel.label(),
        edge_count,
        component_count,
        elapsed_ms
    );

    ChannelOutcome {
        channel,
        dsu,
        edge_count,
        component_count,
        elapsed_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Rgb;

    fn split_image() -> RgbImage {
        // Left half dark, right half bright on every channel.
        let mut img = RgbImage::new(4, 2);
        for y in 0..2 {
            for x in 2..4 {
                img.set(x, y, Rgb::new(200, 200, 200));
            }
        }
        img
    }

    #[test]
    fn uniform_halves_collapse_per_channel() {
        let outcomes = segment_channels(&split_image(), &SegmenterParams::new(1));
        for outcome in &outcomes {
            assert_eq!(
                outcome.component_count, 2,
                "channel {} should split into two flat components",
                outcome.channel.label()
            );
        }
    }

    #[test]
    fn dedup_probing_does_not_change_the_partition() {
        let full = segment_channels(&split_image(), &SegmenterParams::new(1));
        let dedup = segment_channels(
            &split_image(),
            &SegmenterParams::new(1).with_dedupe_edges(true),
        );
        for (a, b) in full.iter().zip(dedup.iter()) {
            assert_eq!(a.component_count, b.component_count);
            assert_eq!(a.edge_count, 2 * b.edge_count);
        }
    }

    #[test]
    fn larger_k_never_splits_more() {
        // 4x4 horizontal gradient; coarser K must not raise the count.
        let mut img = RgbImage::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                let v = (x * 40) as u8;
                img.set(x, y, Rgb::new(v, v, v));
            }
        }
        let fine = segment_channels(&img, &SegmenterParams::new(1));
        let coarse = segment_channels(&img, &SegmenterParams::new(10_000));
        for (f, c) in fine.iter().zip(coarse.iter()) {
            assert!(
                c.component_count <= f.component_count,
                "channel {}: K=10000 produced {} components, K=1 produced {}",
                f.channel.label(),
                c.component_count,
                f.component_count
            );
        }
    }
}
