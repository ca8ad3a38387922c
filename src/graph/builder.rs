//! Per-channel grid graph construction.
//!
//! Every pixel is a vertex; each in-bounds 8-neighbor probe yields one edge
//! whose weight is the absolute intensity difference on the selected
//! channel. Out-of-bounds probes are skipped silently (grid boundary).
//!
//! By default both directed probes of an undirected pair are generated, so
//! the edge multiset holds roughly `8 × pixel_count` entries. Duplicate
//! edges are harmless under union-find, and this matches the edge counts
//! the diagnostics report. Forward-only probing halves the list; see
//! [`build_channel_graph_dedup`].

use super::Edge;
use crate::image::{Channel, RgbImage};

pub(crate) const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Forward half of [`NEIGH_OFFSETS`]: each undirected pair probed once.
const FORWARD_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

/// Build the full directed-probe edge list for one channel.
pub fn build_channel_graph(image: &RgbImage, channel: Channel) -> Vec<Edge> {
    build_with_offsets(image, channel, &NEIGH_OFFSETS)
}

/// Build the deduplicated edge list (each undirected pair appears once).
pub fn build_channel_graph_dedup(image: &RgbImage, channel: Channel) -> Vec<Edge> {
    build_with_offsets(image, channel, &FORWARD_OFFSETS)
}

fn build_with_offsets(image: &RgbImage, channel: Channel, offsets: &[(isize, isize)]) -> Vec<Edge> {
    let width = image.w;
    let height = image.h;
    let mut edges = Vec::with_capacity(width * height * offsets.len());

    for y in 0..height {
        for x in 0..width {
            let id = (y * width + x) as u32;
            let here = channel.intensity(image.get(x, y));

            for &(dx, dy) in offsets {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= width as isize || yn >= height as isize {
                    continue;
                }
                let (xn, yn) = (xn as usize, yn as usize);
                let neighbor_id = (yn * width + xn) as u32;
                let there = channel.intensity(image.get(xn, yn));
                let weight = here.abs_diff(there);
                edges.push(Edge::new(id, neighbor_id, weight));
            }
        }
    }
    edges
}
