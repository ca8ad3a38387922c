//! Segment bookkeeping: colors, sizes and the labeled output grid.
//!
//! Each final consensus root gets a display color the first time one of its
//! pixels is seen during the labeling pass. Colors are drawn uniformly over
//! the 24-bit space; collisions between segments are possible but
//! vanishingly unlikely and are not corrected.

use crate::image::{Rgb, RgbImage};
use crate::union_find::WeightedDsu;
use rand::Rng;
use std::collections::HashMap;

/// Display color and running pixel count of one final segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentInfo {
    pub color: Rgb,
    pub size: u32,
}

/// Mapping from consensus root id to segment record.
#[derive(Clone, Debug, Default)]
pub struct SegmentRegistry {
    segments: HashMap<u32, SegmentInfo>,
}

impl SegmentRegistry {
    /// Single pass over all vertices: resolve the consensus root, assign a
    /// fresh color on first sight, count sizes and paint the output grid.
    ///
    /// `consensus` must be flattened so root resolution is read-only.
    pub fn label_image<R: Rng>(
        consensus: &WeightedDsu,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> (Self, RgbImage) {
        let mut registry = Self::default();
        let mut labeled = RgbImage::new(width, height);
        for idx in 0..width * height {
            let root = consensus.root(idx) as u32;
            let info = registry
                .segments
                .entry(root)
                .or_insert_with(|| SegmentInfo {
                    color: random_color(rng),
                    size: 0,
                });
            info.size += 1;
            labeled.data[idx] = info.color;
        }
        (registry, labeled)
    }

    /// Number of distinct segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, root: u32) -> Option<&SegmentInfo> {
        self.segments.get(&root)
    }

    /// Segment sizes ordered largest first.
    pub fn sizes_descending(&self) -> Vec<u32> {
        let mut sizes: Vec<u32> = self.segments.values().map(|s| s.size).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// Sum of all segment sizes; equals the pixel count between merges.
    pub fn total_size(&self) -> u64 {
        self.segments.values().map(|s| u64::from(s.size)).sum()
    }

    /// Collapse `absorbed` entries into one record keyed by `new_root`,
    /// keeping the color of `surviving`. Sizes are summed. The removal and
    /// re-insertion happen as one step, so no intermediate state is
    /// observable.
    ///
    /// Every root passed in must currently exist in the registry.
    pub fn merge_entries(&mut self, surviving: u32, absorbed: &[u32], new_root: u32) -> SegmentInfo {
        let mut merged = self
            .segments
            .remove(&surviving)
            .expect("surviving root present in registry");
        for root in absorbed {
            let entry = self
                .segments
                .remove(root)
                .expect("absorbed root present in registry");
            merged.size += entry.size;
        }
        self.segments.insert(new_root, merged);
        merged
    }
}

fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::new(rng.gen(), rng.gen(), rng.gen())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn two_component_dsu() -> WeightedDsu {
        // Vertices 0..4 in one component, 4..6 in another.
        let mut dsu = WeightedDsu::new(6, 0);
        for i in 0..3 {
            dsu.union_unconditional(i, i + 1);
        }
        dsu.union_unconditional(4, 5);
        dsu.flatten();
        dsu
    }

    #[test]
    fn labeling_counts_and_paints_consistently() {
        let dsu = two_component_dsu();
        let (registry, labeled) = SegmentRegistry::label_image(&dsu, 3, 2, &mut seeded_rng());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.sizes_descending(), vec![4, 2]);
        // All pixels of one component share a color, across components they differ.
        assert_eq!(labeled.data[0], labeled.data[3]);
        assert_ne!(labeled.data[0], labeled.data[5]);
    }

    #[test]
    fn merge_entries_is_an_atomic_swap() {
        let dsu = two_component_dsu();
        let (mut registry, labeled) = SegmentRegistry::label_image(&dsu, 3, 2, &mut seeded_rng());
        let big = dsu.root(0) as u32;
        let small = dsu.root(5) as u32;
        let before_total = registry.total_size();

        let merged = registry.merge_entries(big, &[small], big);
        assert_eq!(merged.size, 6);
        assert_eq!(merged.color, labeled.data[0], "surviving color retained");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.total_size(), before_total);
        assert!(registry.get(small).is_none());
    }
}
