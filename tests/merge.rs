mod common;

use common::synthetic_image::{quadrant_rgb, two_band_rgb};
use image_segmenter::{PixelCoord, RgbImage, SegmentationError, Segmenter, SegmenterParams};

#[test]
fn merging_before_segmenting_is_a_usage_error() {
    let mut segmenter = Segmenter::new(SegmenterParams::new(1));
    let mut image = RgbImage::new(2, 2);
    let err = segmenter
        .merge_pair(&mut image, PixelCoord::new(0, 0), PixelCoord::new(1, 1))
        .unwrap_err();
    assert_eq!(err, SegmentationError::MissingSegmentation);
    assert_eq!(
        segmenter.segment_sizes().unwrap_err(),
        SegmentationError::MissingSegmentation
    );
}

#[test]
fn pairwise_merge_combines_sizes_and_repaints() {
    let image = two_band_rgb(4, 4);
    let mut segmenter = Segmenter::new(SegmenterParams::new(1));
    let outcome = segmenter.segment(&image).expect("valid input");
    let mut labeled = outcome.image;
    let top_color = labeled.get(0, 0);

    let merge = segmenter
        .merge_pair(&mut labeled, PixelCoord::new(0, 0), PixelCoord::new(3, 3))
        .expect("two distinct regions selected");

    assert_eq!(merge.merged_regions, 2);
    assert_eq!(merge.size, 16);
    assert_eq!(segmenter.segment_sizes().unwrap(), vec![16]);
    // Color retained from the first operand; the whole grid now wears it.
    assert!(labeled.data.iter().all(|&px| px == top_color));
}

#[test]
fn merging_one_region_with_itself_reports_degenerate_selection() {
    let image = two_band_rgb(4, 4);
    let mut segmenter = Segmenter::new(SegmenterParams::new(1));
    let mut labeled = segmenter.segment(&image).expect("valid input").image;
    let before = segmenter.segment_sizes().unwrap();
    let untouched = labeled.clone();

    let err = segmenter
        .merge_pair(&mut labeled, PixelCoord::new(0, 0), PixelCoord::new(3, 0))
        .unwrap_err();
    assert_eq!(err, SegmentationError::DegenerateSelection { distinct: 1 });
    assert_eq!(segmenter.segment_sizes().unwrap(), before);
    assert_eq!(labeled.data, untouched.data, "no repaint on a no-op merge");
}

#[test]
fn selection_of_one_pixel_is_rejected() {
    let image = two_band_rgb(4, 4);
    let mut segmenter = Segmenter::new(SegmenterParams::new(1));
    let mut labeled = segmenter.segment(&image).expect("valid input").image;
    let err = segmenter
        .merge_selection(&mut labeled, &[PixelCoord::new(0, 0)])
        .unwrap_err();
    assert_eq!(err, SegmentationError::SelectionTooSmall { got: 1 });
}

#[test]
fn multi_way_merge_conserves_total_size() {
    let image = quadrant_rgb(6);
    let mut segmenter = Segmenter::new(SegmenterParams::new(1));
    let outcome = segmenter.segment(&image).expect("valid input");
    assert_eq!(outcome.result.segment_count, 4);
    let mut labeled = outcome.image;
    let total_before: u64 = segmenter
        .segment_sizes()
        .unwrap()
        .iter()
        .map(|&s| u64::from(s))
        .sum();

    // One pixel in each of three quadrants; the fourth stays untouched.
    let selection = [
        PixelCoord::new(0, 0),
        PixelCoord::new(5, 0),
        PixelCoord::new(0, 5),
    ];
    let merge = segmenter
        .merge_selection(&mut labeled, &selection)
        .expect("three distinct regions selected");

    assert_eq!(merge.merged_regions, 3);
    assert_eq!(merge.size, 27, "three 3x3 quadrants collapse into one");
    assert_eq!(segmenter.segment_sizes().unwrap(), vec![27, 9]);

    let total_after: u64 = segmenter
        .segment_sizes()
        .unwrap()
        .iter()
        .map(|&s| u64::from(s))
        .sum();
    assert_eq!(total_before, total_after);

    // The merged region wears the first selection's color everywhere.
    let survivor_color = labeled.get(0, 0);
    assert_eq!(labeled.get(5, 0), survivor_color);
    assert_eq!(labeled.get(0, 5), survivor_color);
    assert_ne!(labeled.get(5, 5), survivor_color);
}

#[test]
fn duplicate_selections_collapse_to_distinct_roots() {
    let image = two_band_rgb(4, 4);
    let mut segmenter = Segmenter::new(SegmenterParams::new(1));
    let mut labeled = segmenter.segment(&image).expect("valid input").image;

    // Four picks, only two distinct regions.
    let selection = [
        PixelCoord::new(0, 0),
        PixelCoord::new(1, 0),
        PixelCoord::new(0, 3),
        PixelCoord::new(3, 3),
    ];
    let merge = segmenter
        .merge_selection(&mut labeled, &selection)
        .expect("two distinct regions");
    assert_eq!(merge.merged_regions, 2);
    assert_eq!(merge.size, 16);
}

#[test]
fn merges_chain_across_requests() {
    let image = quadrant_rgb(4);
    let mut segmenter = Segmenter::new(SegmenterParams::new(1));
    let mut labeled = segmenter.segment(&image).expect("valid input").image;

    segmenter
        .merge_pair(&mut labeled, PixelCoord::new(0, 0), PixelCoord::new(3, 0))
        .expect("first merge");
    let second = segmenter
        .merge_pair(&mut labeled, PixelCoord::new(0, 0), PixelCoord::new(0, 3))
        .expect("second merge touches the already-merged region");

    assert_eq!(second.size, 12);
    assert_eq!(segmenter.segment_sizes().unwrap(), vec![12, 4]);
}
