use image_segmenter::{Rgb, RgbImage, Segmenter, SegmenterParams};

fn main() {
    env_logger::init();

    // Demo stub: segments a synthetic two-band image
    let w = 320usize;
    let h = 240usize;
    let mut image = RgbImage::new(w, h);
    for y in h / 2..h {
        for x in 0..w {
            image.set(x, y, Rgb::new(220, 220, 220));
        }
    }

    let mut segmenter = Segmenter::new(SegmenterParams::new(300));
    match segmenter.segment(&image) {
        Ok(outcome) => println!(
            "segments={} largest={} latency_ms={:.3}",
            outcome.result.segment_count,
            outcome.result.largest_segment,
            outcome.result.latency_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
