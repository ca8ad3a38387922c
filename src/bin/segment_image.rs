use image_segmenter::config::{load_config, SegmentToolConfig};
use image_segmenter::filters::gaussian_smooth;
use image_segmenter::image::io::{
    load_rgb_image, save_rgb_image, write_json_file, write_segment_report_file,
};
use image_segmenter::{Segmenter, SegmenterParams};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: SegmentToolConfig = load_config(Path::new(&config_path))?;

    let mut image = load_rgb_image(&config.input)?;
    if let Some(smoothing) = &config.smoothing {
        image = gaussian_smooth(&image, smoothing.mask_size, smoothing.sigma);
    }

    let params = SegmenterParams::new(config.k).with_dedupe_edges(config.dedupe_edges);
    let mut segmenter = Segmenter::new(params);
    let outcome = segmenter
        .segment(&image)
        .map_err(|e| format!("Segmentation failed: {e}"))?;

    save_rgb_image(&outcome.image, &config.output.labeled_image)?;
    if let Some(report_path) = &config.output.report {
        let sizes = segmenter
            .segment_sizes()
            .map_err(|e| format!("Report unavailable: {e}"))?;
        write_segment_report_file(report_path, &sizes)?;
    }
    if let Some(trace_path) = &config.output.trace_json {
        write_json_file(trace_path, &outcome.trace)?;
    }

    println!(
        "{} segments (largest {} px) in {:.1} ms -> {}",
        outcome.result.segment_count,
        outcome.result.largest_segment,
        outcome.result.latency_ms,
        config.output.labeled_image.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: segment_image <config.json>".to_string()
}
