//! I/O helpers for RGB images, segment reports and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned [`RgbImage`].
//! - `save_rgb_image`: write an [`RgbImage`] to disk (format from extension).
//! - `write_segment_report` / `write_segment_report_file`: persist segment
//!   sizes as a count line followed by one size per line, largest first.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .pixels()
        .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
        .collect();
    Ok(RgbImage::from_pixels(width, height, data))
}

/// Save an RGB buffer to disk; the format is inferred from the extension.
pub fn save_rgb_image(buffer: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut raw = Vec::with_capacity(buffer.len() * 3);
    for row in buffer.rows() {
        for px in row {
            raw.extend_from_slice(&[px.r, px.g, px.b]);
        }
    }
    let out: image::RgbImage =
        image::ImageBuffer::from_raw(buffer.w as u32, buffer.h as u32, raw)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Write a segment-size report: the count, then one size per line in
/// descending order.
pub fn write_segment_report<W: Write>(writer: &mut W, sizes: &[u32]) -> Result<(), String> {
    writeln!(writer, "{}", sizes.len()).map_err(|e| format!("Failed to write report: {e}"))?;
    for size in sizes {
        writeln!(writer, "{size}").map_err(|e| format!("Failed to write report: {e}"))?;
    }
    Ok(())
}

/// Write a segment-size report to `path`, creating parent directories.
pub fn write_segment_report_file(path: &Path, sizes: &[u32]) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let file = fs::File::create(path)
        .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    write_segment_report(&mut writer, sizes)?;
    writer
        .flush()
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_segment_report;

    #[test]
    fn report_lists_count_then_sizes() {
        let mut out = Vec::new();
        write_segment_report(&mut out, &[120, 40, 3]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "3\n120\n40\n3\n");
    }
}
