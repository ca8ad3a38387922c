//! Optional Gaussian pre-smoothing.
//!
//! Segmentation quality on noisy photographs improves when the input is
//! blurred slightly first; this is a collaborator stage that runs before
//! the core pipeline, never inside it. The filter is a separable 1D
//! Gaussian applied horizontally then vertically to each channel, with
//! clamped (edge-replicating) borders.

use crate::image::{Rgb, RgbImage};

/// Normalized 1D Gaussian taps for an odd `mask_size` and positive `sigma`.
pub fn gaussian_taps(mask_size: usize, sigma: f64) -> Vec<f32> {
    assert!(mask_size % 2 == 1, "mask size must be odd");
    assert!(sigma > 0.0, "sigma must be positive");
    let center = (mask_size / 2) as isize;
    let mut taps: Vec<f32> = (0..mask_size)
        .map(|i| {
            let d = (i as isize - center) as f64;
            (-d * d / (2.0 * sigma * sigma)).exp() as f32
        })
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

/// Blur all three channels with a separable Gaussian; returns a new buffer.
pub fn gaussian_smooth(image: &RgbImage, mask_size: usize, sigma: f64) -> RgbImage {
    let taps = gaussian_taps(mask_size, sigma);
    let (w, h) = (image.w, image.h);

    let mut planes = [
        vec![0.0f32; w * h],
        vec![0.0f32; w * h],
        vec![0.0f32; w * h],
    ];
    for (y, row) in image.rows().enumerate() {
        for (x, px) in row.iter().enumerate() {
            let idx = y * w + x;
            planes[0][idx] = px.r as f32;
            planes[1][idx] = px.g as f32;
            planes[2][idx] = px.b as f32;
        }
    }

    for plane in &mut planes {
        let horiz = blur_pass(plane, w, h, &taps, true);
        *plane = blur_pass(&horiz, w, h, &taps, false);
    }

    let mut out = RgbImage::new(w, h);
    for (y, row) in out.rows_mut().enumerate() {
        for (x, px) in row.iter_mut().enumerate() {
            let idx = y * w + x;
            *px = Rgb::new(
                planes[0][idx].round().clamp(0.0, 255.0) as u8,
                planes[1][idx].round().clamp(0.0, 255.0) as u8,
                planes[2][idx].round().clamp(0.0, 255.0) as u8,
            );
        }
    }
    out
}

fn blur_pass(src: &[f32], w: usize, h: usize, taps: &[f32], horizontal: bool) -> Vec<f32> {
    let center = (taps.len() / 2) as isize;
    let mut out = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (i, &t) in taps.iter().enumerate() {
                let offset = i as isize - center;
                let (sx, sy) = if horizontal {
                    ((x as isize + offset).clamp(0, w as isize - 1), y as isize)
                } else {
                    (x as isize, (y as isize + offset).clamp(0, h as isize - 1))
                };
                acc += t * src[sy as usize * w + sx as usize];
            }
            out[y * w + x] = acc;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_are_normalized_and_symmetric() {
        let taps = gaussian_taps(5, 1.0);
        let sum: f32 = taps.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!((taps[0] - taps[4]).abs() < 1e-6);
        assert!(taps[2] > taps[1]);
    }

    #[test]
    fn uniform_image_is_unchanged() {
        let img = RgbImage::from_pixels(4, 3, vec![Rgb::new(90, 10, 200); 12]);
        let out = gaussian_smooth(&img, 3, 0.8);
        assert_eq!(out.data, img.data);
    }

    #[test]
    fn step_edge_is_softened() {
        let mut img = RgbImage::new(6, 1);
        for x in 3..6 {
            img.set(x, 0, Rgb::new(255, 255, 255));
        }
        let out = gaussian_smooth(&img, 3, 1.0);
        let boundary = out.get(2, 0).r;
        assert!(boundary > 0, "blur should bleed across the step");
        assert!(boundary < 255);
    }
}
