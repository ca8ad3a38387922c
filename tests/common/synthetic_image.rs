use image_segmenter::{Rgb, RgbImage};

/// Two horizontal bands: black rows on top, white rows below.
pub fn two_band_rgb(width: usize, height: usize) -> RgbImage {
    assert!(width > 0 && height > 1, "need at least two rows");
    let mut img = RgbImage::new(width, height);
    for y in height / 2..height {
        for x in 0..width {
            img.set(x, y, Rgb::new(255, 255, 255));
        }
    }
    img
}

/// Horizontal gradient stepping all three channels by `step` per column.
pub fn horizontal_gradient_rgb(width: usize, height: usize, step: u8) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = (x as u32 * step as u32).min(255) as u8;
            img.set(x, y, Rgb::new(v, v, v));
        }
    }
    img
}

/// Four flat quadrants with strongly different colors on every channel.
pub fn quadrant_rgb(side: usize) -> RgbImage {
    assert!(side >= 2 && side % 2 == 0, "side must be even");
    let colors = [
        Rgb::new(0, 0, 0),
        Rgb::new(100, 100, 100),
        Rgb::new(200, 200, 200),
        Rgb::new(50, 150, 250),
    ];
    let half = side / 2;
    let mut img = RgbImage::new(side, side);
    for y in 0..side {
        for x in 0..side {
            let quadrant = (y / half) * 2 + x / half;
            img.set(x, y, colors[quadrant]);
        }
    }
    img
}
