//! Geometric operations: arbitrary-angle rotation and axis flips.

use image::{imageops, Rgb, RgbImage};

/// Mirror horizontally.
pub fn flip_horizontal(image: &RgbImage) -> RgbImage {
    imageops::flip_horizontal(image)
}

/// Mirror vertically.
pub fn flip_vertical(image: &RgbImage) -> RgbImage {
    imageops::flip_vertical(image)
}

/// Rotate about the image center by `angle_deg`, keeping the input canvas.
///
/// Each output pixel is inverse-mapped into the source and sampled
/// bilinearly. Source coordinates falling outside the canvas are folded
/// back in by border reflection (the edge row itself is not doubled), so
/// uncovered corners pick up mirrored image content instead of a flat fill.
pub fn rotate(image: &RgbImage, angle_deg: f32) -> RgbImage {
    let (width, height) = image.dimensions();
    let theta = angle_deg.to_radians();
    let (sin, cos) = theta.sin_cos();
    let cx = (width as f32 - 1.0) / 2.0;
    let cy = (height as f32 - 1.0) / 2.0;

    let mut out = RgbImage::new(width, height);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let src_x = cx + dx * cos + dy * sin;
        let src_y = cy - dx * sin + dy * cos;
        *pixel = sample_bilinear(image, src_x, src_y);
    }
    out
}

/// Bilinear sample at fractional source coordinates with reflected borders.
fn sample_bilinear(image: &RgbImage, x: f32, y: f32) -> Rgb<u8> {
    let (width, height) = image.dimensions();

    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let x0 = x0 as i64;
    let y0 = y0 as i64;
    let xs = [reflect_101(x0, width), reflect_101(x0 + 1, width)];
    let ys = [reflect_101(y0, height), reflect_101(y0 + 1, height)];

    let weights = [
        (1.0 - fx) * (1.0 - fy),
        fx * (1.0 - fy),
        (1.0 - fx) * fy,
        fx * fy,
    ];
    let corners = [
        image.get_pixel(xs[0], ys[0]),
        image.get_pixel(xs[1], ys[0]),
        image.get_pixel(xs[0], ys[1]),
        image.get_pixel(xs[1], ys[1]),
    ];

    let mut channels = [0u8; 3];
    for (c, channel) in channels.iter_mut().enumerate() {
        let value: f32 = corners
            .iter()
            .zip(weights.iter())
            .map(|(p, w)| p.0[c] as f32 * w)
            .sum();
        *channel = value.round().clamp(0.0, 255.0) as u8;
    }
    Rgb(channels)
}

/// Fold an out-of-range coordinate back into `[0, len)` by reflection
/// without repeating the border pixel: -1 maps to 1, `len` maps to `len - 2`.
fn reflect_101(coord: i64, len: u32) -> u32 {
    let len = len as i64;
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let mut folded = coord.rem_euclid(period);
    if folded >= len {
        folded = period - folded;
    }
    folded as u32
}
