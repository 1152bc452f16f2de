//! Color operations: brightness, per-channel shifts, and HSV shifts.
//!
//! HSV math follows the 8-bit buffer convention: hue lives on a half-degree
//! scale in `[0, 180)` and wraps, saturation and value live in `[0, 255]`
//! and clamp.

use image::{Rgb, RgbImage};

/// Add `delta` to every channel of every pixel, saturating at the 8-bit range.
pub fn shift_brightness(image: &RgbImage, delta: i32) -> RgbImage {
    shift_channels(image, [delta, delta, delta])
}

/// Add an independent delta to each color channel, saturating.
pub fn shift_channels(image: &RgbImage, shifts: [i32; 3]) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for (channel, shift) in pixel.0.iter_mut().zip(shifts.iter()) {
            *channel = clamp_u8(*channel as i32 + shift);
        }
    }
    out
}

/// Shift hue (wrapping), saturation and value (clamping).
pub fn shift_hsv(image: &RgbImage, hue: i32, sat: i32, val: i32) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let (h, s, v) = rgb_to_hsv(*pixel);
        let h = (h + hue as f32).rem_euclid(180.0);
        let s = (s + sat as f32).clamp(0.0, 255.0);
        let v = (v + val as f32).clamp(0.0, 255.0);
        *pixel = hsv_to_rgb(h, s, v);
    }
    out
}

fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// RGB to HSV with hue in `[0, 180)` and saturation/value in `[0, 255]`.
fn rgb_to_hsv(pixel: Rgb<u8>) -> (f32, f32, f32) {
    let r = pixel.0[0] as f32;
    let g = pixel.0[1] as f32;
    let b = pixel.0[2] as f32;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h_deg = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max * 255.0 };

    (h_deg / 2.0, s, max)
}

/// Inverse of [`rgb_to_hsv`].
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb<u8> {
    let h_deg = (h * 2.0).rem_euclid(360.0);
    let s = s / 255.0;
    let v = v / 255.0;

    let c = v * s;
    let sector = h_deg / 60.0;
    let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = v - c;
    Rgb([
        ((r1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        ((g1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        ((b1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_brightness_saturates() {
        let image = RgbImage::from_pixel(2, 2, Rgb([250, 128, 3]));

        let brighter = shift_brightness(&image, 60);
        assert_eq!(*brighter.get_pixel(0, 0), Rgb([255, 188, 63]));

        let darker = shift_brightness(&image, -60);
        assert_eq!(*darker.get_pixel(0, 0), Rgb([190, 68, 0]));
    }

    #[test]
    fn test_shift_channels_independent() {
        let image = RgbImage::from_pixel(1, 1, Rgb([100, 100, 100]));
        let shifted = shift_channels(&image, [10, -20, 0]);
        assert_eq!(*shifted.get_pixel(0, 0), Rgb([110, 80, 100]));
    }

    #[test]
    fn test_rgb_to_hsv_primaries() {
        let (h, s, v) = rgb_to_hsv(Rgb([255, 0, 0]));
        assert_eq!((h, s, v), (0.0, 255.0, 255.0));

        let (h, _, _) = rgb_to_hsv(Rgb([0, 255, 0]));
        assert_eq!(h, 60.0);

        let (h, _, _) = rgb_to_hsv(Rgb([0, 0, 255]));
        assert_eq!(h, 120.0);
    }

    #[test]
    fn test_rgb_to_hsv_gray_has_no_saturation() {
        let (h, s, v) = rgb_to_hsv(Rgb([77, 77, 77]));
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_eq!(v, 77.0);
    }

    #[test]
    fn test_hsv_roundtrip_within_rounding() {
        let samples = [
            Rgb([255, 0, 0]),
            Rgb([12, 200, 130]),
            Rgb([90, 90, 90]),
            Rgb([0, 0, 0]),
            Rgb([240, 17, 63]),
        ];
        for sample in samples {
            let (h, s, v) = rgb_to_hsv(sample);
            let back = hsv_to_rgb(h, s, v);
            for c in 0..3 {
                let diff = (back.0[c] as i32 - sample.0[c] as i32).abs();
                assert!(diff <= 1, "{:?} -> {:?}", sample, back);
            }
        }
    }

    #[test]
    fn test_shift_hsv_zero_is_near_identity() {
        let image = RgbImage::from_fn(8, 8, |x, y| {
            Rgb([(x * 31 % 256) as u8, (y * 17 % 256) as u8, 200])
        });
        let shifted = shift_hsv(&image, 0, 0, 0);
        for (a, b) in image.pixels().zip(shifted.pixels()) {
            for c in 0..3 {
                assert!((a.0[c] as i32 - b.0[c] as i32).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_shift_hsv_hue_wraps() {
        // Red sits at hue 0; shifting by -10 must wrap instead of clamping,
        // landing in the magenta range rather than staying red.
        let image = RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]));
        let shifted = shift_hsv(&image, -10, 0, 0);
        let pixel = shifted.get_pixel(0, 0);
        assert_eq!(pixel.0[0], 255);
        assert!(pixel.0[2] > 50, "expected blue component after wrap: {:?}", pixel);
    }

    #[test]
    fn test_shift_hsv_value_changes_brightness() {
        let image = RgbImage::from_pixel(1, 1, Rgb([100, 150, 200]));
        let brighter = shift_hsv(&image, 0, 0, 40);
        let darker = shift_hsv(&image, 0, 0, -40);
        assert!(brighter.get_pixel(0, 0).0[2] > 200);
        assert!(darker.get_pixel(0, 0).0[2] < 200);
    }
}
