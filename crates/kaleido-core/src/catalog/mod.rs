//! The fixed transformation catalog.
//!
//! Seven named image-to-image operations, each applied unconditionally with
//! an internally randomized magnitude drawn uniformly from a declared range.
//! The catalog is constructed once and never mutated at batch time; its
//! insertion order drives output file naming.
//!
//! Randomness is an injected dependency: every `apply` call draws fresh
//! parameters from the caller's RNG, so repeated application yields visually
//! related but not byte-identical results. Seed the RNG to reproduce a run.

mod color;
mod geometry;

use image::RgbImage;
use rand::Rng;

/// Rotation angle bound in degrees (symmetric).
const ROTATE_LIMIT_DEG: f32 = 40.0;

/// Brightness delta range as a fraction of full scale.
const BRIGHTER_RANGE: (f32, f32) = (0.2, 0.4);
const DARKER_RANGE: (f32, f32) = (-0.4, -0.2);

/// Per-channel shift bound for `rgb_shift` (symmetric).
const RGB_SHIFT_LIMIT: i32 = 20;

/// HSV channel shift bounds (symmetric). Hue is on the half-degree scale
/// used by 8-bit HSV buffers, so 20 here means 40 real degrees.
const HUE_SHIFT_LIMIT: i32 = 20;
const SAT_SHIFT_LIMIT: i32 = 30;
const VAL_SHIFT_LIMIT: i32 = 20;

/// A single catalog entry.
///
/// Every operation returns a freshly allocated buffer with the same
/// dimensions and channel count as its input; the input is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Rotate about the center, same canvas, reflected borders
    Rotate,
    /// Mirror horizontally
    HFlip,
    /// Mirror vertically
    VFlip,
    /// Increase brightness
    Brighter,
    /// Decrease brightness
    Darker,
    /// Shift each color channel independently
    RgbShift,
    /// Shift hue, saturation and value
    HueSaturationValue,
}

impl Transform {
    /// The catalog key, used as the output filename suffix.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Rotate => "rotate",
            Transform::HFlip => "hflip",
            Transform::VFlip => "vflip",
            Transform::Brighter => "brighter",
            Transform::Darker => "darker",
            Transform::RgbShift => "rgb_shift",
            Transform::HueSaturationValue => "hue_saturation_value",
        }
    }

    /// Human-readable description of the randomized parameter range.
    pub fn parameter_range(&self) -> &'static str {
        match self {
            Transform::Rotate => "angle in [-40, 40] degrees",
            Transform::HFlip | Transform::VFlip => "none (deterministic)",
            Transform::Brighter => "brightness factor in [0.2, 0.4]",
            Transform::Darker => "brightness factor in [-0.4, -0.2]",
            Transform::RgbShift => "per-channel shift in [-20, 20]",
            Transform::HueSaturationValue => {
                "hue in [-20, 20], saturation in [-30, 30], value in [-20, 20]"
            }
        }
    }

    /// Apply this transform, drawing any randomized magnitude from `rng`.
    pub fn apply(&self, pixels: &RgbImage, rng: &mut impl Rng) -> RgbImage {
        match self {
            Transform::Rotate => {
                let angle = rng.gen_range(-ROTATE_LIMIT_DEG..=ROTATE_LIMIT_DEG);
                geometry::rotate(pixels, angle)
            }
            Transform::HFlip => geometry::flip_horizontal(pixels),
            Transform::VFlip => geometry::flip_vertical(pixels),
            Transform::Brighter => {
                let factor = rng.gen_range(BRIGHTER_RANGE.0..=BRIGHTER_RANGE.1);
                color::shift_brightness(pixels, scale_delta(factor))
            }
            Transform::Darker => {
                let factor = rng.gen_range(DARKER_RANGE.0..=DARKER_RANGE.1);
                color::shift_brightness(pixels, scale_delta(factor))
            }
            Transform::RgbShift => {
                let shifts = [
                    rng.gen_range(-RGB_SHIFT_LIMIT..=RGB_SHIFT_LIMIT),
                    rng.gen_range(-RGB_SHIFT_LIMIT..=RGB_SHIFT_LIMIT),
                    rng.gen_range(-RGB_SHIFT_LIMIT..=RGB_SHIFT_LIMIT),
                ];
                color::shift_channels(pixels, shifts)
            }
            Transform::HueSaturationValue => {
                let hue = rng.gen_range(-HUE_SHIFT_LIMIT..=HUE_SHIFT_LIMIT);
                let sat = rng.gen_range(-SAT_SHIFT_LIMIT..=SAT_SHIFT_LIMIT);
                let val = rng.gen_range(-VAL_SHIFT_LIMIT..=VAL_SHIFT_LIMIT);
                color::shift_hsv(pixels, hue, sat, val)
            }
        }
    }
}

/// Brightness factors are fractions of the 8-bit full scale.
fn scale_delta(factor: f32) -> i32 {
    (factor * 255.0).round() as i32
}

/// The insertion-ordered set of all catalog entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Transform>,
}

impl Catalog {
    /// The standard seven-entry catalog.
    ///
    /// Order is part of the persisted layout contract: file naming iterates
    /// entries in this order.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                Transform::Rotate,
                Transform::HFlip,
                Transform::VFlip,
                Transform::Brighter,
                Transform::Darker,
                Transform::RgbShift,
                Transform::HueSaturationValue,
            ],
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Transform> {
        self.entries.iter()
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty (never true for the standard catalog).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Asymmetric gradient so that geometric transforms visibly change bytes.
    fn gradient_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([
                (x * 7 % 256) as u8,
                (y * 13 % 256) as u8,
                ((x + y) * 5 % 256) as u8,
            ])
        })
    }

    #[test]
    fn test_standard_catalog_order() {
        let catalog = Catalog::standard();
        let names: Vec<&str> = catalog.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "rotate",
                "hflip",
                "vflip",
                "brighter",
                "darker",
                "rgb_shift",
                "hue_saturation_value",
            ]
        );
        assert_eq!(catalog.len(), 7);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_all_transforms_preserve_shape() {
        let image = gradient_image(13, 9);
        let mut rng = StdRng::seed_from_u64(7);

        for transform in Catalog::standard().iter() {
            let out = transform.apply(&image, &mut rng);
            assert_eq!(out.dimensions(), image.dimensions(), "{}", transform.name());
        }
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let image = gradient_image(8, 8);
        let before = image.clone();
        let mut rng = StdRng::seed_from_u64(3);

        for transform in Catalog::standard().iter() {
            let _ = transform.apply(&image, &mut rng);
        }
        assert_eq!(image, before);
    }

    #[test]
    fn test_same_seed_reproduces_output() {
        let image = gradient_image(16, 12);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = Transform::Rotate.apply(&image, &mut rng_a);
        let b = Transform::Rotate.apply(&image, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_parameters_drawn_fresh_each_invocation() {
        let image = gradient_image(16, 12);
        let mut rng = StdRng::seed_from_u64(5);

        // Two draws from the same stream land on different angles, so the
        // outputs differ even though input and transform are identical.
        let first = Transform::Rotate.apply(&image, &mut rng);
        let second = Transform::Rotate.apply(&image, &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_deterministic_entries_ignore_rng_state() {
        let image = gradient_image(10, 6);
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);

        assert_eq!(
            Transform::HFlip.apply(&image, &mut rng_a),
            Transform::HFlip.apply(&image, &mut rng_b)
        );
        assert_eq!(
            Transform::VFlip.apply(&image, &mut rng_a),
            Transform::VFlip.apply(&image, &mut rng_b)
        );
    }

    #[test]
    fn test_brighter_raises_mean_darker_lowers_it() {
        let image = gradient_image(20, 20);
        let mean = |img: &RgbImage| {
            img.pixels()
                .flat_map(|p| p.0.iter().map(|&c| c as u64))
                .sum::<u64>() as f64
                / (20.0 * 20.0 * 3.0)
        };
        let mut rng = StdRng::seed_from_u64(11);

        let brighter = Transform::Brighter.apply(&image, &mut rng);
        let darker = Transform::Darker.apply(&image, &mut rng);
        assert!(mean(&brighter) > mean(&image));
        assert!(mean(&darker) < mean(&image));
    }
}
