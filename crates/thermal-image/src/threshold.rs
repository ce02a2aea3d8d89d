//! Luminance thresholding for thermal printer output.
//!
//! Classifies every pixel as ink or paper against a single luminance cut
//! point. The polarity is inverted on purpose: dark source pixels (icon and
//! logo strokes) become white, the color a thermal head leaves unburned, and
//! light pixels become black, the color that gets heat-marked. This is a hard
//! per-pixel cutoff with no dithering, so gradients will band; that is the
//! correct trade-off for a 1-bit print head.

use image::{Rgba, RgbaImage};
use tracing::debug;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

// Perceptual luminance weights 0.30/0.59/0.11, scaled by 100 so the cutoff
// comparison stays exact integer arithmetic.
const LUMA_R: u32 = 30;
const LUMA_G: u32 = 59;
const LUMA_B: u32 = 11;

/// Binarize an RGBA image against `threshold` with inverted polarity.
///
/// Per pixel: luminance `L = 0.30*R + 0.59*G + 0.11*B`; `L < threshold`
/// yields pure white (255,255,255,255), `L >= threshold` pure black
/// (0,0,0,255). Source alpha is ignored for classification and the output is
/// always fully opaque. Dimensions are preserved.
pub fn binarize_inverted(img: &RgbaImage, threshold: u8) -> RgbaImage {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Binarizing image (inverted polarity)");

    let cutoff = u32::from(threshold) * 100;
    let mut output = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels() {
        let out = if luminance_x100(pixel) < cutoff {
            WHITE
        } else {
            BLACK
        };
        output.put_pixel(x, y, out);
    }
    output
}

/// Pixel luminance scaled by 100. Exact for every 8-bit sample, which keeps
/// the `>=` boundary behavior free of float rounding.
fn luminance_x100(pixel: &Rgba<u8>) -> u32 {
    LUMA_R * u32::from(pixel[0]) + LUMA_G * u32::from(pixel[1]) + LUMA_B * u32::from(pixel[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_pixel(r: u8, g: u8, b: u8, a: u8) -> RgbaImage {
        RgbaImage::from_pixel(1, 1, Rgba([r, g, b, a]))
    }

    fn classify(r: u8, g: u8, b: u8, threshold: u8) -> Rgba<u8> {
        *binarize_inverted(&single_pixel(r, g, b, 255), threshold).get_pixel(0, 0)
    }

    #[test]
    fn output_is_strictly_black_or_white() {
        let mut img = RgbaImage::new(16, 16);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8, 200]);
        }

        let result = binarize_inverted(&img, 128);
        for pixel in result.pixels() {
            assert!(
                *pixel == BLACK || *pixel == WHITE,
                "unexpected pixel value {pixel:?}"
            );
        }
    }

    #[test]
    fn preserves_dimensions() {
        let img = RgbaImage::new(7, 13);
        let result = binarize_inverted(&img, 128);
        assert_eq!(result.dimensions(), (7, 13));
    }

    #[test]
    fn black_input_becomes_white() {
        assert_eq!(classify(0, 0, 0, 128), WHITE);
    }

    #[test]
    fn white_input_becomes_black() {
        assert_eq!(classify(255, 255, 255, 128), BLACK);
    }

    #[test]
    fn luminance_equal_to_threshold_is_black() {
        // Gray 128 has luminance exactly 128; the >= rule puts it on the
        // background (black) side.
        assert_eq!(classify(128, 128, 128, 128), BLACK);
        assert_eq!(classify(127, 127, 127, 128), WHITE);
    }

    #[test]
    fn threshold_zero_makes_everything_black() {
        // L < 0 can never hold, even for zero-luminance pixels.
        assert_eq!(classify(0, 0, 0, 0), BLACK);
        assert_eq!(classify(255, 255, 255, 0), BLACK);
        assert_eq!(classify(1, 2, 3, 0), BLACK);
    }

    #[test]
    fn threshold_max_whitens_everything_but_pure_white() {
        // Only (255,255,255) reaches luminance 255.
        assert_eq!(classify(255, 255, 255, 255), BLACK);
        assert_eq!(classify(254, 255, 255, 255), WHITE);
        assert_eq!(classify(255, 255, 254, 255), WHITE);
    }

    #[test]
    fn uses_perceptual_channel_weights() {
        // Pure red: L = 0.30 * 255 = 76.5. Equal weighting would give 85 and
        // flip these classifications.
        assert_eq!(classify(255, 0, 0, 76), BLACK);
        assert_eq!(classify(255, 0, 0, 77), WHITE);

        // Pure green: L = 0.59 * 255 = 150.45.
        assert_eq!(classify(0, 255, 0, 150), BLACK);
        assert_eq!(classify(0, 255, 0, 151), WHITE);

        // Pure blue: L = 0.11 * 255 = 28.05.
        assert_eq!(classify(0, 0, 255, 28), BLACK);
        assert_eq!(classify(0, 0, 255, 29), WHITE);
    }

    #[test]
    fn classification_is_monotone_in_threshold() {
        // Raising the cutoff can only move a pixel from black to white,
        // never back.
        let samples = [(123, 45, 200), (10, 10, 10), (200, 199, 2), (0, 128, 255)];
        for (r, g, b) in samples {
            let mut was_white = false;
            for t in 0..=255u8 {
                let is_white = classify(r, g, b, t) == WHITE;
                assert!(
                    is_white || !was_white,
                    "pixel ({r},{g},{b}) flipped white->black at threshold {t}"
                );
                was_white = is_white;
            }
        }
    }

    #[test]
    fn source_alpha_is_ignored_and_output_is_opaque() {
        // Fully transparent black still classifies by its RGB samples.
        let result = binarize_inverted(&single_pixel(0, 0, 0, 0), 128);
        assert_eq!(*result.get_pixel(0, 0), WHITE);

        let result = binarize_inverted(&single_pixel(255, 255, 255, 0), 128);
        assert_eq!(*result.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn input_is_not_mutated() {
        let img = single_pixel(90, 90, 90, 42);
        let _ = binarize_inverted(&img, 128);
        assert_eq!(*img.get_pixel(0, 0), Rgba([90, 90, 90, 42]));
    }
}
