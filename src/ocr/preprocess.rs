//! Image normalization before text recognition.
//!
//! Two transforms applied in sequence: nearest-neighbor upscaling, which
//! keeps glyph edges hard instead of smearing them, and a grayscale
//! contrast stretch that pushes mid-gray pixels toward black or white.
//! Both are deterministic and total.

use image::imageops::{self, FilterType};
use image::{GrayImage, ImageBuffer, Luma, RgbaImage};

/// Magnifies an image by an integer factor using nearest-neighbor
/// sampling. Zero-area inputs pass through untouched.
pub fn upscale(img: &RgbaImage, factor: u32) -> RgbaImage {
    if img.width() == 0 || img.height() == 0 {
        return img.clone();
    }
    let factor = factor.max(1);
    imageops::resize(
        img,
        img.width() * factor,
        img.height() * factor,
        FilterType::Nearest,
    )
}

/// Converts to grayscale and stretches contrast around mid-gray:
/// `gray = clamp((avg(r,g,b) - 128) * gain + 128, 0, 255)`.
pub fn boost_contrast(img: &RgbaImage, gain: f32) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = ImageBuffer::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let avg = (pixel[0] as f32 + pixel[1] as f32 + pixel[2] as f32) / 3.0;
        let gray = ((avg - 128.0) * gain + 128.0).clamp(0.0, 255.0);
        output.put_pixel(x, y, Luma([gray as u8]));
    }

    output
}

/// Full normalization pass: upscale, then contrast stretch.
pub fn prepare(img: &RgbaImage, factor: u32, gain: f32) -> GrayImage {
    boost_contrast(&upscale(img, factor), gain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_upscale_dimensions() {
        let img = RgbaImage::new(4, 3);
        let up = upscale(&img, 3);
        assert_eq!(up.dimensions(), (12, 9));
    }

    #[test]
    fn test_upscale_replicates_pixels() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        img.put_pixel(1, 0, Rgba([200, 210, 220, 255]));

        let up = upscale(&img, 3);

        // Nearest-neighbor: the left pixel fills a 3x3 block unchanged,
        // no blending at the block boundary
        assert_eq!(up.get_pixel(0, 0)[0], 10);
        assert_eq!(up.get_pixel(2, 2)[0], 10);
        assert_eq!(up.get_pixel(3, 0)[0], 200);
    }

    #[test]
    fn test_upscale_zero_area_passthrough() {
        let img = RgbaImage::new(0, 0);
        let up = upscale(&img, 3);
        assert_eq!(up.dimensions(), (0, 0));
    }

    #[test]
    fn test_contrast_midpoint_is_fixed() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([128, 128, 128, 255]));
        let out = boost_contrast(&img, 1.6);
        assert_eq!(out.get_pixel(0, 0)[0], 128);
    }

    #[test]
    fn test_contrast_stretches_toward_extremes() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([200, 200, 200, 255]));
        img.put_pixel(1, 0, Rgba([50, 50, 50, 255]));

        let out = boost_contrast(&img, 1.6);

        // (200 - 128) * 1.6 + 128 = 243.2
        assert_eq!(out.get_pixel(0, 0)[0], 243);
        // (50 - 128) * 1.6 + 128 = 3.2
        assert_eq!(out.get_pixel(1, 0)[0], 3);
    }

    #[test]
    fn test_contrast_clamps() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));

        let out = boost_contrast(&img, 1.6);

        assert_eq!(out.get_pixel(0, 0)[0], 255);
        assert_eq!(out.get_pixel(1, 0)[0], 0);
    }

    #[test]
    fn test_contrast_averages_channels() {
        let mut img = RgbaImage::new(1, 1);
        // avg(90, 128, 166) = 128 -> stays at the midpoint
        img.put_pixel(0, 0, Rgba([90, 128, 166, 255]));
        let out = boost_contrast(&img, 1.6);
        assert_eq!(out.get_pixel(0, 0)[0], 128);
    }

    #[test]
    fn test_prepare_combines_both_transforms() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([200, 200, 200, 255]));

        let out = prepare(&img, 2, 1.6);

        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get_pixel(1, 1)[0], 243);
    }
}
