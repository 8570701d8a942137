//! Random centered zoom: upscale, then crop back to the source dimensions.

use image::{imageops::FilterType, DynamicImage, GenericImageView};
use rand::Rng;

/// Zoom by a factor drawn uniformly from `[1.0, 1 + max_zoom_percent/100)`.
/// Output dimensions always equal input dimensions.
pub fn random_zoom<R: Rng>(img: &DynamicImage, max_zoom_percent: u32, rng: &mut R) -> DynamicImage {
    let factor = if max_zoom_percent == 0 {
        1.0
    } else {
        rng.gen_range(1.0..1.0 + max_zoom_percent as f32 / 100.0)
    };
    zoom_by(img, factor)
}

/// Deterministic zoom kernel. A factor of `1.0` (or one that truncates back
/// to the source dimensions) returns the content unchanged.
pub fn zoom_by(img: &DynamicImage, factor: f32) -> DynamicImage {
    if factor <= 1.0 {
        return img.clone();
    }

    let (width, height) = img.dimensions();
    // Truncate like the integer conversion in the size computation
    let new_width = (width as f32 * factor) as u32;
    let new_height = (height as f32 * factor) as u32;
    if new_width == width && new_height == height {
        return img.clone();
    }

    let scaled = img.resize_exact(new_width, new_height, FilterType::Lanczos3);

    // Centered crop window of the original size; floor keeps the window
    // biased toward the top-left on odd remainders
    let left = (new_width - width) / 2;
    let top = (new_height - height) / 2;
    scaled.crop_imm(left, top, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        let mut img = RgbImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 3) as u8, (y * 3) as u8, 64]);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_zoom_preserves_dimensions() {
        let img = gradient_image(50, 30);
        for factor in [1.01, 1.2, 1.5, 1.8] {
            let zoomed = zoom_by(&img, factor);
            assert_eq!(zoomed.dimensions(), (50, 30), "factor {factor}");
        }
    }

    #[test]
    fn test_zoom_factor_one_is_identity() {
        let img = gradient_image(24, 24);
        let zoomed = zoom_by(&img, 1.0);
        assert_eq!(zoomed.as_bytes(), img.as_bytes());
    }

    #[test]
    fn test_zoom_crops_the_center() {
        // Source has a white center block; after zooming, the center must
        // still be white while the border has been pushed out of frame.
        let mut img = RgbImage::from_pixel(40, 40, Rgb([0, 0, 0]));
        for y in 10..30 {
            for x in 10..30 {
                img.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
        let zoomed = zoom_by(&DynamicImage::ImageRgb8(img), 1.5).to_rgb8();

        let center = zoomed.get_pixel(20, 20);
        assert!(center[0] > 200 && center[1] > 200 && center[2] > 200);
    }

    #[test]
    fn test_random_zoom_preserves_dimensions() {
        let img = gradient_image(33, 17);
        let mut rng = StdRng::seed_from_u64(42);
        for max_zoom in [5, 10, 20, 40, 80] {
            let zoomed = random_zoom(&img, max_zoom, &mut rng);
            assert_eq!(zoomed.dimensions(), (33, 17), "max_zoom {max_zoom}");
        }
    }

    #[test]
    fn test_random_zoom_with_zero_percent() {
        let img = gradient_image(12, 12);
        let mut rng = StdRng::seed_from_u64(0);
        let zoomed = random_zoom(&img, 0, &mut rng);
        assert_eq!(zoomed.as_bytes(), img.as_bytes());
    }
}
