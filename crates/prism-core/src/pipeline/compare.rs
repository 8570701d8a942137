//! Side-by-side comparison composite: original left, processed right.

use image::{imageops, DynamicImage, GenericImageView, Rgb, RgbImage};

/// Gap in pixels between the two panes.
const GUTTER: u32 = 8;

/// Compose `original` and `processed` onto one canvas for visual review.
///
/// The panes keep their native sizes (rotation output can be larger than
/// its input); the canvas grows to fit the taller of the two.
pub fn side_by_side(original: &DynamicImage, processed: &DynamicImage) -> DynamicImage {
    let width = original.width() + GUTTER + processed.width();
    let height = original.height().max(processed.height());

    let mut canvas = RgbImage::from_pixel(width, height, Rgb([24, 24, 24]));
    imageops::replace(&mut canvas, &original.to_rgb8(), 0, 0);
    imageops::replace(
        &mut canvas,
        &processed.to_rgb8(),
        (original.width() + GUTTER) as i64,
        0,
    );

    DynamicImage::ImageRgb8(canvas)
}
