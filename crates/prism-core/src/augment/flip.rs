//! Horizontal flip as per-row reversal of the raw pixel buffer.

use image::{DynamicImage, ImageBuffer};

/// Mirror an image horizontally: output `(width-1-x, y)` equals input
/// `(x, y)`. Dimensions and color mode are preserved exactly.
///
/// The common 8-bit layouts are flipped by reversing each row of the raw
/// buffer in pixel-sized chunks; anything else falls back to the image
/// crate's generic flip.
pub fn flip_horizontal(img: &DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(buf) => {
            let flipped = flip_rows(buf.as_raw(), buf.width() as usize, 1);
            DynamicImage::ImageLuma8(
                ImageBuffer::from_raw(buf.width(), buf.height(), flipped)
                    .expect("flipped buffer matches source dimensions"),
            )
        }
        DynamicImage::ImageLumaA8(buf) => {
            let flipped = flip_rows(buf.as_raw(), buf.width() as usize, 2);
            DynamicImage::ImageLumaA8(
                ImageBuffer::from_raw(buf.width(), buf.height(), flipped)
                    .expect("flipped buffer matches source dimensions"),
            )
        }
        DynamicImage::ImageRgb8(buf) => {
            let flipped = flip_rows(buf.as_raw(), buf.width() as usize, 3);
            DynamicImage::ImageRgb8(
                ImageBuffer::from_raw(buf.width(), buf.height(), flipped)
                    .expect("flipped buffer matches source dimensions"),
            )
        }
        DynamicImage::ImageRgba8(buf) => {
            let flipped = flip_rows(buf.as_raw(), buf.width() as usize, 4);
            DynamicImage::ImageRgba8(
                ImageBuffer::from_raw(buf.width(), buf.height(), flipped)
                    .expect("flipped buffer matches source dimensions"),
            )
        }
        // 16-bit and float layouts go through the generic path
        _ => img.fliph(),
    }
}

/// Reverse each row of `raw` in `channels`-byte pixel chunks.
fn flip_rows(raw: &[u8], width: usize, channels: usize) -> Vec<u8> {
    let row_len = width * channels;
    let mut out = Vec::with_capacity(raw.len());
    for row in raw.chunks_exact(row_len) {
        for pixel in row.chunks_exact(channels).rev() {
            out.extend_from_slice(pixel);
        }
    }
    out
}
