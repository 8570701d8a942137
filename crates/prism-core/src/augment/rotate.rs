//! Random bounded rotation with canvas expansion and bicubic resampling.

use image::{DynamicImage, Rgb, RgbImage};
use rand::Rng;

/// Rotate counter-clockwise by an angle drawn uniformly from
/// `[0, max_angle_degrees)`.
///
/// The output canvas expands to the bounding box of the rotated rectangle,
/// so output dimensions generally exceed the input's and vary with the
/// drawn angle. Uncovered pixels are filled with black.
pub fn random_rotation<R: Rng>(
    img: &DynamicImage,
    max_angle_degrees: u32,
    rng: &mut R,
) -> DynamicImage {
    let angle = if max_angle_degrees == 0 {
        0.0
    } else {
        rng.gen_range(0.0..max_angle_degrees as f32)
    };
    rotate_by(img, angle)
}

/// Deterministic rotation kernel. An angle of exactly `0.0` returns a
/// pixel-exact copy with unchanged dimensions.
pub fn rotate_by(img: &DynamicImage, angle_degrees: f32) -> DynamicImage {
    if angle_degrees == 0.0 {
        return img.clone();
    }

    let rad = angle_degrees.to_radians();
    let (sin_a, cos_a) = rad.sin_cos();

    let src = img.to_rgb8();
    let (w, h) = src.dimensions();
    let (wf, hf) = (w as f32, h as f32);

    // Bounding box of the rotated rectangle
    let new_w = (wf * cos_a.abs() + hf * sin_a.abs()).ceil() as u32;
    let new_h = (wf * sin_a.abs() + hf * cos_a.abs()).ceil() as u32;

    let cx_src = wf / 2.0;
    let cy_src = hf / 2.0;
    let cx_dst = new_w as f32 / 2.0;
    let cy_dst = new_h as f32 / 2.0;

    // Zero-initialized buffer doubles as the black fill
    let mut out = RgbImage::new(new_w, new_h);

    for y in 0..new_h {
        for x in 0..new_w {
            let dx = x as f32 + 0.5 - cx_dst;
            let dy = y as f32 + 0.5 - cy_dst;

            // Inverse map: rotating the output counter-clockwise samples the
            // source clockwise. Screen coordinates have y pointing down.
            let sx = cx_src + dx * cos_a - dy * sin_a;
            let sy = cy_src + dx * sin_a + dy * cos_a;

            if let Some(pixel) = bicubic_sample(&src, sx - 0.5, sy - 0.5) {
                out.put_pixel(x, y, pixel);
            }
        }
    }

    DynamicImage::ImageRgb8(out)
}

/// Catmull-Rom cubic kernel (a = -0.5).
fn cubic_weight(t: f32) -> f32 {
    let t = t.abs();
    if t < 1.0 {
        1.5 * t * t * t - 2.5 * t * t + 1.0
    } else if t < 2.0 {
        -0.5 * t * t * t + 2.5 * t * t - 4.0 * t + 2.0
    } else {
        0.0
    }
}

/// Sample `img` at continuous pixel-index coordinates with a 4x4 bicubic
/// neighborhood. Taps beyond the border clamp to the edge; points wholly
/// outside the source return `None` so the caller keeps its fill color.
fn bicubic_sample(img: &RgbImage, x: f32, y: f32) -> Option<Rgb<u8>> {
    let (w, h) = img.dimensions();
    if x < -0.5 || y < -0.5 || x > w as f32 - 0.5 || y > h as f32 - 0.5 {
        return None;
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let mut acc = [0.0f32; 3];
    for j in -1..=2i64 {
        let wy = cubic_weight(fy - j as f32);
        if wy == 0.0 {
            continue;
        }
        let sy = (y0 + j).clamp(0, h as i64 - 1) as u32;
        for i in -1..=2i64 {
            let wx = cubic_weight(fx - i as f32);
            if wx == 0.0 {
                continue;
            }
            let sx = (x0 + i).clamp(0, w as i64 - 1) as u32;
            let pixel = img.get_pixel(sx, sy);
            let weight = wx * wy;
            for c in 0..3 {
                acc[c] += weight * pixel[c] as f32;
            }
        }
    }

    Some(Rgb([
        acc[0].round().clamp(0.0, 255.0) as u8,
        acc[1].round().clamp(0.0, 255.0) as u8,
        acc[2].round().clamp(0.0, 255.0) as u8,
    ]))
}
