//! Pixel transforms for dataset augmentation.
//!
//! Each transform is a pure function from one image buffer to a freshly
//! allocated output buffer; the source is never mutated. The randomized
//! transforms (rotation, zoom) take an explicit RNG so callers control
//! determinism via seeding.

pub mod flip;
pub mod rotate;
pub mod zoom;

pub use flip::flip_horizontal;
pub use rotate::{random_rotation, rotate_by};
pub use zoom::{random_zoom, zoom_by};

use image::DynamicImage;
use rand::Rng;

/// The closed set of augmentation modes.
///
/// Modes are selected at the CLI boundary and matched exhaustively here, so
/// an unknown mode cannot occur at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformMode {
    /// Deterministic horizontal mirror
    FlipHorizontal,
    /// Random counter-clockwise rotation in `[0, max_angle_degrees)`
    Rotate { max_angle_degrees: u32 },
    /// Random centered zoom in `[1.0, 1 + max_zoom_percent/100)`
    Zoom { max_zoom_percent: u32 },
}

impl TransformMode {
    /// Apply this transform, drawing any random parameters from `rng`.
    pub fn apply<R: Rng>(&self, img: &DynamicImage, rng: &mut R) -> DynamicImage {
        match self {
            TransformMode::FlipHorizontal => flip::flip_horizontal(img),
            TransformMode::Rotate { max_angle_degrees } => {
                rotate::random_rotation(img, *max_angle_degrees, rng)
            }
            TransformMode::Zoom { max_zoom_percent } => {
                zoom::random_zoom(img, *max_zoom_percent, rng)
            }
        }
    }

    /// Tag appended to the source file stem when naming the output file.
    pub fn suffix(&self) -> String {
        match self {
            TransformMode::FlipHorizontal => "_flipped".to_string(),
            TransformMode::Rotate { max_angle_degrees } => {
                format!("_rotated_{max_angle_degrees}")
            }
            TransformMode::Zoom { max_zoom_percent } => {
                format!("_zoomed_{max_zoom_percent}")
            }
        }
    }
}

impl std::fmt::Display for TransformMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformMode::FlipHorizontal => write!(f, "fliph"),
            TransformMode::Rotate { .. } => write!(f, "rotation"),
            TransformMode::Zoom { .. } => write!(f, "zoom"),
        }
    }
}
