//! Image encoding to disk.

use image::DynamicImage;
use std::path::Path;

use crate::error::{AugmentError, AugmentResult};

/// Encode `image` to `path`, picking the codec from the file extension.
pub fn save_image(image: &DynamicImage, path: &Path) -> AugmentResult<()> {
    image.save(path).map_err(|e| AugmentError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
