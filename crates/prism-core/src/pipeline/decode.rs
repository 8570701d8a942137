//! Image decoding with content-based format detection and input limits.

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::{AugmentError, AugmentResult};

/// Image decoder with configurable limits.
pub struct ImageDecoder {
    limits: LimitsConfig,
}

/// Result of decoding an image.
#[derive(Debug)]
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Original file size in bytes
    pub file_size: u64,
}

impl ImageDecoder {
    /// Create a new decoder with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Decode an image file with validation against the configured limits.
    ///
    /// A missing path yields [`AugmentError::PathNotFound`] before any byte
    /// is read; codec failures are propagated as [`AugmentError::Decode`].
    pub fn decode(&self, path: &Path) -> AugmentResult<DecodedImage> {
        if !path.exists() {
            return Err(AugmentError::PathNotFound(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path).map_err(|e| AugmentError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        // Compare exact bytes; whole megabytes are for the message only
        if metadata.len() > self.limits.max_file_size_mb * 1024 * 1024 {
            return Err(AugmentError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: metadata.len() / (1024 * 1024),
                max_mb: self.limits.max_file_size_mb,
            });
        }

        let bytes = std::fs::read(path).map_err(|e| AugmentError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let file_size = bytes.len() as u64;

        let image = Self::decode_bytes(bytes, path)?;
        let (width, height) = image.dimensions();
        if width > self.limits.max_image_dimension || height > self.limits.max_image_dimension {
            return Err(AugmentError::ImageTooLarge {
                path: path.to_path_buf(),
                width,
                height,
                max_dim: self.limits.max_image_dimension,
            });
        }

        Ok(DecodedImage {
            image,
            width,
            height,
            file_size,
        })
    }

    /// Decode from an in-memory buffer, detecting the format by content and
    /// falling back to the file extension.
    fn decode_bytes(bytes: Vec<u8>, path: &Path) -> AugmentResult<DynamicImage> {
        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| AugmentError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;

        if reader.format().is_none() {
            let format = ImageFormat::from_path(path).map_err(|_| AugmentError::Decode {
                path: path.to_path_buf(),
                message: format!(
                    "Unsupported format: .{}",
                    path.extension()
                        .and_then(|e| e.to_str())
                        .unwrap_or("unknown")
                ),
            })?;
            reader.set_format(format);
        }

        reader.decode().map_err(|e| AugmentError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;

    fn write_test_png(dir: &Path) -> PathBuf {
        let mut img = RgbImage::new(3, 3);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 1, Rgb([0, 255, 0]));
        img.put_pixel(2, 2, Rgb([0, 0, 255]));
        let path = dir.join("test.png");
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_decode_reads_pixels_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path());

        let decoder = ImageDecoder::new(LimitsConfig::default());
        let decoded = decoder.decode(&path).unwrap();

        assert_eq!((decoded.width, decoded.height), (3, 3));
        let rgb = decoded.image.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(rgb.get_pixel(1, 1), &Rgb([0, 255, 0]));
    }

    #[test]
    fn test_decode_missing_path_is_not_found() {
        let decoder = ImageDecoder::new(LimitsConfig::default());
        let err = decoder.decode(Path::new("does_not_exist.jpg")).unwrap_err();
        assert!(matches!(err, AugmentError::PathNotFound(_)));
    }

    #[test]
    fn test_decode_format_detected_by_content() {
        // A PNG saved with a .jpg extension still decodes (content wins)
        let dir = tempfile::tempdir().unwrap();
        let png = write_test_png(dir.path());
        let misnamed = dir.path().join("misnamed.jpg");
        std::fs::copy(&png, &misnamed).unwrap();

        let decoder = ImageDecoder::new(LimitsConfig::default());
        let decoded = decoder.decode(&misnamed).unwrap();
        assert_eq!((decoded.width, decoded.height), (3, 3));
    }

    #[test]
    fn test_decode_rejects_oversized_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path());

        let limits = LimitsConfig {
            max_image_dimension: 2,
            ..LimitsConfig::default()
        };
        let err = ImageDecoder::new(limits).decode(&path).unwrap_err();
        assert!(matches!(err, AugmentError::ImageTooLarge { .. }));
    }

    #[test]
    fn test_decode_rejects_file_just_over_the_size_limit() {
        // 1.5 MB against a 1 MB limit; a whole-MB comparison would admit it
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.jpg");
        std::fs::write(&path, vec![0u8; 1024 * 1024 * 3 / 2]).unwrap();

        let limits = LimitsConfig {
            max_file_size_mb: 1,
            ..LimitsConfig::default()
        };
        let err = ImageDecoder::new(limits).decode(&path).unwrap_err();
        assert!(matches!(err, AugmentError::FileTooLarge { max_mb: 1, .. }));
    }

    #[test]
    fn test_decode_garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.jpg");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let decoder = ImageDecoder::new(LimitsConfig::default());
        let err = decoder.decode(&path).unwrap_err();
        assert!(matches!(err, AugmentError::Decode { .. }));
    }
}
