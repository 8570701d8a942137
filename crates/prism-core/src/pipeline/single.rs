//! Single-file augmentation: one decode, one transform, one sibling write.

use std::path::{Path, PathBuf};

use image::GenericImageView;
use rand::Rng;

use crate::augment::TransformMode;
use crate::config::Config;
use crate::error::AugmentResult;

use super::compare::side_by_side;
use super::decode::ImageDecoder;
use super::encode::save_image;

/// Outcome of augmenting one file.
#[derive(Debug, Clone)]
pub struct AugmentOutcome {
    /// The untouched source file
    pub source: PathBuf,
    /// Where the transformed image was written
    pub output: PathBuf,
    /// Comparison composite, when requested
    pub comparison: Option<PathBuf>,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

/// Applies one transform to one file, writing the result beside the source.
pub struct SingleFileRunner {
    decoder: ImageDecoder,
    write_comparison: bool,
}

impl SingleFileRunner {
    /// Create a runner. `write_comparison` additionally emits a side-by-side
    /// composite of the original and the processed image.
    pub fn new(config: &Config, write_comparison: bool) -> Self {
        Self {
            decoder: ImageDecoder::new(config.limits.clone()),
            write_comparison,
        }
    }

    /// Decode `path`, apply `mode`, and write `<stem><suffix><ext>` in the
    /// source directory. The source file is never modified; a missing path
    /// fails before anything is written.
    pub fn run<R: Rng>(
        &self,
        path: &Path,
        mode: &TransformMode,
        rng: &mut R,
    ) -> AugmentResult<AugmentOutcome> {
        let start = std::time::Instant::now();

        let decoded = self.decoder.decode(path)?;
        tracing::debug!(
            "Decoded {:?} ({}x{}, {} bytes)",
            path,
            decoded.width,
            decoded.height,
            decoded.file_size
        );

        let processed = mode.apply(&decoded.image, rng);
        let output = suffixed_path(path, &mode.suffix());
        save_image(&processed, &output)?;

        let comparison = if self.write_comparison {
            let comparison_path = suffixed_path(&output, "_compare");
            let composite = side_by_side(&decoded.image, &processed);
            save_image(&composite, &comparison_path)?;
            Some(comparison_path)
        } else {
            None
        };

        tracing::debug!("Augmented {:?} in {:?}", path, start.elapsed());

        Ok(AugmentOutcome {
            source: path.to_path_buf(),
            output,
            comparison,
            width: processed.width(),
            height: processed.height(),
        })
    }
}

/// `<stem><suffix><extension>` beside the original.
pub(crate) fn suffixed_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{suffix}.{ext}"),
        None => format!("{stem}{suffix}"),
    };
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn write_test_png(dir: &Path, name: &str) -> PathBuf {
        let mut img = RgbImage::from_pixel(10, 6, Rgb([0, 0, 0]));
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        let path = dir.join(name);
        DynamicImage::ImageRgb8(img).save(&path).unwrap();
        path
    }

    #[test]
    fn test_suffixed_path_keeps_extension() {
        assert_eq!(
            suffixed_path(Path::new("/data/leaf.jpg"), "_flipped"),
            PathBuf::from("/data/leaf_flipped.jpg")
        );
        assert_eq!(
            suffixed_path(Path::new("/data/leaf"), "_zoomed_20"),
            PathBuf::from("/data/leaf_zoomed_20")
        );
    }

    #[test]
    fn test_run_writes_flipped_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_test_png(dir.path(), "leaf.png");

        let runner = SingleFileRunner::new(&Config::default(), false);
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = runner
            .run(&source, &TransformMode::FlipHorizontal, &mut rng)
            .unwrap();

        assert_eq!(outcome.output, dir.path().join("leaf_flipped.png"));
        assert!(outcome.comparison.is_none());

        // Source untouched, output mirrored
        let flipped = image::open(&outcome.output).unwrap().to_rgb8();
        assert_eq!(flipped.get_pixel(9, 0), &Rgb([255, 255, 255]));
        let original = image::open(&source).unwrap().to_rgb8();
        assert_eq!(original.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_run_missing_path_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.jpg");

        let runner = SingleFileRunner::new(&Config::default(), false);
        let mut rng = StdRng::seed_from_u64(0);
        let err = runner
            .run(&missing, &TransformMode::FlipHorizontal, &mut rng)
            .unwrap_err();

        assert!(matches!(err, crate::error::AugmentError::PathNotFound(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_run_with_comparison_composite() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_test_png(dir.path(), "leaf.png");

        let runner = SingleFileRunner::new(&Config::default(), true);
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = runner
            .run(
                &source,
                &TransformMode::Zoom {
                    max_zoom_percent: 20,
                },
                &mut rng,
            )
            .unwrap();

        let comparison = outcome.comparison.unwrap();
        assert_eq!(comparison, dir.path().join("leaf_zoomed_20_compare.png"));
        let composite = image::open(&comparison).unwrap();
        // Two 10-wide panes plus the gutter
        assert_eq!(composite.dimensions(), (10 + 8 + 10, 6));
    }

    #[test]
    fn test_run_rotation_names_output_by_max_angle() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_test_png(dir.path(), "leaf.png");

        let runner = SingleFileRunner::new(&Config::default(), false);
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = runner
            .run(
                &source,
                &TransformMode::Rotate {
                    max_angle_degrees: 25,
                },
                &mut rng,
            )
            .unwrap();

        assert_eq!(outcome.output, dir.path().join("leaf_rotated_25.png"));
        // Expanded canvas never shrinks
        assert!(outcome.width >= 10 && outcome.height >= 6);
    }
}
