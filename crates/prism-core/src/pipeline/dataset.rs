//! Dataset walker: mirrors a class-subdirectory tree while augmenting.

use std::path::Path;
use std::time::Duration;

use rand::Rng;

use crate::augment::TransformMode;
use crate::config::Config;
use crate::error::{AugmentError, AugmentResult};

use super::decode::ImageDecoder;
use super::discovery::FileDiscovery;
use super::encode::save_image;
use super::single::suffixed_path;

/// Counters for one dataset run.
#[derive(Debug, Clone)]
pub struct DatasetStats {
    /// Class subdirectories mirrored
    pub classes: usize,
    /// Images copied and augmented
    pub images: usize,
    /// Wall-clock duration of the walk
    pub duration: Duration,
}

/// Applies one transform to every image in a class-subdirectory dataset,
/// mirroring the tree into an output root.
pub struct DatasetWalker {
    decoder: ImageDecoder,
    discovery: FileDiscovery,
}

impl DatasetWalker {
    /// Create a walker from the configured limits and batch extensions.
    pub fn new(config: &Config) -> Self {
        Self {
            decoder: ImageDecoder::new(config.limits.clone()),
            discovery: FileDiscovery::new(config.processing.clone()),
        }
    }

    /// Walk `input_root`, writing into `output_root`.
    ///
    /// Every class subdirectory is recreated under the output root; every
    /// matching image is copied unmodified under its original name and then
    /// written again with the transform applied and the mode suffix. The
    /// first failing file aborts the walk, leaving whatever was already
    /// written in place.
    pub fn run<R: Rng>(
        &self,
        input_root: &Path,
        output_root: &Path,
        mode: &TransformMode,
        rng: &mut R,
    ) -> AugmentResult<DatasetStats> {
        let start = std::time::Instant::now();

        let mut classes = 0;
        let mut images = 0;

        for class_dir in self.discovery.class_dirs(input_root)? {
            let class_name = class_dir
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_default();
            let output_class = output_root.join(&class_name);
            std::fs::create_dir_all(&output_class).map_err(|e| AugmentError::CreateDir {
                path: output_class.clone(),
                message: e.to_string(),
            })?;
            classes += 1;

            for image_path in self.discovery.images_in(&class_dir)? {
                let file_name = match image_path.file_name() {
                    Some(name) => name.to_os_string(),
                    None => continue,
                };

                // Untouched original first, byte-for-byte
                let original_copy = output_class.join(&file_name);
                std::fs::copy(&image_path, &original_copy).map_err(|e| AugmentError::Copy {
                    path: image_path.clone(),
                    message: e.to_string(),
                })?;

                let decoded = self.decoder.decode(&image_path)?;
                let processed = mode.apply(&decoded.image, rng);
                let output_path = suffixed_path(&original_copy, &mode.suffix());
                save_image(&processed, &output_path)?;

                images += 1;
                tracing::debug!("Augmented {:?} -> {:?}", image_path, output_path);
            }
        }

        let duration = start.elapsed();
        tracing::debug!(
            "Walked {:?}: {} classes, {} images in {:?}",
            input_root,
            classes,
            images,
            duration
        );

        Ok(DatasetStats {
            classes,
            images,
            duration,
        })
    }
}
