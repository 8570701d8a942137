//! Dataset discovery: class subdirectories and the image files inside them.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ProcessingConfig;
use crate::error::{AugmentError, AugmentResult};

/// Discovers class directories and their images in a dataset tree.
pub struct FileDiscovery {
    config: ProcessingConfig,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    /// Immediate subdirectories of the dataset root, one per class label.
    ///
    /// Files sitting directly in the root are never part of a dataset and
    /// are skipped. Results are sorted; callers must not rely on order.
    pub fn class_dirs(&self, root: &Path) -> AugmentResult<Vec<PathBuf>> {
        if !root.exists() {
            return Err(AugmentError::PathNotFound(root.to_path_buf()));
        }

        let mut dirs = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| AugmentError::ReadDir {
                path: root.to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    /// Image files directly inside a class directory (non-recursive),
    /// filtered by the configured batch extensions.
    pub fn images_in(&self, class_dir: &Path) -> AugmentResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(class_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| AugmentError::ReadDir {
                path: class_dir.to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_file() && self.is_supported(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Check if a file has a supported extension (case-insensitive).
    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.config
                    .batch_extensions
                    .iter()
                    .any(|e| e.to_lowercase() == ext_lower)
            })
            .unwrap_or(false)
    }
}
