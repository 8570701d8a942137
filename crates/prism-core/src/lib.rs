//! Prism Core - Embeddable dataset augmentation library.
//!
//! Prism applies basic augmentations (horizontal flip, random rotation,
//! random zoom) to single images or to class-subdirectory dataset trees,
//! mirroring the tree into an output root alongside the untouched originals.
//!
//! # Architecture
//!
//! ```text
//! Image → Decode → Transform (flip / rotate / zoom) → Encode
//! Dataset root → Discover classes → per image: copy original + write transformed
//! ```
//!
//! Processing is synchronous and single-file-at-a-time; randomness comes
//! from an explicitly passed RNG so fixed seeds reproduce whole runs.
//!
//! # Usage
//!
//! ```rust,ignore
//! use prism_core::{Config, Prism, TransformMode};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! fn main() -> prism_core::Result<()> {
//!     let prism = Prism::new(Config::load()?);
//!     let mut rng = StdRng::seed_from_u64(42);
//!     let mode = TransformMode::Rotate { max_angle_degrees: 15 };
//!     let outcome = prism.augment_file("./leaf.jpg".as_ref(), &mode, false, &mut rng)?;
//!     println!("wrote {:?}", outcome.output);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod augment;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-exports for convenient access
pub use augment::TransformMode;
pub use config::Config;
pub use error::{AugmentError, AugmentResult, ConfigError, PrismError, Result};
pub use pipeline::{AugmentOutcome, DatasetStats, DatasetWalker, SingleFileRunner};

use rand::Rng;
use std::path::Path;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prism processor - the main entry point for augmentation runs.
pub struct Prism {
    config: Config,
}

impl Prism {
    /// Create a new Prism instance with the given configuration.
    pub fn new(config: Config) -> Self {
        tracing::debug!("Initializing Prism v{}", VERSION);
        Self { config }
    }

    /// Create a new Prism instance with configuration from disk.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(Config::load()?))
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Augment a single file, writing the result beside the source.
    pub fn augment_file<R: Rng>(
        &self,
        path: &Path,
        mode: &TransformMode,
        write_comparison: bool,
        rng: &mut R,
    ) -> Result<AugmentOutcome> {
        let runner = SingleFileRunner::new(&self.config, write_comparison);
        Ok(runner.run(path, mode, rng)?)
    }

    /// Augment a dataset tree, mirroring it into `output_root`.
    pub fn augment_dataset<R: Rng>(
        &self,
        input_root: &Path,
        output_root: &Path,
        mode: &TransformMode,
        rng: &mut R,
    ) -> Result<DatasetStats> {
        let walker = DatasetWalker::new(&self.config);
        Ok(walker.run(input_root, output_root, mode, rng)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_prism_new_keeps_config() {
        let prism = Prism::new(Config::default());
        assert_eq!(prism.config().output.dir, "output_processed");
    }
}
