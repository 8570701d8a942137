//! Augmentation pipeline components.
//!
//! This module contains the stages of the augmentation pipeline:
//! - **decode**: Load and decode images with input limits
//! - **encode**: Write transformed images back to disk
//! - **discovery**: Find class subdirectories and the images inside them
//! - **compare**: Side-by-side review composite
//! - **single**: Augment one file in place beside its source
//! - **dataset**: Mirror and augment a whole dataset tree

pub mod compare;
pub mod dataset;
pub mod decode;
pub mod discovery;
pub mod encode;
pub mod single;

// Re-exports for convenient access
pub use dataset::{DatasetStats, DatasetWalker};
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::FileDiscovery;
pub use encode::save_image;
pub use single::{AugmentOutcome, SingleFileRunner};
