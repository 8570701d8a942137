//! Error types for the Prism augmentation pipeline.
//!
//! Errors are organized by stage so messages carry the context a user needs
//! (file paths, dimensions, codec messages) without string matching.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Prism operations.
#[derive(Error, Debug)]
pub enum PrismError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Augmentation pipeline errors
    #[error("Augmentation error: {0}")]
    Augment(#[from] AugmentError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize configuration to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Augmentation pipeline errors, organized by stage.
///
/// The transform mode is a closed enum selected at the CLI boundary, so an
/// unknown mode cannot reach the pipeline and has no variant here.
#[derive(Error, Debug)]
pub enum AugmentError {
    /// Input file or directory does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Directory traversal failed
    #[error("Failed to read directory {path}: {message}")]
    ReadDir { path: PathBuf, message: String },

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Image encoding failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Copying the untouched original into the output tree failed
    #[error("Failed to copy {path}: {message}")]
    Copy { path: PathBuf, message: String },

    /// Creating an output class directory failed
    #[error("Failed to create directory {path}: {message}")]
    CreateDir { path: PathBuf, message: String },

    /// File exceeds size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Image dimensions exceed limit
    #[error("Image too large: {path} ({width}x{height} > {max_dim})")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_dim: u32,
    },
}

/// Convenience type alias for Prism results.
pub type Result<T> = std::result::Result<T, PrismError>;

/// Convenience type alias for pipeline-specific results.
pub type AugmentResult<T> = std::result::Result<T, AugmentError>;
