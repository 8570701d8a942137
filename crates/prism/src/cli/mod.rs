//! CLI command implementations.

pub mod augment;
