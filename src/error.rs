//! Unified error types for the Longan library.
//!
//! Formatting setters validate their input before touching the element tree,
//! so every error is raised synchronously and a failed call leaves the tree
//! exactly as it was.
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Font size outside the representable range
    #[error("font size out of range: {0} (valid values are 0 < size <= 1638 half-points)")]
    FontSizeOutOfRange(f64),

    /// Font size not expressible as a whole or half number
    #[error("invalid font size: {0} (value must be a whole or half number, examples: 32, 32.5)")]
    InvalidFontSize(f64),
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
