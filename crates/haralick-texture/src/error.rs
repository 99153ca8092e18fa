//! Error types for haralick-texture
//!
//! Configuration errors are detected once, before any pixel is processed;
//! degenerate windows and zero-variance tables are not errors and resolve
//! to documented zero fallbacks instead.

use haralick_core::Rect;
use thiserror::Error;

/// Errors that can occur during texture extraction
#[derive(Debug, Error)]
pub enum TextureError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] haralick_core::Error),

    /// Zero bins per axis
    #[error("number of bins per axis must be at least 1")]
    InvalidBinCount,

    /// Degenerate input range
    #[error("invalid input range: min {min} must be below max {max}")]
    InvalidInputRange { min: f64, max: f64 },

    /// Zero co-occurrence offset
    #[error("co-occurrence offset must be non-zero")]
    ZeroOffset,

    /// The available input extent cannot cover the requested output extent
    #[error("input extent {available:?} cannot cover output extent {needed:?}")]
    FootprintUnsatisfiable { needed: Rect, available: Rect },
}

/// Result type for texture operations
pub type TextureResult<T> = Result<T, TextureError>;
