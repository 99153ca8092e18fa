//! Haralick Core - Basic data structures for texture extraction
//!
//! This crate provides the fundamental data structures used throughout the
//! haralick texture-extraction library:
//!
//! - [`Raster`] - Scalar sample grid (`f64`, row-major)
//! - [`Rect`] - Rectangle regions for extents, windows and footprints
//! - [`Error`] / [`Result`] - Unified core error handling

pub mod error;
pub mod raster;
pub mod rect;

pub use error::{Error, Result};
pub use raster::Raster;
pub use rect::Rect;
