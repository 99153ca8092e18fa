//! Haralick - GLCM texture extraction for Rust
//!
//! For every pixel of a scalar raster, builds a local gray-level
//! co-occurrence matrix over a configurable neighborhood and derives eight
//! texture descriptors from it (energy, entropy, correlation, inverse
//! difference moment, inertia, cluster shade, cluster prominence, Haralick
//! correlation), emitting one output raster channel per descriptor.
//!
//! # Example
//!
//! ```
//! use haralick::{Raster, texture::{TextureFilter, TextureParams}};
//!
//! let input = Raster::from_fn(24, 24, |x, y| ((x ^ y) % 8) as f64).unwrap();
//!
//! let filter = TextureFilter::new(TextureParams::new(0.0, 8.0)).unwrap();
//! let textures = filter.run(&input).unwrap();
//! assert_eq!(textures.energy().dimensions(), (24, 24));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use haralick_core::*;

// Re-export the engine as a module
pub use haralick_texture as texture;
