//! haralick-texture - Windowed GLCM texture extraction
//!
//! For every pixel of a scalar raster this crate builds a local gray-level
//! co-occurrence histogram over a configurable neighborhood and derives
//! eight texture descriptors from it, one output raster channel per
//! descriptor:
//!
//! - [`histogram`] - per-window joint probability tables
//! - [`features`] - the eight descriptors of one table
//! - [`filter`] - the tiled, parallel driver over a whole raster
//! - [`channels`] - stable channel naming and the output collection
//! - [`source`] - the input seam the driver reads through
//!
//! # Example
//!
//! ```
//! use haralick_core::Raster;
//! use haralick_texture::{TextureFilter, TextureKind, TextureParams};
//!
//! let input = Raster::from_fn(32, 32, |x, y| ((x + y) % 16) as f64).unwrap();
//!
//! let mut params = TextureParams::new(0.0, 16.0);
//! params.radius = (3, 3);
//! let filter = TextureFilter::new(params).unwrap();
//!
//! let textures = filter.run(&input).unwrap();
//! assert_eq!(textures.channel(TextureKind::Entropy).dimensions(), (32, 32));
//! ```

pub mod channels;
mod error;
pub mod features;
pub mod filter;
pub mod histogram;
pub mod source;

pub use channels::{TextureKind, TextureSet};
pub use error::{TextureError, TextureResult};
pub use features::TextureFeatures;
pub use filter::{TextureFilter, TextureParams};
pub use histogram::{CooccurrenceHistogram, bin_index};
pub use source::RasterSource;
