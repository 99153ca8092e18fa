//! Input raster seam
//!
//! The driver consumes its input through [`RasterSource`]: it asks for the
//! source extent, computes the footprint it needs, and requests that region
//! exactly once before any pixel is processed. An in-memory [`Raster`] is
//! the canonical source; adapters over tiled or remote storage only need to
//! implement these two operations.

use crate::error::TextureResult;
use haralick_core::{Raster, Rect};

/// A readable scalar raster that can serve sub-region requests
pub trait RasterSource {
    /// The available extent of this source
    fn extent(&self) -> Rect;

    /// Materialize a sub-region of the source.
    ///
    /// `region` is always a sub-rectangle of [`extent`](RasterSource::extent)
    /// when called by the driver.
    fn read_region(&self, region: Rect) -> TextureResult<Raster>;
}

impl RasterSource for Raster {
    fn extent(&self) -> Rect {
        Raster::extent(self)
    }

    fn read_region(&self, region: Rect) -> TextureResult<Raster> {
        Ok(self.crop(region)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_source_round_trip() {
        let raster = Raster::from_fn(4, 3, |x, y| (y * 4 + x) as f64).unwrap();
        assert_eq!(RasterSource::extent(&raster), Rect::new_unchecked(0, 0, 4, 3));

        let patch = raster.read_region(Rect::new_unchecked(1, 0, 2, 2)).unwrap();
        assert_eq!(patch.dimensions(), (2, 2));
        assert_eq!(patch.get(0, 0).unwrap(), 1.0);
        assert_eq!(patch.get(1, 1).unwrap(), 6.0);
    }

    #[test]
    fn test_raster_source_rejects_uncovered_region() {
        let raster = Raster::new(4, 4).unwrap();
        assert!(raster.read_region(Rect::new_unchecked(2, 2, 4, 4)).is_err());
    }
}
