//! Raster - Scalar sample grid
//!
//! `Raster` is a 2D array of `f64` samples, the input and output container
//! for the texture-extraction engine. Samples are stored at full double
//! precision because the derived texture descriptors are accumulated in
//! `f64` and must round-trip without loss.
//!
//! # Examples
//!
//! ```
//! use haralick_core::Raster;
//!
//! // Create a 100x100 raster
//! let mut raster = Raster::new(100, 100).unwrap();
//!
//! // Set and get sample values
//! raster.set(10, 20, 0.5).unwrap();
//! assert_eq!(raster.get(10, 20).unwrap(), 0.5);
//! ```

use crate::error::{Error, Result};
use crate::rect::Rect;

/// Scalar raster
///
/// A 2D array of `f64` samples in row-major order with no padding. The
/// sample at (x, y) is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<f64>,
}

impl Raster {
    /// Create a new raster with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use haralick_core::Raster;
    ///
    /// let raster = Raster::new(640, 480).unwrap();
    /// assert_eq!(raster.width(), 640);
    /// assert_eq!(raster.height(), 480);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(Raster {
            width,
            height,
            data: vec![0.0f64; size],
        })
    }

    /// Create a new raster with all samples set to the specified value
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: f64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(Raster {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create a raster from raw data in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't
    /// match `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(Raster {
            width,
            height,
            data,
        })
    }

    /// Build a raster by evaluating a function at every pixel
    ///
    /// Useful for synthetic test patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use haralick_core::Raster;
    ///
    /// // 0/10 checkerboard
    /// let r = Raster::from_fn(3, 3, |x, y| if (x + y) % 2 == 0 { 0.0 } else { 10.0 }).unwrap();
    /// assert_eq!(r.get(0, 0).unwrap(), 0.0);
    /// assert_eq!(r.get(1, 0).unwrap(), 10.0);
    /// ```
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> f64,
    {
        let mut raster = Raster::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                raster.set_unchecked(x, y, f(x, y));
            }
        }
        Ok(raster)
    }

    /// Get the raster width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the raster dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the raster extent as a rectangle anchored at the origin
    #[inline]
    pub fn extent(&self) -> Rect {
        Rect::new_unchecked(0, 0, self.width as i32, self.height as i32)
    }

    /// Get the sample value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::PixelOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<f64> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Set the sample value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::PixelOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
        Ok(())
    }

    /// Get the sample value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> f64 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the sample value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: f64) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable access to the sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get a row of sample data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f64] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + (self.width as usize)]
    }

    /// Get a mutable row of sample data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f64] {
        let start = (y as usize) * (self.width as usize);
        &mut self.data[start..start + (self.width as usize)]
    }

    /// Set all samples to the specified value
    pub fn set_all(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Extract a sub-raster
    ///
    /// The region must lie entirely inside the raster extent and be
    /// non-empty. Used to serve footprint requests when a raster acts as an
    /// input source.
    ///
    /// # Errors
    ///
    /// Returns `Error::RegionOutsideRaster` otherwise.
    pub fn crop(&self, region: Rect) -> Result<Raster> {
        if region.is_empty() || !self.extent().contains_rect(&region) {
            return Err(Error::RegionOutsideRaster {
                region,
                width: self.width,
                height: self.height,
            });
        }

        let mut out = Raster::new(region.w as u32, region.h as u32)?;
        for row in 0..region.h {
            let sy = (region.y + row) as u32;
            let sx = region.x as usize;
            let src = &self.row(sy)[sx..sx + region.w as usize];
            out.row_mut(row as u32).copy_from_slice(src);
        }
        Ok(out)
    }

    /// Find the minimum sample value and its location
    ///
    /// Returns `(min_value, x, y)` for the first occurrence of the minimum.
    pub fn min(&self) -> Option<(f64, u32, u32)> {
        if self.data.is_empty() {
            return None;
        }

        let mut min_val = f64::MAX;
        let mut min_x = 0u32;
        let mut min_y = 0u32;

        for y in 0..self.height {
            for x in 0..self.width {
                let val = self.get_unchecked(x, y);
                if val < min_val {
                    min_val = val;
                    min_x = x;
                    min_y = y;
                }
            }
        }

        Some((min_val, min_x, min_y))
    }

    /// Find the minimum sample value only
    pub fn min_value(&self) -> Option<f64> {
        self.min().map(|(v, _, _)| v)
    }

    /// Find the maximum sample value and its location
    ///
    /// Returns `(max_value, x, y)` for the first occurrence of the maximum.
    pub fn max(&self) -> Option<(f64, u32, u32)> {
        if self.data.is_empty() {
            return None;
        }

        let mut max_val = f64::MIN;
        let mut max_x = 0u32;
        let mut max_y = 0u32;

        for y in 0..self.height {
            for x in 0..self.width {
                let val = self.get_unchecked(x, y);
                if val > max_val {
                    max_val = val;
                    max_x = x;
                    max_y = y;
                }
            }
        }

        Some((max_val, max_x, max_y))
    }

    /// Find the maximum sample value only
    pub fn max_value(&self) -> Option<f64> {
        self.max().map(|(v, _, _)| v)
    }

    /// Calculate the mean of all sample values
    pub fn mean(&self) -> Option<f64> {
        if self.data.is_empty() {
            return None;
        }

        let sum: f64 = self.data.iter().sum();
        Some(sum / self.data.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 200).unwrap();
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 200);
        assert_eq!(raster.dimensions(), (100, 200));
        assert_eq!(raster.extent(), Rect::new_unchecked(0, 0, 100, 200));

        for &val in raster.data() {
            assert_eq!(val, 0.0);
        }
    }

    #[test]
    fn test_raster_invalid_dimensions() {
        assert!(Raster::new(0, 100).is_err());
        assert!(Raster::new(100, 0).is_err());
        assert!(Raster::new(0, 0).is_err());
    }

    #[test]
    fn test_raster_from_data() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let raster = Raster::from_data(3, 2, data).unwrap();

        assert_eq!(raster.get(0, 0).unwrap(), 1.0);
        assert_eq!(raster.get(2, 0).unwrap(), 3.0);
        assert_eq!(raster.get(0, 1).unwrap(), 4.0);
        assert_eq!(raster.get(2, 1).unwrap(), 6.0);
    }

    #[test]
    fn test_raster_from_data_wrong_size() {
        let data = vec![1.0, 2.0, 3.0];
        assert!(Raster::from_data(3, 2, data).is_err());
    }

    #[test]
    fn test_raster_sample_access() {
        let mut raster = Raster::new(10, 10).unwrap();

        raster.set(5, 5, 1.5).unwrap();
        assert_eq!(raster.get(5, 5).unwrap(), 1.5);

        raster.set(0, 0, -0.5).unwrap();
        assert_eq!(raster.get(0, 0).unwrap(), -0.5);

        assert!(raster.get(10, 0).is_err());
        assert!(raster.get(0, 10).is_err());
        assert!(raster.set(10, 10, 0.0).is_err());
    }

    #[test]
    fn test_raster_row_access() {
        let mut raster = Raster::new(5, 3).unwrap();
        for x in 0..5 {
            raster.set(x, 1, (x + 1) as f64).unwrap();
        }

        assert_eq!(raster.row(1), &[1.0, 2.0, 3.0, 4.0, 5.0]);

        raster.row_mut(0)[0] = 10.0;
        assert_eq!(raster.get(0, 0).unwrap(), 10.0);
    }

    #[test]
    fn test_raster_crop() {
        let raster = Raster::from_fn(4, 4, |x, y| (y * 4 + x) as f64).unwrap();

        let sub = raster.crop(Rect::new_unchecked(1, 1, 2, 3)).unwrap();
        assert_eq!(sub.dimensions(), (2, 3));
        assert_eq!(sub.get(0, 0).unwrap(), 5.0);
        assert_eq!(sub.get(1, 0).unwrap(), 6.0);
        assert_eq!(sub.get(0, 2).unwrap(), 13.0);

        // Full-extent crop is an identity copy
        let full = raster.crop(raster.extent()).unwrap();
        assert_eq!(full.data(), raster.data());
    }

    #[test]
    fn test_raster_crop_rejects_out_of_bounds() {
        let raster = Raster::new(4, 4).unwrap();
        assert!(raster.crop(Rect::new_unchecked(2, 2, 3, 3)).is_err());
        assert!(raster.crop(Rect::new_unchecked(-1, 0, 2, 2)).is_err());
        assert!(raster.crop(Rect::new_unchecked(0, 0, 0, 2)).is_err());
    }

    #[test]
    fn test_raster_min_max_mean() {
        let mut raster = Raster::new_with_value(10, 10, 5.0).unwrap();
        raster.set(3, 7, -2.0).unwrap();
        raster.set(8, 2, 100.0).unwrap();

        let (min_val, min_x, min_y) = raster.min().unwrap();
        assert_eq!((min_val, min_x, min_y), (-2.0, 3, 7));
        assert_eq!(raster.min_value(), Some(-2.0));

        let (max_val, max_x, max_y) = raster.max().unwrap();
        assert_eq!((max_val, max_x, max_y), (100.0, 8, 2));
        assert_eq!(raster.max_value(), Some(100.0));

        let expected_mean = (5.0 * 98.0 - 2.0 + 100.0) / 100.0;
        assert!((raster.mean().unwrap() - expected_mean).abs() < 1e-12);
    }

    #[test]
    fn test_raster_set_all() {
        let mut raster = Raster::new(8, 8).unwrap();
        raster.set_all(3.25);
        for &val in raster.data() {
            assert_eq!(val, 3.25);
        }
    }
}
