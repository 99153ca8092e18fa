//! Windowed texture filter driver
//!
//! Runs the full extraction: validate the configuration once, compute the
//! input footprint the output extent requires, request it from the source in
//! a single read, then fill the eight output channels tile by tile on a
//! worker pool.
//!
//! Every output pixel is a pure function of its own input window, so the
//! tiling is only a scheduling decision: the output is bit-identical for
//! any tile height and any thread count.

use crate::channels::{TextureKind, TextureSet};
use crate::error::{TextureError, TextureResult};
use crate::features::TextureFeatures;
use crate::histogram::CooccurrenceHistogram;
use crate::source::RasterSource;
use haralick_core::{Raster, Rect};
use log::debug;
use rayon::prelude::*;

/// Row bands per worker thread; 2x gives the pool slack to rebalance when
/// some bands finish faster
const BANDS_PER_THREAD: usize = 2;

/// Configuration of one texture run
///
/// Set once before the run and invariant while it executes. Samples outside
/// `[input_min, input_max]` are clamped into the first or last bin, never
/// rejected, so the range should cover the expected data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureParams {
    /// Per-axis window half-extent
    pub radius: (u32, u32),
    /// Co-occurrence displacement vector; must be non-zero
    pub offset: (i32, i32),
    /// Histogram bins per axis
    pub bins_per_axis: usize,
    /// Lower bound of the expected sample range
    pub input_min: f64,
    /// Upper bound of the expected sample range; must exceed `input_min`
    pub input_max: f64,
}

impl TextureParams {
    /// Create parameters for the given sample range with the default
    /// 5x5 window (radius 2), unit diagonal offset and 8 bins per axis
    pub fn new(input_min: f64, input_max: f64) -> Self {
        TextureParams {
            radius: (2, 2),
            offset: (1, 1),
            bins_per_axis: 8,
            input_min,
            input_max,
        }
    }

    /// Check the configuration invariants
    ///
    /// # Errors
    ///
    /// - `InvalidBinCount` when `bins_per_axis` is 0
    /// - `InvalidInputRange` unless `input_min < input_max`
    /// - `ZeroOffset` when the offset is `(0, 0)`
    pub fn validate(&self) -> TextureResult<()> {
        if self.bins_per_axis == 0 {
            return Err(TextureError::InvalidBinCount);
        }
        if !(self.input_min < self.input_max) {
            return Err(TextureError::InvalidInputRange {
                min: self.input_min,
                max: self.input_max,
            });
        }
        if self.offset == (0, 0) {
            return Err(TextureError::ZeroOffset);
        }
        Ok(())
    }
}

/// Windowed GLCM texture filter
///
/// Construction validates the parameters; a constructed filter is immutable
/// and can run any number of inputs.
///
/// # Examples
///
/// ```
/// use haralick_core::Raster;
/// use haralick_texture::{TextureFilter, TextureParams};
///
/// let input = Raster::new_with_value(16, 16, 5.0).unwrap();
/// let filter = TextureFilter::new(TextureParams::new(0.0, 10.0)).unwrap();
/// let textures = filter.run(&input).unwrap();
///
/// // A constant raster has perfect energy everywhere
/// assert_eq!(textures.energy().get(8, 8).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct TextureFilter {
    params: TextureParams,
}

impl TextureFilter {
    /// Validate `params` and build the filter
    pub fn new(params: TextureParams) -> TextureResult<Self> {
        params.validate()?;
        Ok(TextureFilter { params })
    }

    /// The validated run configuration
    pub fn params(&self) -> &TextureParams {
        &self.params
    }

    /// Compute the input footprint required to produce `output`.
    ///
    /// The output rectangle is inflated by the window radius on every side,
    /// further extended to cover its own `+offset` and `-offset`
    /// translations, and clamped to `available`.
    ///
    /// # Errors
    ///
    /// `FootprintUnsatisfiable` when `available` cannot cover even the
    /// un-expanded `output`.
    pub fn input_footprint(&self, output: Rect, available: Rect) -> TextureResult<Rect> {
        if output.is_empty() || !available.contains_rect(&output) {
            return Err(TextureError::FootprintUnsatisfiable {
                needed: output,
                available,
            });
        }

        let (rx, ry) = self.params.radius;
        let expanded = output.inflate(rx as i32, ry as i32);
        let (dx, dy) = self.params.offset;
        let expanded = expanded
            .union(&expanded.translate(dx, dy))
            .union(&expanded.translate(-dx, -dy));

        // Never empty: the expansion contains output, which lies in available
        Ok(expanded.intersect(&available).unwrap_or(output))
    }

    /// Run the filter over the full extent of `source`
    ///
    /// The output channels share the source extent; the tile height is
    /// derived from the worker-pool size.
    pub fn run<S: RasterSource>(&self, source: &S) -> TextureResult<TextureSet> {
        let height = source.extent().h as usize;
        let bands = rayon::current_num_threads() * BANDS_PER_THREAD;
        self.run_tiled(source, (height / bands).max(1))
    }

    /// Run the filter with an explicit tile height.
    ///
    /// Output pixels never depend on each other, so this produces results
    /// bit-identical to [`run`](TextureFilter::run) for every `band_rows`;
    /// it exists for callers that want to control scheduling granularity.
    pub fn run_tiled<S: RasterSource>(
        &self,
        source: &S,
        band_rows: usize,
    ) -> TextureResult<TextureSet> {
        let output = source.extent();
        let footprint = self.input_footprint(output, source.extent())?;
        debug!(
            "texture run: output {:?}, footprint {:?}, band rows {}",
            output, footprint, band_rows
        );

        // Single input request before any pixel is processed
        let patch = source.read_region(footprint)?;

        let out_w = output.w as usize;
        let out_h = output.h as usize;
        let params = self.params;

        let mut features = vec![TextureFeatures::default(); out_w * out_h];
        let chunk = band_rows.max(1) * out_w;
        features
            .par_chunks_mut(chunk)
            .enumerate()
            .for_each(|(band_idx, band)| {
                let start = band_idx * chunk;
                for (i, slot) in band.iter_mut().enumerate() {
                    let idx = start + i;
                    let x = output.x + (idx % out_w) as i32;
                    let y = output.y + (idx / out_w) as i32;

                    let hist = CooccurrenceHistogram::from_window(
                        &patch,
                        (x - footprint.x, y - footprint.y),
                        params.radius,
                        params.offset,
                        params.bins_per_axis,
                        params.input_min,
                        params.input_max,
                    );
                    *slot = TextureFeatures::from_histogram(&hist);
                }
            });

        let channel = |kind: TextureKind| -> TextureResult<Raster> {
            let mut raster = Raster::new(out_w as u32, out_h as u32)?;
            for (dst, f) in raster.data_mut().iter_mut().zip(&features) {
                *dst = f.get(kind);
            }
            Ok(raster)
        };

        debug!("texture run complete: {} pixels x 8 channels", features.len());
        Ok(TextureSet::new([
            channel(TextureKind::Energy)?,
            channel(TextureKind::Entropy)?,
            channel(TextureKind::Correlation)?,
            channel(TextureKind::InverseDifferenceMoment)?,
            channel(TextureKind::Inertia)?,
            channel(TextureKind::ClusterShade)?,
            channel(TextureKind::ClusterProminence)?,
            channel(TextureKind::HaralickCorrelation)?,
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_4bin() -> TextureParams {
        TextureParams {
            radius: (1, 1),
            offset: (1, 0),
            bins_per_axis: 4,
            input_min: 0.0,
            input_max: 10.0,
        }
    }

    #[test]
    fn test_params_defaults() {
        let p = TextureParams::new(0.0, 255.0);
        assert_eq!(p.radius, (2, 2));
        assert_eq!(p.offset, (1, 1));
        assert_eq!(p.bins_per_axis, 8);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_params_validation_rejects_bad_config() {
        let mut p = TextureParams::new(0.0, 10.0);
        p.bins_per_axis = 0;
        assert!(matches!(
            p.validate(),
            Err(TextureError::InvalidBinCount)
        ));

        let mut p = TextureParams::new(0.0, 10.0);
        p.input_max = 0.0;
        assert!(matches!(
            p.validate(),
            Err(TextureError::InvalidInputRange { .. })
        ));

        let p = TextureParams::new(10.0, 0.0);
        assert!(p.validate().is_err());

        let mut p = TextureParams::new(0.0, 10.0);
        p.offset = (0, 0);
        assert!(matches!(p.validate(), Err(TextureError::ZeroOffset)));
    }

    #[test]
    fn test_filter_new_surfaces_config_errors() {
        assert!(TextureFilter::new(TextureParams::new(5.0, 5.0)).is_err());
        assert!(TextureFilter::new(TextureParams::new(0.0, 10.0)).is_ok());
    }

    #[test]
    fn test_input_footprint_expansion_and_clamp() {
        let filter = TextureFilter::new(params_4bin()).unwrap();
        let available = Rect::new_unchecked(0, 0, 100, 100);

        // Interior output: radius 1 on both axes, offset (1, 0) stretches x
        let fp = filter
            .input_footprint(Rect::new_unchecked(10, 10, 5, 5), available)
            .unwrap();
        assert_eq!(fp, Rect::new_unchecked(8, 9, 9, 7));

        // Corner output clamps at the available extent
        let fp = filter
            .input_footprint(Rect::new_unchecked(0, 0, 5, 5), available)
            .unwrap();
        assert_eq!(fp, Rect::new_unchecked(0, 0, 7, 6));

        // Full-extent output clamps back to the full extent
        let fp = filter.input_footprint(available, available).unwrap();
        assert_eq!(fp, available);
    }

    #[test]
    fn test_input_footprint_unsatisfiable() {
        let filter = TextureFilter::new(params_4bin()).unwrap();
        let available = Rect::new_unchecked(0, 0, 4, 4);

        let err = filter
            .input_footprint(Rect::new_unchecked(0, 0, 8, 8), available)
            .unwrap_err();
        assert!(matches!(err, TextureError::FootprintUnsatisfiable { .. }));

        assert!(
            filter
                .input_footprint(Rect::new_unchecked(0, 0, 0, 0), available)
                .is_err()
        );
    }

    #[test]
    fn test_run_constant_raster() {
        let input = Raster::new_with_value(6, 6, 5.0).unwrap();
        let filter = TextureFilter::new(params_4bin()).unwrap();
        let set = filter.run(&input).unwrap();

        assert_eq!(set.extent(), input.extent());
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(set.energy().get(x, y).unwrap(), 1.0);
                assert_eq!(set.entropy().get(x, y).unwrap(), 0.0);
                assert_eq!(set.inertia().get(x, y).unwrap(), 0.0);
                assert_eq!(set.inverse_difference_moment().get(x, y).unwrap(), 1.0);
            }
        }
    }

    #[test]
    fn test_run_single_pixel_radius_zero() {
        // The window never contains an offset partner: every channel falls
        // back to the degenerate-table value without failing
        let input = Raster::new_with_value(1, 1, 42.0).unwrap();
        let mut params = params_4bin();
        params.radius = (0, 0);
        let filter = TextureFilter::new(params).unwrap();

        let set = filter.run(&input).unwrap();
        for kind in TextureKind::ALL {
            assert_eq!(set.channel(kind).get(0, 0).unwrap(), 0.0, "{}", kind.name());
        }
    }

    #[test]
    fn test_run_tiled_band_height_does_not_change_output() {
        let input = Raster::from_fn(12, 9, |x, y| ((x * 7 + y * 5) % 13) as f64).unwrap();
        let mut params = params_4bin();
        params.input_max = 13.0;
        let filter = TextureFilter::new(params).unwrap();

        let whole = filter.run_tiled(&input, 9).unwrap();
        for band_rows in [1, 2, 3, 4, 100] {
            let tiled = filter.run_tiled(&input, band_rows).unwrap();
            for kind in TextureKind::ALL {
                let a = whole.channel(kind).data();
                let b = tiled.channel(kind).data();
                for (va, vb) in a.iter().zip(b) {
                    assert_eq!(va.to_bits(), vb.to_bits(), "{}", kind.name());
                }
            }
        }
    }
}
