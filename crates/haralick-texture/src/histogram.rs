//! Windowed gray-level co-occurrence histograms
//!
//! For one window centered at a pixel, [`CooccurrenceHistogram::from_window`]
//! pairs each in-window sample with the sample a fixed offset away, bins both
//! intensities into a square 2D histogram, and normalizes it into a joint
//! probability table. The table is built per pixel and discarded once its
//! descriptors have been computed; nothing is shared across pixels.
//!
//! Every pair is recorded twice, once as `(i, j)` and once as `(j, i)`, so
//! the table is exactly symmetric regardless of offset direction. The
//! marginal row sums therefore equal the column sums, which the correlation
//! descriptors rely on.

use haralick_core::{Raster, Rect};

/// Map a sample value to a bin index.
///
/// The bin width is `(input_max - input_min) / bins`. Values outside
/// `[input_min, input_max]` are clamped into the first or last bin rather
/// than rejected, so callers should pick a range that matches their data.
#[inline]
pub fn bin_index(value: f64, input_min: f64, input_max: f64, bins: usize) -> usize {
    let bin_width = (input_max - input_min) / bins as f64;
    let idx = ((value - input_min) / bin_width).floor();
    if idx < 0.0 {
        0
    } else if idx >= bins as f64 {
        bins - 1
    } else {
        idx as usize
    }
}

/// A square joint histogram over intensity-bin pairs
///
/// After [`from_window`](CooccurrenceHistogram::from_window) the cells hold
/// a normalized probability table summing to 1, or all zeros when the window
/// produced no valid pair (degenerate window).
#[derive(Debug, Clone, PartialEq)]
pub struct CooccurrenceHistogram {
    /// Bins per axis
    bins: usize,
    /// Total raw pair count before normalization
    total: f64,
    /// Cell values, row-major `bins x bins`
    cells: Vec<f64>,
}

impl CooccurrenceHistogram {
    /// Create an all-zero histogram with `bins` bins per axis
    pub fn new(bins: usize) -> Self {
        CooccurrenceHistogram {
            bins,
            total: 0.0,
            cells: vec![0.0; bins * bins],
        }
    }

    /// Build the normalized co-occurrence table for one window.
    ///
    /// The window is every pixel within `radius` of `center`, intersected
    /// with the raster extent. For each window pixel whose offset partner
    /// also lies in the clamped window, both `(bin(p), bin(p+offset))` and
    /// the transposed cell are incremented; partners falling outside are
    /// skipped, with no wraparound and no synthetic padding. If no pair is
    /// valid the table stays all-zero.
    pub fn from_window(
        raster: &Raster,
        center: (i32, i32),
        radius: (u32, u32),
        offset: (i32, i32),
        bins: usize,
        input_min: f64,
        input_max: f64,
    ) -> Self {
        let mut hist = CooccurrenceHistogram::new(bins);

        let full = Rect::new_unchecked(
            center.0 - radius.0 as i32,
            center.1 - radius.1 as i32,
            2 * radius.0 as i32 + 1,
            2 * radius.1 as i32 + 1,
        );
        let Some(window) = full.intersect(&raster.extent()) else {
            return hist;
        };

        let (dx, dy) = offset;
        for y in window.y..window.bottom() {
            for x in window.x..window.right() {
                let (px, py) = (x + dx, y + dy);
                if !window.contains_point(px, py) {
                    continue;
                }
                let a = raster.get_unchecked(x as u32, y as u32);
                let b = raster.get_unchecked(px as u32, py as u32);
                hist.record_pair(
                    bin_index(a, input_min, input_max, bins),
                    bin_index(b, input_min, input_max, bins),
                );
            }
        }

        hist.normalize();
        hist
    }

    /// Bins per axis
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Total raw pair count accumulated before normalization
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Whether the window was degenerate (no valid pair recorded)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0.0
    }

    /// Get the cell value at (i, j)
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.bins + j]
    }

    /// Marginal row sum `r(i)` (equals the column sum by symmetry)
    pub fn row_sum(&self, i: usize) -> f64 {
        self.cells[i * self.bins..(i + 1) * self.bins].iter().sum()
    }

    /// Record one intensity pair, incrementing both (i, j) and (j, i)
    fn record_pair(&mut self, i: usize, j: usize) {
        self.cells[i * self.bins + j] += 1.0;
        self.cells[j * self.bins + i] += 1.0;
        self.total += 2.0;
    }

    /// Divide every cell by the total count; leaves zeros untouched when
    /// the total is zero
    fn normalize(&mut self) {
        if self.total > 0.0 {
            for cell in &mut self.cells {
                *cell /= self.total;
            }
        }
    }
}
