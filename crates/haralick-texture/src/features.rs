//! Texture descriptors derived from a co-occurrence table
//!
//! Computes the eight classical GLCM texture coefficients from a normalized
//! joint probability table `g(i, j)`:
//!
//! - Energy `= Σ g(i,j)²`
//! - Entropy `= −Σ g(i,j)·log2 g(i,j)`, a cell contributing 0 when `g(i,j) = 0`
//! - Correlation `= Σ (i−μ)(j−μ)·g(i,j) / σ²`
//! - Inverse difference moment `= Σ g(i,j) / (1 + (i−j)²)`
//! - Inertia (contrast) `= Σ (i−j)²·g(i,j)`
//! - Cluster shade `= Σ ((i−μ)+(j−μ))³·g(i,j)`
//! - Cluster prominence `= Σ ((i−μ)+(j−μ))⁴·g(i,j)`
//! - Haralick correlation `= (Σ i·j·g(i,j) − μt²) / σt²`
//!
//! where `μ` and `σ²` are the mean and variance of the bin index weighted by
//! `g`, and `μt`, `σt²` are derived from the marginal row sums
//! `r(i) = Σ_j g(i,j)` as `μt = Σ i·r(i)` and `σt² = Σ (i−μt)²·r(i)`.
//! Zero-variance tables resolve both correlations to 0 instead of dividing
//! by zero, so a degenerate (all-zero or single-cell) table always yields
//! well-defined descriptors.

use crate::channels::TextureKind;
use crate::histogram::CooccurrenceHistogram;

/// The eight texture descriptors of one output pixel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextureFeatures {
    pub energy: f64,
    pub entropy: f64,
    pub correlation: f64,
    pub inverse_difference_moment: f64,
    pub inertia: f64,
    pub cluster_shade: f64,
    pub cluster_prominence: f64,
    pub haralick_correlation: f64,
}

impl TextureFeatures {
    /// Compute all eight descriptors from a normalized table.
    ///
    /// One deterministic pass over the `bins²` grid with no retained state;
    /// safe to invoke concurrently on independent tables.
    pub fn from_histogram(g: &CooccurrenceHistogram) -> Self {
        let n = g.bins();

        // Weighted mean over bin index and the marginal row sums
        let mut mean = 0.0;
        let mut row_sums = vec![0.0; n];
        for i in 0..n {
            for j in 0..n {
                let p = g.get(i, j);
                mean += i as f64 * p;
                row_sums[i] += p;
            }
        }

        let mut variance = 0.0;
        let mut energy = 0.0;
        let mut entropy = 0.0;
        let mut correlation_sum = 0.0;
        let mut inverse_difference_moment = 0.0;
        let mut inertia = 0.0;
        let mut cluster_shade = 0.0;
        let mut cluster_prominence = 0.0;
        let mut index_product = 0.0;
        for i in 0..n {
            let di = i as f64 - mean;
            for j in 0..n {
                let p = g.get(i, j);
                let dj = j as f64 - mean;
                let d = i as f64 - j as f64;

                variance += di * di * p;
                energy += p * p;
                if p > 0.0 {
                    entropy -= p * p.log2();
                }
                correlation_sum += di * dj * p;
                inverse_difference_moment += p / (1.0 + d * d);
                inertia += d * d * p;
                cluster_shade += (di + dj).powi(3) * p;
                cluster_prominence += (di + dj).powi(4) * p;
                index_product += i as f64 * j as f64 * p;
            }
        }

        // Marginal statistics over the row sums
        let mut marginal_mean = 0.0;
        for (i, &r) in row_sums.iter().enumerate() {
            marginal_mean += i as f64 * r;
        }
        let mut marginal_variance = 0.0;
        for (i, &r) in row_sums.iter().enumerate() {
            let d = i as f64 - marginal_mean;
            marginal_variance += d * d * r;
        }

        let correlation = if variance > 0.0 {
            correlation_sum / variance
        } else {
            0.0
        };
        let haralick_correlation = if marginal_variance > 0.0 {
            (index_product - marginal_mean * marginal_mean) / marginal_variance
        } else {
            0.0
        };

        TextureFeatures {
            energy,
            entropy,
            correlation,
            inverse_difference_moment,
            inertia,
            cluster_shade,
            cluster_prominence,
            haralick_correlation,
        }
    }

    /// Get one descriptor by channel kind
    pub fn get(&self, kind: TextureKind) -> f64 {
        match kind {
            TextureKind::Energy => self.energy,
            TextureKind::Entropy => self.entropy,
            TextureKind::Correlation => self.correlation,
            TextureKind::InverseDifferenceMoment => self.inverse_difference_moment,
            TextureKind::Inertia => self.inertia,
            TextureKind::ClusterShade => self.cluster_shade,
            TextureKind::ClusterProminence => self.cluster_prominence,
            TextureKind::HaralickCorrelation => self.haralick_correlation,
        }
    }
}
