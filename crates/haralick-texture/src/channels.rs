//! Output channel naming and collection
//!
//! A texture run produces eight independent raster channels, one per
//! descriptor. [`TextureKind`] gives each channel a stable index and name;
//! [`TextureSet`] owns the eight channels of one completed run.

use haralick_core::{Raster, Rect};

/// The eight texture channels, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Energy,
    Entropy,
    Correlation,
    InverseDifferenceMoment,
    Inertia,
    ClusterShade,
    ClusterProminence,
    HaralickCorrelation,
}

impl TextureKind {
    /// All channels in output order
    pub const ALL: [TextureKind; 8] = [
        TextureKind::Energy,
        TextureKind::Entropy,
        TextureKind::Correlation,
        TextureKind::InverseDifferenceMoment,
        TextureKind::Inertia,
        TextureKind::ClusterShade,
        TextureKind::ClusterProminence,
        TextureKind::HaralickCorrelation,
    ];

    /// Stable channel index
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable channel name
    pub fn name(self) -> &'static str {
        match self {
            TextureKind::Energy => "energy",
            TextureKind::Entropy => "entropy",
            TextureKind::Correlation => "correlation",
            TextureKind::InverseDifferenceMoment => "inverseDifferenceMoment",
            TextureKind::Inertia => "inertia",
            TextureKind::ClusterShade => "clusterShade",
            TextureKind::ClusterProminence => "clusterProminence",
            TextureKind::HaralickCorrelation => "haralickCorrelation",
        }
    }
}

/// The eight output rasters of one texture run
///
/// All channels share the extent of the input the run was computed from.
/// Each pixel of each channel was written exactly once by the run and is
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TextureSet {
    channels: [Raster; 8],
}

impl TextureSet {
    pub(crate) fn new(channels: [Raster; 8]) -> Self {
        TextureSet { channels }
    }

    /// Channel width in pixels
    pub fn width(&self) -> u32 {
        self.channels[0].width()
    }

    /// Channel height in pixels
    pub fn height(&self) -> u32 {
        self.channels[0].height()
    }

    /// Shared channel extent
    pub fn extent(&self) -> Rect {
        self.channels[0].extent()
    }

    /// Get one channel by kind
    pub fn channel(&self, kind: TextureKind) -> &Raster {
        &self.channels[kind.index()]
    }

    /// Iterate over (kind, channel) pairs in output order
    pub fn iter(&self) -> impl Iterator<Item = (TextureKind, &Raster)> {
        TextureKind::ALL.iter().map(|&kind| (kind, self.channel(kind)))
    }

    /// Consume the set, yielding the channels in output order
    pub fn into_channels(self) -> [Raster; 8] {
        self.channels
    }

    /// The energy channel
    pub fn energy(&self) -> &Raster {
        self.channel(TextureKind::Energy)
    }

    /// The entropy channel
    pub fn entropy(&self) -> &Raster {
        self.channel(TextureKind::Entropy)
    }

    /// The correlation channel
    pub fn correlation(&self) -> &Raster {
        self.channel(TextureKind::Correlation)
    }

    /// The inverse difference moment channel
    pub fn inverse_difference_moment(&self) -> &Raster {
        self.channel(TextureKind::InverseDifferenceMoment)
    }

    /// The inertia (contrast) channel
    pub fn inertia(&self) -> &Raster {
        self.channel(TextureKind::Inertia)
    }

    /// The cluster shade channel
    pub fn cluster_shade(&self) -> &Raster {
        self.channel(TextureKind::ClusterShade)
    }

    /// The cluster prominence channel
    pub fn cluster_prominence(&self) -> &Raster {
        self.channel(TextureKind::ClusterProminence)
    }

    /// The Haralick correlation channel
    pub fn haralick_correlation(&self) -> &Raster {
        self.channel(TextureKind::HaralickCorrelation)
    }
}
