//! Per-channel histograms of a pixel grid.
//!
//! One 256-bin histogram is produced for each channel of the grid's own
//! layout: a single intensity channel for gray, red/green/blue for RGB, and
//! red/green/blue/alpha for RGBA. Rendering is left to the caller.

use serde::{Deserialize, Serialize};

use crate::grid::{ChannelLayout, PixelGrid};

/// Number of bins in a full-resolution histogram.
pub const BINS: usize = 256;

/// Bin count used by the original result page plot.
pub const DISPLAY_BINS: usize = 30;

/// Histogram of one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelHistogram {
    /// Channel label ("Intensity", "Red", "Green", "Blue", "Alpha").
    pub name: String,
    /// Sample counts, `BINS` entries unless rebinned.
    pub bins: Vec<u32>,
}

impl ChannelHistogram {
    /// Largest bin count.
    pub fn max_value(&self) -> u32 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Total number of samples counted.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    /// Merge the current bins into `bins` equal-width buckets.
    ///
    /// Source bin `i` of `n` lands in bucket `i * bins / n`, so every bucket
    /// covers the same share of the value range. `bins` is clamped to
    /// `1..=n`.
    pub fn rebin(&self, bins: usize) -> ChannelHistogram {
        let source = self.bins.len();
        let bins = bins.clamp(1, source.max(1));
        let mut merged = vec![0u32; bins];
        for (index, &count) in self.bins.iter().enumerate() {
            merged[index * bins / source] += count;
        }
        ChannelHistogram {
            name: self.name.clone(),
            bins: merged,
        }
    }
}

/// Histograms for every channel of a grid, in channel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelHistograms {
    pub layout: ChannelLayout,
    pub channels: Vec<ChannelHistogram>,
}

impl ChannelHistograms {
    /// Find the maximum bin value across all channels for normalization.
    pub fn max_value(&self) -> u32 {
        self.channels
            .iter()
            .map(ChannelHistogram::max_value)
            .max()
            .unwrap_or(0)
    }

    /// Rebin every channel (see [`ChannelHistogram::rebin`]).
    pub fn rebin(&self, bins: usize) -> ChannelHistograms {
        ChannelHistograms {
            layout: self.layout,
            channels: self.channels.iter().map(|c| c.rebin(bins)).collect(),
        }
    }
}

/// Channel labels for a layout.
pub fn channel_names(layout: ChannelLayout) -> &'static [&'static str] {
    match layout {
        ChannelLayout::Gray => &["Intensity"],
        ChannelLayout::Rgb => &["Red", "Green", "Blue"],
        ChannelLayout::Rgba => &["Red", "Green", "Blue", "Alpha"],
    }
}

/// Compute per-channel histograms in a single pass over the samples.
///
/// # Example
/// ```
/// use ringshift_core::histogram::compute_histogram;
/// use ringshift_core::{ChannelLayout, PixelGrid};
///
/// let grid = PixelGrid::new(2, 1, ChannelLayout::Rgb, vec![255, 0, 0, 0, 255, 0]).unwrap();
/// let hist = compute_histogram(&grid);
/// assert_eq!(hist.channels[0].bins[255], 1);
/// assert_eq!(hist.channels[1].bins[255], 1);
/// ```
pub fn compute_histogram(grid: &PixelGrid) -> ChannelHistograms {
    let layout = grid.layout();
    let channels = layout.channels();
    let mut counts = vec![[0u32; BINS]; channels];

    for pixel in grid.samples().chunks_exact(channels) {
        for (channel, &value) in pixel.iter().enumerate() {
            counts[channel][value as usize] += 1;
        }
    }

    ChannelHistograms {
        layout,
        channels: channel_names(layout)
            .iter()
            .zip(counts)
            .map(|(name, bins)| ChannelHistogram {
                name: (*name).to_string(),
                bins: bins.to_vec(),
            })
            .collect(),
    }
}
