//! Pixel grid types shared by every stage of the ring shift pipeline.
//!
//! A [`PixelGrid`] is a dense, row-major `height x width x channels` array of
//! 8-bit samples. Only three channel layouts are accepted (see
//! [`ChannelLayout`]); anything else is rejected when the grid is built, so
//! the transform itself never has to check.

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a [`PixelGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Channel count outside {1, 3, 4}.
    #[error("Unsupported channel count: {0} (expected 1, 3 or 4)")]
    UnsupportedChannelCount(usize),

    /// Sample buffer length doesn't match the dimensions and layout.
    #[error("Invalid sample data: expected {expected} bytes, got {actual}")]
    InvalidSampleData { expected: usize, actual: usize },
}

/// Channel layout of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelLayout {
    /// Single intensity channel.
    Gray,
    /// Red, green, blue.
    #[default]
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ChannelLayout {
    /// Map a raw channel count to a layout.
    pub fn from_channel_count(channels: usize) -> Result<Self, GridError> {
        match channels {
            1 => Ok(ChannelLayout::Gray),
            3 => Ok(ChannelLayout::Rgb),
            4 => Ok(ChannelLayout::Rgba),
            other => Err(GridError::UnsupportedChannelCount(other)),
        }
    }

    /// Number of samples per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Gray => 1,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// Returns true if the layout carries an alpha channel.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, ChannelLayout::Rgba)
    }
}

/// A decoded image in one of the supported channel layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    samples: Vec<u8>,
}

impl PixelGrid {
    /// Create a grid, validating dimensions and buffer length.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if either dimension is zero and
    /// `GridError::InvalidSampleData` if `samples.len()` is not
    /// `width * height * layout.channels()`.
    pub fn new(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        samples: Vec<u8>,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let expected = (width as usize) * (height as usize) * layout.channels();
        if samples.len() != expected {
            return Err(GridError::InvalidSampleData {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            samples,
        })
    }

    /// Assemble a grid whose invariants the caller already upholds.
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        samples: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(
            samples.len(),
            (width as usize) * (height as usize) * layout.channels(),
            "Sample buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            samples,
        }
    }

    /// Create a grid from a raw channel count instead of a layout.
    pub fn from_channel_count(
        width: u32,
        height: u32,
        channels: usize,
        samples: Vec<u8>,
    ) -> Result<Self, GridError> {
        let layout = ChannelLayout::from_channel_count(channels)?;
        Self::new(width, height, layout, samples)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Row-major samples, `channels()` per pixel.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the grid and return its sample buffer.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Samples of the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        let channels = self.channels();
        let start = (row * self.width as usize + col) * channels;
        &self.samples[start..start + channels]
    }

    /// Build a grid from a decoded `image` crate buffer.
    ///
    /// Luma images become `Gray`, RGB images `Rgb`; anything carrying alpha
    /// becomes `Rgba`. Wider sample types are reduced to 8 bits.
    pub fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let (layout, samples) = match img {
            DynamicImage::ImageLuma8(buf) => (ChannelLayout::Gray, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (ChannelLayout::Rgb, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (ChannelLayout::Rgba, buf.into_raw()),
            other if other.color().has_alpha() => {
                (ChannelLayout::Rgba, other.into_rgba8().into_raw())
            }
            other if !other.color().has_color() => {
                (ChannelLayout::Gray, other.into_luma8().into_raw())
            }
            other => (ChannelLayout::Rgb, other.into_rgb8().into_raw()),
        };

        Self::from_parts(width, height, layout, samples)
    }

    /// Convert to an `image` crate buffer of the matching color type.
    pub fn to_dynamic_image(&self) -> Option<DynamicImage> {
        let (w, h, samples) = (self.width, self.height, self.samples.clone());
        match self.layout {
            ChannelLayout::Gray => GrayImage::from_raw(w, h, samples).map(DynamicImage::ImageLuma8),
            ChannelLayout::Rgb => RgbImage::from_raw(w, h, samples).map(DynamicImage::ImageRgb8),
            ChannelLayout::Rgba => RgbaImage::from_raw(w, h, samples).map(DynamicImage::ImageRgba8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_channel_count() {
        assert_eq!(ChannelLayout::from_channel_count(1), Ok(ChannelLayout::Gray));
        assert_eq!(ChannelLayout::from_channel_count(3), Ok(ChannelLayout::Rgb));
        assert_eq!(ChannelLayout::from_channel_count(4), Ok(ChannelLayout::Rgba));
        assert_eq!(
            ChannelLayout::from_channel_count(2),
            Err(GridError::UnsupportedChannelCount(2))
        );
        assert_eq!(
            ChannelLayout::from_channel_count(0),
            Err(GridError::UnsupportedChannelCount(0))
        );
    }

    #[test]
    fn test_layout_channels() {
        assert_eq!(ChannelLayout::Gray.channels(), 1);
        assert_eq!(ChannelLayout::Rgb.channels(), 3);
        assert_eq!(ChannelLayout::Rgba.channels(), 4);
        assert!(ChannelLayout::Rgba.has_alpha());
        assert!(!ChannelLayout::Rgb.has_alpha());
    }

    #[test]
    fn test_grid_creation() {
        let grid = PixelGrid::new(4, 2, ChannelLayout::Rgb, vec![0u8; 4 * 2 * 3]).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.channels(), 3);
        assert_eq!(grid.pixel_count(), 8);
    }

    #[test]
    fn test_grid_rejects_zero_dimensions() {
        let err = PixelGrid::new(0, 5, ChannelLayout::Gray, vec![]).unwrap_err();
        assert_eq!(err, GridError::InvalidDimensions { width: 0, height: 5 });
    }

    #[test]
    fn test_grid_rejects_length_mismatch() {
        let err = PixelGrid::new(2, 2, ChannelLayout::Rgba, vec![0u8; 12]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidSampleData {
                expected: 16,
                actual: 12
            }
        );
    }

    #[test]
    fn test_grid_from_channel_count_rejects_two_channels() {
        let err = PixelGrid::from_channel_count(1, 1, 2, vec![0, 0]).unwrap_err();
        assert_eq!(err, GridError::UnsupportedChannelCount(2));
    }

    #[test]
    fn test_pixel_access() {
        let samples: Vec<u8> = (0..12).collect();
        let grid = PixelGrid::new(2, 2, ChannelLayout::Rgb, samples).unwrap();
        assert_eq!(grid.pixel(0, 0), &[0, 1, 2]);
        assert_eq!(grid.pixel(0, 1), &[3, 4, 5]);
        assert_eq!(grid.pixel(1, 0), &[6, 7, 8]);
        assert_eq!(grid.pixel(1, 1), &[9, 10, 11]);
    }

    #[test]
    fn test_dynamic_image_layouts() {
        let gray = DynamicImage::ImageLuma8(GrayImage::new(3, 2));
        assert_eq!(PixelGrid::from_dynamic_image(gray).layout(), ChannelLayout::Gray);

        let la = DynamicImage::ImageLumaA8(image::GrayAlphaImage::new(3, 2));
        let grid = PixelGrid::from_dynamic_image(la);
        assert_eq!(grid.layout(), ChannelLayout::Rgba);
        assert_eq!(grid.samples().len(), 3 * 2 * 4);

        let rgb16 = DynamicImage::ImageRgb16(image::ImageBuffer::new(3, 2));
        let grid = PixelGrid::from_dynamic_image(rgb16);
        assert_eq!(grid.layout(), ChannelLayout::Rgb);
        assert_eq!(grid.samples().len(), 3 * 2 * 3);
    }

    #[test]
    fn test_dynamic_image_round_trip() {
        let samples: Vec<u8> = (0..24).collect();
        let grid = PixelGrid::new(3, 2, ChannelLayout::Rgba, samples).unwrap();
        let img = grid.to_dynamic_image().unwrap();
        assert_eq!(PixelGrid::from_dynamic_image(img), grid);
    }

    #[test]
    fn test_grid_error_display() {
        let err = GridError::UnsupportedChannelCount(2);
        assert_eq!(err.to_string(), "Unsupported channel count: 2 (expected 1, 3 or 4)");
    }
}
