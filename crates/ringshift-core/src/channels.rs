//! Channel normalization between a grid's native layout and the 3-channel
//! working buffer the ring shift operates on.
//!
//! | Layout | normalize | denormalize |
//! |--------|-----------|-------------|
//! | Gray   | replicate the intensity into R, G and B | rounded mean of R, G, B |
//! | Rgb    | copy | copy |
//! | Rgba   | copy R, G, B; set alpha aside | reattach the saved alpha unchanged |
//!
//! The gray path is a replicate-then-average round trip rather than an
//! in-place single channel rotation. Because the three working channels of a
//! gray pixel always travel together, the mean reproduces the input exactly
//! for 8-bit samples.

use crate::grid::{ChannelLayout, PixelGrid};

/// RGB working buffer, 3 bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl WorkingBuffer {
    /// Bytes per pixel in the working buffer.
    pub const CHANNELS: usize = 3;

    /// Index of the first byte of the pixel at `(row, col)`.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.width + col) * Self::CHANNELS
    }

    /// Read the pixel at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> [u8; 3] {
        let idx = self.offset(row, col);
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Overwrite the pixel at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: [u8; 3]) {
        let idx = self.offset(row, col);
        self.pixels[idx..idx + Self::CHANNELS].copy_from_slice(&value);
    }
}

/// How to map a working buffer back to the source layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub layout: ChannelLayout,
    /// Alpha plane of an `Rgba` source, one byte per pixel.
    pub alpha: Option<Vec<u8>>,
}

/// Split a grid into its RGB working buffer and the data needed to undo it.
pub fn normalize(grid: &PixelGrid) -> (WorkingBuffer, Normalized) {
    let layout = grid.layout();
    let samples = grid.samples();
    let mut pixels = Vec::with_capacity(grid.pixel_count() * WorkingBuffer::CHANNELS);
    let mut alpha = None;

    match layout {
        ChannelLayout::Gray => {
            for &v in samples {
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        ChannelLayout::Rgb => pixels.extend_from_slice(samples),
        ChannelLayout::Rgba => {
            let mut plane = Vec::with_capacity(grid.pixel_count());
            for chunk in samples.chunks_exact(4) {
                pixels.extend_from_slice(&chunk[..3]);
                plane.push(chunk[3]);
            }
            alpha = Some(plane);
        }
    }

    let buffer = WorkingBuffer {
        width: grid.width() as usize,
        height: grid.height() as usize,
        pixels,
    };

    (buffer, Normalized { layout, alpha })
}

/// Rebuild a grid in the original layout from a working buffer.
pub fn denormalize(buffer: WorkingBuffer, normalized: &Normalized) -> PixelGrid {
    let samples = match normalized.layout {
        ChannelLayout::Gray => buffer
            .pixels
            .chunks_exact(3)
            .map(|px| average3(px[0], px[1], px[2]))
            .collect(),
        ChannelLayout::Rgb => buffer.pixels,
        ChannelLayout::Rgba => {
            let mut out = Vec::with_capacity(buffer.width * buffer.height * 4);
            let opaque;
            let alpha = match &normalized.alpha {
                Some(plane) => plane.as_slice(),
                None => {
                    opaque = vec![u8::MAX; buffer.width * buffer.height];
                    opaque.as_slice()
                }
            };
            for (px, &a) in buffer.pixels.chunks_exact(3).zip(alpha) {
                out.extend_from_slice(px);
                out.push(a);
            }
            out
        }
    };

    PixelGrid::from_parts(
        buffer.width as u32,
        buffer.height as u32,
        normalized.layout,
        samples,
    )
}

/// Rounded mean of three samples.
#[inline]
fn average3(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u16 + g as u16 + b as u16;
    ((sum + 1) / 3) as u8
}
