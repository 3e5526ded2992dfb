//! Image encoding for shifted results.
//!
//! This module provides functionality for:
//! - Lossless PNG encoding for every channel layout
//! - JPEG encoding with configurable quality for gray and RGB grids
//!
//! # Examples
//!
//! ```ignore
//! use ringshift_core::encode::encode_png;
//!
//! let png_bytes = encode_png(&grid).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod jpeg;
mod png;

pub use self::jpeg::encode_jpeg;
pub use self::png::encode_png;

use thiserror::Error;

use crate::grid::ChannelLayout;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The target format can't store this channel layout.
    #[error("{format} cannot store {layout:?} images")]
    UnsupportedLayout {
        format: &'static str,
        layout: ChannelLayout,
    },

    /// The underlying encoder failed.
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// The image crate's color type for a layout.
pub(crate) fn color_type(layout: ChannelLayout) -> image::ExtendedColorType {
    match layout {
        ChannelLayout::Gray => image::ExtendedColorType::L8,
        ChannelLayout::Rgb => image::ExtendedColorType::Rgb8,
        ChannelLayout::Rgba => image::ExtendedColorType::Rgba8,
    }
}
