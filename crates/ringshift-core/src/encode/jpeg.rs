//! JPEG encoding for export.
//!
//! JPEG has no alpha channel, so only `Gray` and `Rgb` grids are accepted.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;

use super::{color_type, EncodeError};
use crate::grid::{ChannelLayout, PixelGrid};

/// Encode a grid to JPEG bytes.
///
/// # Arguments
///
/// * `grid` - Gray or RGB pixel grid
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Errors
///
/// Returns `EncodeError::UnsupportedLayout` for RGBA grids and
/// `EncodeError::EncodingFailed` if the encoder fails.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * Below 60: Low quality, visible artifacts that blur the shifted edges
pub fn encode_jpeg(grid: &PixelGrid, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if grid.layout() == ChannelLayout::Rgba {
        return Err(EncodeError::UnsupportedLayout {
            format: "JPEG",
            layout: grid.layout(),
        });
    }

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(
            grid.samples(),
            grid.width(),
            grid.height(),
            color_type(grid.layout()),
        )
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}
