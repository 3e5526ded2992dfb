//! Lossless PNG encoding.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::ImageEncoder;

use super::{color_type, EncodeError};
use crate::grid::PixelGrid;

/// PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Encode a grid to PNG bytes in its own channel layout.
///
/// # Errors
///
/// Returns `EncodeError::EncodingFailed` if the encoder fails.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            grid.samples(),
            grid.width(),
            grid.height(),
            color_type(grid.layout()),
        )
        .map_err(|e| EncodeError::EncodingFailed {
            format: "PNG",
            message: e.to_string(),
        })?;

    let bytes = buffer.into_inner();
    debug_assert!(bytes.starts_with(&PNG_SIGNATURE));
    Ok(bytes)
}
