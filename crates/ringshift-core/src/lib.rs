//! Ringshift Core - concentric ring pixel rotation
//!
//! This crate splits an image into concentric rectangular rings and rotates
//! the pixels of every ring along its perimeter, plus the decode, encode and
//! histogram helpers around that transform.
//!
//! # Pipeline
//!
//! ```text
//! bytes ─ decode ─▶ PixelGrid ─ normalize ─▶ WorkingBuffer (RGB)
//!                                             │ decompose → trace → gather
//!                                             │ rotate_right → scatter
//! bytes ◀─ encode ─ PixelGrid ◀─ denormalize ─┘
//! ```

pub mod channels;
pub mod config;
pub mod decode;
pub mod encode;
pub mod grid;
pub mod histogram;
pub mod ring;
pub mod shift;

pub use config::{ConfigError, ShiftAmount, ShiftBounds};
pub use grid::{ChannelLayout, GridError, PixelGrid};
pub use shift::{apply_ring_shift, Execution};

/// Decode, shift and re-encode an image as PNG.
///
/// `shift_raw` is the unparsed request; it is clamped to `bounds` or
/// replaced by the default when unparsable.
///
/// # Errors
///
/// Returns an error if the bytes can't be decoded or the result can't be
/// encoded.
pub fn shift_image_bytes(
    bytes: &[u8],
    shift_raw: &str,
    bounds: &ShiftBounds,
    execution: Execution,
) -> Result<Vec<u8>, ProcessError> {
    let grid = decode::decode_image(bytes)?;
    let shift = ShiftAmount::parse(shift_raw, bounds);
    let shifted = apply_ring_shift(&grid, shift, execution);
    Ok(encode::encode_png(&shifted)?)
}

/// Errors from the byte-level [`shift_image_bytes`] pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Decode(#[from] decode::DecodeError),

    #[error(transparent)]
    Encode(#[from] encode::EncodeError),
}
