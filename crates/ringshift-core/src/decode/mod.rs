//! Image decoding for the ring shift pipeline.
//!
//! This module turns uploaded file bytes into a [`PixelGrid`](crate::PixelGrid):
//! - PNG and JPEG, detected from the content rather than the file name
//! - Palette images expanded to RGB/RGBA by the decoder
//! - Gray+alpha promoted to RGBA, 16-bit and float samples reduced to 8 bits
//!
//! # Examples
//!
//! ```ignore
//! use ringshift_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let grid = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} {:?} image", grid.width(), grid.height(), grid.layout());
//! ```

mod decoder;
mod types;

pub use decoder::{decode_image, detect_format};
pub use types::{DecodeError, SourceFormat};
