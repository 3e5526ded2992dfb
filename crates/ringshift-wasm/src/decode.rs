//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode PNG or JPEG bytes into a grid
//! - [`detect_format`] - MIME type of PNG/JPEG bytes, if recognized
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@ringshift/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const grid = decode_image(bytes);
//! console.log(`Decoded ${grid.width}x${grid.height}, ${grid.channels} channels`);
//! ```

use crate::types::JsPixelGrid;
use ringshift_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG image from bytes.
///
/// Palette images are expanded to RGB/RGBA; gray stays single-channel.
///
/// # Errors
///
/// Returns an error if the bytes are not PNG/JPEG or are corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelGrid, JsValue> {
    decode::decode_image(bytes)
        .map(JsPixelGrid::from_grid)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// MIME type of the image in `bytes`, or `undefined` if unsupported.
#[wasm_bindgen]
pub fn detect_format(bytes: &[u8]) -> Option<String> {
    decode::detect_format(bytes).map(|f| f.mime_type().to_string())
}
