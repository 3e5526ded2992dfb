//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_png`] - Lossless PNG in the grid's own channel layout
//! - [`encode_jpeg`] - JPEG for gray and RGB grids
//!
//! # Example
//!
//! ```typescript
//! const png = encode_png(shifted);
//! const url = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use crate::types::JsPixelGrid;
use ringshift_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a grid to PNG bytes.
#[wasm_bindgen]
pub fn encode_png(grid: &JsPixelGrid) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(grid.grid()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a grid to JPEG bytes.
///
/// # Arguments
///
/// * `grid` - Gray or RGB grid (RGBA is rejected)
/// * `quality` - JPEG quality (1-100, recommended: 90)
#[wasm_bindgen]
pub fn encode_jpeg(grid: &JsPixelGrid, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(grid.grid(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}
