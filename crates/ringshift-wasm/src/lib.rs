//! Ringshift WASM - WebAssembly bindings for Ringshift
//!
//! This crate exposes the ringshift-core functionality to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for pixel grids
//! - `decode` - PNG/JPEG decoding
//! - `encode` - PNG/JPEG encoding
//! - `shift` - The ring shift transform and its shift bounds
//! - `histogram` - Per-channel histograms
//!
//! # Usage
//!
//! ```typescript
//! import init, { shift_image_bytes } from '@ringshift/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const png = shift_image_bytes(bytes, form.get('shift_pixels'));
//! ```

use ringshift_core::{Execution, ShiftBounds};
use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod histogram;
mod logging;
mod shift;
mod types;

// Re-export public types
pub use decode::{decode_image, detect_format};
pub use encode::{encode_jpeg, encode_png};
pub use histogram::{compute_histogram, JsHistogram};
pub use shift::{
    apply_ring_shift, apply_ring_shift_amount, apply_ring_shift_bounded, apply_ring_shift_request,
    JsShiftBounds,
};
pub use types::JsPixelGrid;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init(log::LevelFilter::Warn);
}

/// Change the console log level ("error", "warn", "info", "debug", "trace", "off").
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    logging::init(logging::parse_level(level));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Decode an uploaded image, shift its rings and return PNG bytes.
///
/// # Arguments
///
/// * `bytes` - PNG or JPEG file bytes
/// * `shift_raw` - Requested shift as text, clamped to [1, 1000], default 20
///
/// # Errors
///
/// Returns an error if the bytes can't be decoded.
#[wasm_bindgen]
pub fn shift_image_bytes(bytes: &[u8], shift_raw: &str) -> Result<Vec<u8>, JsValue> {
    ringshift_core::shift_image_bytes(
        bytes,
        shift_raw,
        &ShiftBounds::default(),
        Execution::Sequential,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))
}
