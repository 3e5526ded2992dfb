//! WASM-compatible wrapper types for pixel grids.
//!
//! This module provides a JavaScript-friendly type wrapping the core
//! `PixelGrid`, handling the conversion between Rust and JavaScript data
//! representations.

use ringshift_core::PixelGrid;
use wasm_bindgen::prelude::*;

/// A pixel grid wrapper for JavaScript.
///
/// # Memory Management
///
/// The sample data is stored in WASM memory. When you call `samples()`, a copy
/// is made to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsPixelGrid {
    inner: PixelGrid,
}

#[wasm_bindgen]
impl JsPixelGrid {
    /// Create a new JsPixelGrid from dimensions and sample data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - Samples per pixel: 1 (gray), 3 (RGB) or 4 (RGBA)
    /// * `samples` - Row-major sample data
    ///
    /// # Errors
    /// Throws if the channel count is unsupported or the buffer length
    /// doesn't match the dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        channels: usize,
        samples: Vec<u8>,
    ) -> Result<JsPixelGrid, JsValue> {
        PixelGrid::from_channel_count(width, height, channels, samples)
            .map(JsPixelGrid::from_grid)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Samples per pixel (1, 3 or 4)
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> usize {
        self.inner.channels()
    }

    /// Get the number of bytes in the sample buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.samples().len()
    }

    /// Returns sample data as Uint8Array.
    ///
    /// Note: This creates a copy of the sample data.
    pub fn samples(&self) -> Vec<u8> {
        self.inner.samples().to_vec()
    }
}

impl JsPixelGrid {
    pub(crate) fn from_grid(inner: PixelGrid) -> Self {
        Self { inner }
    }

    pub(crate) fn grid(&self) -> &PixelGrid {
        &self.inner
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_rejects_two_channels() {
        let err = JsPixelGrid::new(1, 1, 2, vec![0, 0]).err().unwrap();
        assert_eq!(
            err.as_string().as_deref(),
            Some("Unsupported channel count: 2 (expected 1, 3 or 4)")
        );
    }

    #[wasm_bindgen_test]
    fn test_rejects_short_buffer() {
        assert!(JsPixelGrid::new(2, 2, 3, vec![0; 5]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_garbage_fails() {
        assert!(crate::decode_image(b"fake image data").is_err());
    }
}
