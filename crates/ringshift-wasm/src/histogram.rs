//! Histogram computation WASM bindings.
//!
//! Per-channel histograms of a grid, for drawing next to the shifted result.

use crate::types::JsPixelGrid;
use ringshift_core::histogram::{compute_histogram as compute_histogram_core, ChannelHistograms};
use wasm_bindgen::prelude::*;

/// Histogram result accessible from JavaScript.
///
/// One histogram per channel of the source grid: intensity for gray,
/// red/green/blue for RGB, plus alpha for RGBA.
#[wasm_bindgen]
pub struct JsHistogram {
    inner: ChannelHistograms,
}

#[wasm_bindgen]
impl JsHistogram {
    /// Number of channel histograms.
    #[wasm_bindgen(getter)]
    pub fn channel_count(&self) -> usize {
        self.inner.channels.len()
    }

    /// Label of channel `index` ("Intensity", "Red", ..., "Alpha").
    pub fn channel_name(&self, index: usize) -> Option<String> {
        self.inner.channels.get(index).map(|c| c.name.clone())
    }

    /// Bins of channel `index`, empty if out of range.
    pub fn channel(&self, index: usize) -> Vec<u32> {
        self.inner
            .channels
            .get(index)
            .map(|c| c.bins.clone())
            .unwrap_or_default()
    }

    /// Get maximum bin value across all channels.
    ///
    /// Useful for normalizing histogram display.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.inner.max_value()
    }

    /// Merge into `bins` equal-width buckets (the result page uses 30).
    pub fn rebin(&self, bins: usize) -> JsHistogram {
        JsHistogram {
            inner: self.inner.rebin(bins),
        }
    }

    /// Serialize to a plain JS object `{ layout, channels: [{ name, bins }] }`.
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Compute per-channel histograms of a grid.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_histogram(grid).rebin(30);
/// for (let i = 0; i < hist.channel_count; i++) {
///   drawBars(hist.channel_name(i), hist.channel(i), hist.max_value);
/// }
/// ```
#[wasm_bindgen]
pub fn compute_histogram(grid: &JsPixelGrid) -> JsHistogram {
    JsHistogram {
        inner: compute_histogram_core(grid.grid()),
    }
}
