//! WASM bindings for the ring shift transform.
//!
//! The browser form sends the shift as text, so the main entry point takes
//! the raw string and applies the same clamping and fallback rules as the
//! core. Grids are always processed sequentially in WASM.

use crate::types::JsPixelGrid;
use ringshift_core::{apply_ring_shift as core_shift, Execution, ShiftAmount, ShiftBounds};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Accepted shift range, editable from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct JsShiftBounds {
    inner: ShiftBounds,
}

#[wasm_bindgen]
impl JsShiftBounds {
    /// Create bounds with the default range [1, 1000] and default 20.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsShiftBounds {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn min(&self) -> u32 {
        self.inner.min
    }

    #[wasm_bindgen(setter)]
    pub fn set_min(&mut self, value: u32) {
        self.inner.min = value;
    }

    #[wasm_bindgen(getter)]
    pub fn max(&self) -> u32 {
        self.inner.max
    }

    #[wasm_bindgen(setter)]
    pub fn set_max(&mut self, value: u32) {
        self.inner.max = value;
    }

    /// Shift used when the request can't be parsed
    #[wasm_bindgen(getter)]
    pub fn default_shift(&self) -> u32 {
        self.inner.default
    }

    #[wasm_bindgen(setter)]
    pub fn set_default_shift(&mut self, value: u32) {
        self.inner.default = value;
    }

    /// Check that `1 <= min <= default <= max`.
    pub fn is_valid(&self) -> bool {
        self.inner.validated().is_ok()
    }

    /// Serialize to a plain JS object
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain JS object; missing fields take defaults
    pub fn from_json(value: JsValue) -> Result<JsShiftBounds, JsValue> {
        let inner: ShiftBounds =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let inner = inner
            .validated()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl JsShiftBounds {
    pub(crate) fn bounds(&self) -> &ShiftBounds {
        &self.inner
    }
}

/// Shift field of a request object: a number or the raw form text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShiftField {
    Number(f64),
    Text(String),
}

/// `{ shift, bounds }` request object accepted by [`apply_ring_shift_request`].
#[derive(Debug, Deserialize)]
struct ShiftRequest {
    #[serde(default)]
    shift: Option<ShiftField>,
    #[serde(default)]
    bounds: ShiftBounds,
}

/// Resolve a request's shift field against its bounds.
fn resolve_shift(field: Option<&ShiftField>, bounds: &ShiftBounds) -> ShiftAmount {
    match field {
        Some(ShiftField::Number(n)) if n.is_finite() && n.fract() == 0.0 => {
            ShiftAmount::clamped(*n as i64, bounds)
        }
        Some(ShiftField::Text(raw)) => ShiftAmount::parse(raw, bounds),
        _ => ShiftAmount::fallback(bounds),
    }
}

/// Rotate every concentric ring of an image along its perimeter.
///
/// # Arguments
///
/// * `grid` - Source image (gray, RGB or RGBA)
/// * `shift_raw` - Requested shift as text; clamped to [1, 1000], and
///   replaced by 20 when it isn't an integer
///
/// # Returns
///
/// A new `JsPixelGrid` with the same dimensions and channel count.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const shifted = apply_ring_shift(grid, form.get('shift_pixels'));
/// ```
#[wasm_bindgen]
pub fn apply_ring_shift(grid: &JsPixelGrid, shift_raw: &str) -> JsPixelGrid {
    apply_ring_shift_bounded(grid, shift_raw, &JsShiftBounds::default())
}

/// Same as [`apply_ring_shift`] with caller-supplied bounds.
#[wasm_bindgen]
pub fn apply_ring_shift_bounded(
    grid: &JsPixelGrid,
    shift_raw: &str,
    bounds: &JsShiftBounds,
) -> JsPixelGrid {
    let shift = ShiftAmount::parse(shift_raw, bounds.bounds());
    shift_grid(grid, shift)
}

/// Apply a numeric shift, clamped to the default bounds.
#[wasm_bindgen]
pub fn apply_ring_shift_amount(grid: &JsPixelGrid, shift: i64) -> JsPixelGrid {
    let shift = ShiftAmount::clamped(shift, &ShiftBounds::default());
    shift_grid(grid, shift)
}

/// Apply a shift described by a `{ shift, bounds }` object.
///
/// `shift` may be a number or a string; `bounds` is optional.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const out = apply_ring_shift_request(grid, { shift: "35", bounds: { max: 500 } });
/// ```
#[wasm_bindgen]
pub fn apply_ring_shift_request(
    grid: &JsPixelGrid,
    request: JsValue,
) -> Result<JsPixelGrid, JsValue> {
    let request: ShiftRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let bounds = request
        .bounds
        .validated()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let shift = resolve_shift(request.shift.as_ref(), &bounds);
    Ok(shift_grid(grid, shift))
}

fn shift_grid(grid: &JsPixelGrid, shift: ShiftAmount) -> JsPixelGrid {
    let result = core_shift(grid.grid(), shift, Execution::Sequential);
    JsPixelGrid::from_grid(result)
}
