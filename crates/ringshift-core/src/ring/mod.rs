//! Concentric ring decomposition of a pixel grid.
//!
//! A grid of `H x W` pixels is split into rectangular rings ("layers"). Ring
//! `L` has `top = L`, `bottom = H - 1 - L`, `left = L`, `right = W - 1 - L`.
//! Rings never share a cell, so each one can be gathered, rotated and
//! scattered on its own.
//!
//! # Traversal Order
//!
//! Every ring is walked clockwise starting at its top-left corner:
//!
//! ```text
//!  0 → 1 → 2 → 3
//!  ↑           ↓
//! 11           4
//!  ↑           ↓
//! 10           5
//!  ↑           ↓
//!  9 ← 8 ← 7 ← 6
//! ```
//!
//! A positive shift moves each pixel forward along this walk, so the last
//! traced pixel lands on the top-left corner.

mod layer;
mod rotate;
mod perimeter;

pub use layer::{decompose, layer_count, Ring};
pub use rotate::{effective_shift, rotate_right};
pub use perimeter::{gather, scatter, trace, PerimeterTrace};
