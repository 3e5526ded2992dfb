//! Layer decomposition: which concentric rings a grid has.

/// One concentric rectangular ring, inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ring {
    /// Depth from the outer edge.
    pub layer: usize,
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Ring {
    /// Bounds of layer `layer` in an `height x width` grid.
    ///
    /// Returns `None` when the ring is degenerate (a single row, a single
    /// column, or empty).
    pub fn at(layer: usize, height: usize, width: usize) -> Option<Self> {
        let bottom = height.checked_sub(1 + layer)?;
        let right = width.checked_sub(1 + layer)?;
        let ring = Self {
            layer,
            top: layer,
            bottom,
            left: layer,
            right,
        };
        ring.is_valid().then_some(ring)
    }

    /// A ring is valid when it spans at least two rows and two columns.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.bottom > self.top && self.right > self.left
    }

    /// Number of cells on the ring's boundary walk.
    #[inline]
    pub fn perimeter(&self) -> usize {
        2 * (self.right - self.left) + 2 * (self.bottom - self.top)
    }

    /// Returns true if `(row, col)` lies on this ring.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let inside = row >= self.top && row <= self.bottom && col >= self.left && col <= self.right;
        inside && (row == self.top || row == self.bottom || col == self.left || col == self.right)
    }
}

/// Number of layers considered for an `height x width` grid.
///
/// `min(H, W) / 2`, raised to 1 so the outer boundary is always examined.
#[inline]
pub fn layer_count(height: usize, width: usize) -> usize {
    (height.min(width) / 2).max(1)
}

/// Compute the valid rings of an `height x width` grid, outermost first.
///
/// Degenerate layers are skipped, so every returned ring has a perimeter of
/// at least 4.
pub fn decompose(height: usize, width: usize) -> Vec<Ring> {
    (0..layer_count(height, width))
        .filter_map(|layer| Ring::at(layer, height, width))
        .collect()
}
