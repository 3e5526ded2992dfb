//! Perimeter tracing: the ordered boundary walk of a ring, plus gather and
//! scatter of pixel values along it.

use super::Ring;
use crate::channels::WorkingBuffer;

/// Ordered, non-repeating `(row, col)` positions around one ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerimeterTrace {
    pub ring: Ring,
    pub positions: Vec<(usize, usize)>,
}

impl PerimeterTrace {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Walk a ring's boundary clockwise from its top-left corner.
///
/// 1. Top row, `left..=right`
/// 2. Right column, `top+1..=bottom`
/// 3. Bottom row, `right-1` down to `left`
/// 4. Left column, `bottom-1` down to `top+1`
///
/// The trace has `2 * (right - left) + 2 * (bottom - top)` entries.
pub fn trace(ring: &Ring) -> PerimeterTrace {
    let Ring {
        top,
        bottom,
        left,
        right,
        ..
    } = *ring;

    let mut positions = Vec::with_capacity(ring.perimeter());
    positions.extend((left..=right).map(|col| (top, col)));
    positions.extend((top + 1..=bottom).map(|row| (row, right)));
    positions.extend((left..right).rev().map(|col| (bottom, col)));
    positions.extend((top + 1..bottom).rev().map(|row| (row, left)));

    debug_assert_eq!(positions.len(), ring.perimeter());

    PerimeterTrace {
        ring: *ring,
        positions,
    }
}

/// Read the pixels at each traced position, in trace order.
pub fn gather(buffer: &WorkingBuffer, trace: &PerimeterTrace) -> Vec<[u8; 3]> {
    trace
        .positions
        .iter()
        .map(|&(row, col)| buffer.get(row, col))
        .collect()
}

/// Write `values[i]` to the `i`-th traced position.
///
/// Only the ring's own cells are touched.
pub fn scatter(buffer: &mut WorkingBuffer, trace: &PerimeterTrace, values: &[[u8; 3]]) {
    debug_assert_eq!(trace.len(), values.len(), "one value per traced position");
    for (&(row, col), &value) in trace.positions.iter().zip(values) {
        buffer.set(row, col, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::decompose;
    use std::collections::HashSet;

    fn buffer(width: usize, height: usize) -> WorkingBuffer {
        let pixels = (0..width * height)
            .flat_map(|i| [i as u8, (i * 2) as u8, (i * 3) as u8])
            .collect();
        WorkingBuffer {
            width,
            height,
            pixels,
        }
    }

    #[test]
    fn test_trace_4x4_outer() {
        let ring = Ring::at(0, 4, 4).unwrap();
        let t = trace(&ring);
        assert_eq!(
            t.positions,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (0, 3),
                (1, 3),
                (2, 3),
                (3, 3),
                (3, 2),
                (3, 1),
                (3, 0),
                (2, 0),
                (1, 0),
            ]
        );
    }

    #[test]
    fn test_trace_2x2() {
        let ring = Ring::at(0, 2, 2).unwrap();
        assert_eq!(trace(&ring).positions, vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_trace_rectangular_inner_ring() {
        // 5 rows x 6 cols, layer 1: rows 1..=3, cols 1..=4
        let ring = Ring::at(1, 5, 6).unwrap();
        let t = trace(&ring);
        assert_eq!(t.len(), 2 * 3 + 2 * 2);
        assert_eq!(t.positions.first(), Some(&(1, 1)));
        assert_eq!(t.positions.last(), Some(&(2, 1)));
    }

    #[test]
    fn test_trace_is_non_repeating_and_on_ring() {
        for (h, w) in [(2, 2), (3, 5), (6, 4), (7, 7), (9, 2)] {
            for ring in decompose(h, w) {
                let t = trace(&ring);
                let unique: HashSet<_> = t.positions.iter().copied().collect();
                assert_eq!(unique.len(), t.len(), "{}x{} layer {}", h, w, ring.layer);
                assert!(t.positions.iter().all(|&(r, c)| ring.contains(r, c)));
            }
        }
    }

    #[test]
    fn test_gather_reads_in_trace_order() {
        let buf = buffer(3, 3);
        let t = trace(&Ring::at(0, 3, 3).unwrap());
        let values = gather(&buf, &t);
        let firsts: Vec<u8> = values.iter().map(|v| v[0]).collect();
        assert_eq!(firsts, vec![0, 1, 2, 5, 8, 7, 6, 3]);
    }

    #[test]
    fn test_scatter_only_touches_ring() {
        let mut buf = buffer(3, 3);
        let center = buf.get(1, 1);
        let t = trace(&Ring::at(0, 3, 3).unwrap());
        scatter(&mut buf, &t, &vec![[9, 9, 9]; t.len()]);
        assert_eq!(buf.get(1, 1), center);
        assert_eq!(buf.get(0, 0), [9, 9, 9]);
        assert_eq!(buf.get(2, 1), [9, 9, 9]);
    }

    #[test]
    fn test_gather_scatter_identity() {
        let mut buf = buffer(5, 4);
        let original = buf.clone();
        for ring in decompose(4, 5) {
            let t = trace(&ring);
            let values = gather(&buf, &t);
            scatter(&mut buf, &t, &values);
        }
        assert_eq!(buf, original);
    }
}
