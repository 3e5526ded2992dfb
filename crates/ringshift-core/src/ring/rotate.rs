//! Cyclic rotation of a sequence.

/// Reduce a shift request to `[0, len)`. Returns 0 for an empty sequence.
#[inline]
pub fn effective_shift(shift: u64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (shift % len as u64) as usize
}

/// Rotate `values` right by `shift` positions.
///
/// `out[i] = values[(i - shift) mod n]`: the last element moves to the
/// front for a shift of 1. Shifts that are a multiple of the length, and
/// empty inputs, return the sequence unchanged.
pub fn rotate_right<T: Clone>(values: &[T], shift: u64) -> Vec<T> {
    let mut out = values.to_vec();
    let k = effective_shift(shift, out.len());
    if k != 0 {
        out.rotate_right(k);
    }
    out
}
