//! Ring shift: rotate every concentric ring of an image along its perimeter.
//!
//! # Algorithm
//!
//! 1. Normalize the grid into an RGB working buffer (alpha set aside)
//! 2. Decompose `H x W` into concentric rings, outermost first
//! 3. For each ring: trace its boundary, gather the pixels, rotate them right
//!    by `shift mod perimeter`, scatter them back
//! 4. Denormalize back to the source layout
//!
//! Rings cover disjoint cells. With [`Execution::Parallel`] every ring is
//! traced up front, workers gather and rotate against the shared read-only
//! buffer, and all writes happen after the join.

use log::{debug, trace as trace_log};

use crate::channels::{denormalize, normalize, WorkingBuffer};
use crate::config::ShiftAmount;
use crate::grid::PixelGrid;
use crate::ring::{decompose, effective_shift, gather, rotate_right, scatter, trace, PerimeterTrace};

/// How rings are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One ring after another on the calling thread.
    #[default]
    Sequential,
    /// Rings distributed over the rayon pool. Runs sequentially when the
    /// `parallel` feature is disabled.
    Parallel,
}

/// Rotate every ring of `grid` by `shift` positions.
///
/// The output has the same dimensions and channel layout as the input.
/// Grids with no valid ring (a single row or column) come back unchanged.
///
/// # Example
///
/// ```
/// use ringshift_core::{apply_ring_shift, ChannelLayout, Execution, PixelGrid, ShiftAmount};
///
/// let grid = PixelGrid::new(3, 3, ChannelLayout::Gray, (0..9).collect()).unwrap();
/// let out = apply_ring_shift(&grid, ShiftAmount::new(1), Execution::Sequential);
/// assert_eq!(out.samples(), &[3, 0, 1, 6, 4, 2, 7, 8, 5]);
/// ```
pub fn apply_ring_shift(grid: &PixelGrid, shift: ShiftAmount, execution: Execution) -> PixelGrid {
    let (mut buffer, normalized) = normalize(grid);
    let traces: Vec<PerimeterTrace> = decompose(buffer.height, buffer.width)
        .iter()
        .map(trace)
        .collect();

    debug!(
        "ring shift {}x{} {:?}: {} rings, shift {}, {:?}",
        buffer.width,
        buffer.height,
        normalized.layout,
        traces.len(),
        shift.get(),
        execution
    );

    match execution {
        Execution::Sequential => shift_sequential(&mut buffer, &traces, shift.into()),
        Execution::Parallel => shift_parallel(&mut buffer, &traces, shift.into()),
    }

    denormalize(buffer, &normalized)
}

/// Gather, rotate and scatter each ring in turn.
fn shift_sequential(buffer: &mut WorkingBuffer, traces: &[PerimeterTrace], shift: u64) {
    for t in traces {
        let rotated = rotate_ring(buffer, t, shift);
        scatter(buffer, t, &rotated);
    }
}

/// Read one ring and return its rotated values. Never writes.
fn rotate_ring(buffer: &WorkingBuffer, t: &PerimeterTrace, shift: u64) -> Vec<[u8; 3]> {
    let values = gather(buffer, t);
    trace_log!(
        "layer {}: {} cells, effective shift {}",
        t.ring.layer,
        t.len(),
        effective_shift(shift, t.len())
    );
    rotate_right(&values, shift)
}

#[cfg(feature = "parallel")]
fn shift_parallel(buffer: &mut WorkingBuffer, traces: &[PerimeterTrace], shift: u64) {
    use rayon::prelude::*;

    let rotated: Vec<Vec<[u8; 3]>> = {
        let shared: &WorkingBuffer = buffer;
        traces
            .par_iter()
            .map(|t| rotate_ring(shared, t, shift))
            .collect()
    };

    for (t, values) in traces.iter().zip(&rotated) {
        scatter(buffer, t, values);
    }
}

#[cfg(not(feature = "parallel"))]
fn shift_parallel(buffer: &mut WorkingBuffer, traces: &[PerimeterTrace], shift: u64) {
    shift_sequential(buffer, traces, shift);
}
