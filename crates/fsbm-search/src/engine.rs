//! Exhaustive block-matching search over the traced frame memory.
//!
//! Access order is part of the trace contract: macroblocks row-major,
//! candidates row-major within the window, pixels row-major within the
//! block, and for each pixel the reference (current frame) read comes
//! before the candidate (previous frame) read.

use crate::motion::{MotionField, MotionVector};
use crate::window::SearchWindow;
use fsbm_core::{FrameGeometry, FrameMemory, FsbmError, Plane, Result, TraceSink};
use tracing::trace;

/// Sum of absolute differences between the current-frame block at
/// `reference` and the previous-frame block at `candidate`.
///
/// Both origins are (row, column) luma pixel positions of the block's
/// top-left corner.
pub fn block_sad<S: TraceSink>(
    memory: &mut FrameMemory<S>,
    geometry: &FrameGeometry,
    reference: (usize, usize),
    candidate: (usize, usize),
) -> Result<u64> {
    let m = geometry.mb_size;
    let stride = geometry.width();
    let mut sad = 0u64;
    for y in 0..m {
        let ref_row = (reference.0 + y) * stride + reference.1;
        let cand_row = (candidate.0 + y) * stride + candidate.1;
        for x in 0..m {
            let rb = memory.read(Plane::CurrentY, ref_row + x)?;
            let sa = memory.read(Plane::PreviousY, cand_row + x)?;
            sad += u64::from(rb.abs_diff(sa));
        }
    }
    Ok(sad)
}

/// Find the best match for macroblock (`block_l`, `block_c`).
///
/// Every candidate in the window is scored. A candidate replaces the current
/// best when its SAD is less than or equal to the best so far, so among equal
/// costs the last one scanned wins.
pub fn search_macroblock<S: TraceSink>(
    memory: &mut FrameMemory<S>,
    geometry: &FrameGeometry,
    block_l: usize,
    block_c: usize,
) -> Result<MotionVector> {
    let window = SearchWindow::for_macroblock(geometry, block_l, block_c)?;
    let origin = window.origin;

    let mut best_cost = u64::MAX;
    let mut best = origin;
    for cand_l in window.candidate_rows() {
        for cand_c in window.candidate_cols() {
            let sad = block_sad(memory, geometry, origin, (cand_l, cand_c))?;
            if sad <= best_cost {
                best_cost = sad;
                best = (cand_l, cand_c);
            }
        }
    }

    Ok(MotionVector {
        dx: best.1 as i32 - origin.1 as i32,
        dy: best.0 as i32 - origin.0 as i32,
        cost: best_cost,
    })
}

/// Search every macroblock of the current frame, row-major, into `field`.
pub fn search_frame<S: TraceSink>(
    memory: &mut FrameMemory<S>,
    geometry: &FrameGeometry,
    field: &mut MotionField,
) -> Result<()> {
    if field.rows() != geometry.mb_rows || field.cols() != geometry.mb_cols {
        return Err(FsbmError::Configuration(format!(
            "motion table is {}x{} but the macroblock grid is {}x{}",
            field.rows(),
            field.cols(),
            geometry.mb_rows,
            geometry.mb_cols
        )));
    }

    for block_l in 0..geometry.mb_rows {
        for block_c in 0..geometry.mb_cols {
            let mv = search_macroblock(memory, geometry, block_l, block_c)?;
            trace!(block_l, block_c, dx = mv.dx, dy = mv.dy, cost = mv.cost, "Macroblock matched");
            field.set(block_l, block_c, mv);
        }
    }
    Ok(())
}
