//! Closed-form trace lengths.
//!
//! Each stage of a run makes a fixed number of frame-memory accesses that
//! depends only on the geometry, so the length of a trace can be predicted
//! before running.

use crate::window::SearchWindow;
use fsbm_core::{FrameGeometry, Result};

/// Accesses made by searching one frame: two reads per pixel per candidate.
pub fn search_access_count(geometry: &FrameGeometry) -> Result<u64> {
    let block_pixels = (geometry.mb_size * geometry.mb_size) as u64;
    let mut total = 0u64;
    for block_l in 0..geometry.mb_rows {
        for block_c in 0..geometry.mb_cols {
            let window = SearchWindow::for_macroblock(geometry, block_l, block_c)?;
            total += 2 * block_pixels * window.candidate_count() as u64;
        }
    }
    Ok(total)
}

/// Accesses made by loading `frames` full Y/Cb/Cr frames: one write per byte.
pub fn loader_access_count(geometry: &FrameGeometry, frames: u64) -> u64 {
    geometry.frame_size() as u64 * frames
}

/// Accesses made by one frame rotation: a read and a write per byte.
pub fn rotation_access_count(geometry: &FrameGeometry) -> u64 {
    2 * geometry.frame_size() as u64
}
