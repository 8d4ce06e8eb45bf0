//! Search windows in the previous luma frame.

use fsbm_core::{FrameGeometry, FsbmError, Result};
use std::ops::RangeInclusive;

/// Rectangle of the previous luma frame scanned for one macroblock.
///
/// Coordinates are inclusive pixel positions. The window is the macroblock
/// grown by the search range on every side, clipped to the frame; it is never
/// padded past the frame edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
    /// Top-left pixel of the macroblock the window was built for.
    pub origin: (usize, usize),
    mb_size: usize,
}

impl SearchWindow {
    /// Window for macroblock (`block_l`, `block_c`) of the grid.
    pub fn for_macroblock(geometry: &FrameGeometry, block_l: usize, block_c: usize) -> Result<Self> {
        if block_l >= geometry.mb_rows || block_c >= geometry.mb_cols {
            return Err(FsbmError::Configuration(format!(
                "macroblock ({block_l}, {block_c}) is outside the {}x{} grid",
                geometry.mb_rows, geometry.mb_cols
            )));
        }

        let m = geometry.mb_size;
        let p = geometry.search_range;
        let row = block_l * m;
        let col = block_c * m;

        let window = Self {
            top: row.saturating_sub(p),
            left: col.saturating_sub(p),
            bottom: (row + m - 1 + p).min(geometry.height() - 1),
            right: (col + m - 1 + p).min(geometry.width() - 1),
            origin: (row, col),
            mb_size: m,
        };

        // Unreachable for a validated geometry, whose window always holds the macroblock itself.
        if window.candidate_count() == 0 {
            return Err(FsbmError::Configuration(format!(
                "search window for macroblock ({block_l}, {block_c}) holds no candidate block"
            )));
        }
        Ok(window)
    }

    /// Rows a candidate block may start on.
    pub fn candidate_rows(&self) -> RangeInclusive<usize> {
        Self::candidate_span(self.top, self.bottom, self.mb_size)
    }

    /// Columns a candidate block may start on.
    pub fn candidate_cols(&self) -> RangeInclusive<usize> {
        Self::candidate_span(self.left, self.right, self.mb_size)
    }

    /// Number of candidate blocks that fit entirely inside the window.
    pub fn candidate_count(&self) -> usize {
        self.candidate_rows().count() * self.candidate_cols().count()
    }

    fn candidate_span(first: usize, last: usize, mb_size: usize) -> RangeInclusive<usize> {
        // An empty range when the window is narrower than a block.
        match (last + 1).checked_sub(mb_size) {
            Some(end) if end >= first => first..=end,
            _ => RangeInclusive::new(1, 0),
        }
    }
}
