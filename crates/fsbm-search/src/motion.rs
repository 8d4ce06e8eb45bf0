//! Motion vectors and the per-frame motion vector table.

use fsbm_core::FrameGeometry;
use serde::{Deserialize, Serialize};

/// Best match found for one macroblock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MotionVector {
    /// Horizontal displacement (candidate column minus macroblock column).
    pub dx: i32,
    /// Vertical displacement (candidate row minus macroblock row).
    pub dy: i32,
    /// SAD of the selected candidate.
    pub cost: u64,
}

impl MotionVector {
    pub const ZERO: Self = Self {
        dx: 0,
        dy: 0,
        cost: 0,
    };
}

/// Row-major table of motion vectors, one per macroblock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionField {
    rows: usize,
    cols: usize,
    vectors: Vec<MotionVector>,
}

impl MotionField {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            vectors: vec![MotionVector::ZERO; rows * cols],
        }
    }

    /// Table sized for the macroblock grid of `geometry`.
    pub fn for_geometry(geometry: &FrameGeometry) -> Self {
        Self::new(geometry.mb_rows, geometry.mb_cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Clear every entry back to zero.
    pub fn reset(&mut self) {
        self.vectors.fill(MotionVector::ZERO);
    }

    pub fn get(&self, block_l: usize, block_c: usize) -> Option<&MotionVector> {
        if block_l < self.rows && block_c < self.cols {
            self.vectors.get(block_l * self.cols + block_c)
        } else {
            None
        }
    }

    /// Store the vector for a macroblock. Panics if the position is outside the table.
    pub fn set(&mut self, block_l: usize, block_c: usize, mv: MotionVector) {
        assert!(
            block_l < self.rows && block_c < self.cols,
            "macroblock ({block_l}, {block_c}) outside {}x{} table",
            self.rows,
            self.cols
        );
        self.vectors[block_l * self.cols + block_c] = mv;
    }

    /// Iterate over table rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[MotionVector]> {
        self.vectors.chunks(self.cols.max(1))
    }

    /// All entries in row-major order.
    pub fn vectors(&self) -> &[MotionVector] {
        &self.vectors
    }

    /// Mean SAD over the table.
    pub fn mean_cost(&self) -> f64 {
        if self.vectors.is_empty() {
            return 0.0;
        }
        let total: u64 = self.vectors.iter().map(|mv| mv.cost).sum();
        total as f64 / self.vectors.len() as f64
    }

    /// Whether every macroblock matched its co-located block exactly.
    pub fn is_still(&self) -> bool {
        self.vectors.iter().all(|mv| *mv == MotionVector::ZERO)
    }
}
