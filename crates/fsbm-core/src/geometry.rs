//! Frame geometry: macroblock size, search range and macroblock grid.

use crate::error::{FsbmError, Result};
use serde::{Deserialize, Serialize};

/// Largest frame memory that still fits the 8-hex-digit trace address field.
const MAX_FRAME_MEMORY: u64 = 1 << 32;

/// Fixed geometry of every frame in a sequence.
///
/// Luma frames are `mb_rows * mb_size` lines of `mb_cols * mb_size` pixels.
/// Chroma planes are 4:2:0, a quarter of the luma plane each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameGeometry {
    /// Macroblock edge length M, in pixels.
    pub mb_size: usize,
    /// Maximum displacement p searched on each side of a macroblock.
    pub search_range: usize,
    /// Number of macroblock rows (line_max).
    pub mb_rows: usize,
    /// Number of macroblock columns (col_max).
    pub mb_cols: usize,
}

impl FrameGeometry {
    /// QCIF (176x144) with 16x16 macroblocks and a +/-8 pixel search.
    pub const QCIF: Self = Self {
        mb_size: 16,
        search_range: 8,
        mb_rows: 9,
        mb_cols: 11,
    };

    /// Create a validated geometry.
    pub fn new(mb_size: usize, search_range: usize, mb_rows: usize, mb_cols: usize) -> Result<Self> {
        let geometry = Self {
            mb_size,
            search_range,
            mb_rows,
            mb_cols,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check the geometry can back a six-plane frame memory.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("macroblock size", self.mb_size),
            ("search range", self.search_range),
            ("macroblock rows", self.mb_rows),
            ("macroblock columns", self.mb_cols),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(FsbmError::Configuration(format!("{name} must be positive")));
            }
        }

        let luma = self
            .mb_size
            .checked_mul(self.mb_size)
            .and_then(|v| v.checked_mul(self.mb_rows))
            .and_then(|v| v.checked_mul(self.mb_cols))
            .ok_or_else(|| FsbmError::Configuration("luma plane size overflows".into()))?;

        // Chroma planes and their base offsets are whole quarters of the luma plane.
        if luma % 4 != 0 {
            return Err(FsbmError::Configuration(format!(
                "luma plane size {luma} is not divisible by 4"
            )));
        }
        if (luma as u64).saturating_mul(3) > MAX_FRAME_MEMORY {
            return Err(FsbmError::Configuration(format!(
                "frame memory of {} bytes exceeds the 32-bit trace address space",
                (luma as u64).saturating_mul(3)
            )));
        }
        Ok(())
    }

    /// Luma frame width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.mb_cols * self.mb_size
    }

    /// Luma frame height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.mb_rows * self.mb_size
    }

    /// Bytes in one luma plane.
    #[inline]
    pub fn luma_size(&self) -> usize {
        self.width() * self.height()
    }

    /// Bytes in one chroma plane.
    #[inline]
    pub fn chroma_size(&self) -> usize {
        self.luma_size() / 4
    }

    /// Bytes in one full Y + Cb + Cr frame.
    #[inline]
    pub fn frame_size(&self) -> usize {
        self.luma_size() + 2 * self.chroma_size()
    }

    /// Number of macroblocks in a frame.
    #[inline]
    pub fn macroblock_count(&self) -> usize {
        self.mb_rows * self.mb_cols
    }
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self::QCIF
    }
}
