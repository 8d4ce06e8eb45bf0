//! Run configuration, loadable from JSON.

use fsbm_core::{FrameGeometry, FsbmError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything a run needs: frame count, geometry and file paths.
///
/// Fields missing from a config file fall back to [`RunConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of inter frames to process after the reference frame.
    pub frames: usize,
    pub geometry: FrameGeometry,
    /// Raw planar 4:2:0 YUV input.
    pub input: PathBuf,
    /// Motion vector report output.
    pub results: PathBuf,
    /// Memory access trace output.
    pub trace: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 1,
            geometry: FrameGeometry::QCIF,
            input: PathBuf::from("table_tennis_qcif_3frames.yuv"),
            results: PathBuf::from("results.log"),
            trace: PathBuf::from("trace.log"),
        }
    }
}

impl RunConfig {
    /// Parse a config from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data)
            .map_err(|e| FsbmError::Config(format!("Failed to parse run config: {}", e)))
    }

    /// Load a config from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| FsbmError::Config(format!("Failed to serialize run config: {}", e)))
    }

    /// Check the frame count and geometry.
    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(FsbmError::Configuration(
                "frame count must be positive".into(),
            ));
        }
        self.geometry.validate()
    }

    /// Input bytes a complete run consumes: the reference frame plus `frames` more.
    pub fn input_size(&self) -> u64 {
        self.geometry.frame_size() as u64 * (self.frames as u64 + 1)
    }
}
