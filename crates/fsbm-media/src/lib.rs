//! FSBM Media - Frame I/O and run orchestration
//!
//! This crate handles:
//! - Loading raw planar 4:2:0 YUV frames into the frame memory
//! - Rotating the current frame into the reference slots
//! - Writing motion vector reports and trace logs
//! - Run configuration and the per-frame session loop

pub mod config;
pub mod loader;
pub mod report;
pub mod rotation;
pub mod session;
pub mod trace_log;

pub use config::RunConfig;
pub use loader::{load_frame, load_plane};
pub use report::write_report;
pub use rotation::rotate_frame;
pub use session::{FrameSummary, RunSummary, Session};
pub use trace_log::TraceWriter;
