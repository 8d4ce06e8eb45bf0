//! FSBM Core - Frame memory model for traced motion estimation
//!
//! This crate provides the types every other FSBM crate builds on:
//! - Frame geometry (macroblock size, search range, macroblock grid)
//! - The six-plane frame memory layout with exact integer offsets
//! - The tracing access interface and trace sinks
//! - The shared error type

pub mod error;
pub mod frame;
pub mod geometry;
pub mod trace;

pub use error::{FsbmError, Result};
pub use frame::{FrameMemory, FrameSlot, Plane, PlaneLayout};
pub use geometry::FrameGeometry;
pub use trace::{Access, CountingSink, TraceRecord, TraceSink};
