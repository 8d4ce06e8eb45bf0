//! FSBM Search - Full-search block-matching motion estimation.
//!
//! Every pixel compared by the search is fetched through the traced
//! [`fsbm_core::FrameMemory`], so a search pass doubles as a memory trace.

pub mod counts;
pub mod engine;
pub mod motion;
pub mod window;

pub use counts::{loader_access_count, rotation_access_count, search_access_count};
pub use engine::{block_sad, search_frame, search_macroblock};
pub use motion::{MotionField, MotionVector};
pub use window::SearchWindow;
