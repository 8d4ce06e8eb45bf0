//! Streams raw planar YUV bytes into the frame memory.
//!
//! Loading is traced like any other access: each byte is written through
//! [`FrameMemory::write`] at increasing offsets.

use fsbm_core::{FrameMemory, FrameSlot, FsbmError, Plane, Result, TraceSink};
use std::io::Read;
use tracing::debug;

/// Read one whole plane from `input` and write it into `plane`.
///
/// The plane is read in full before anything is written, so a short input
/// fails with [`FsbmError::InputExhausted`] without touching the memory.
pub fn load_plane<R: Read, S: TraceSink>(
    memory: &mut FrameMemory<S>,
    plane: Plane,
    input: &mut R,
) -> Result<()> {
    let size = memory.layout().plane_size(plane);
    let mut bytes = Vec::with_capacity(size);
    input.by_ref().take(size as u64).read_to_end(&mut bytes)?;
    if bytes.len() < size {
        return Err(FsbmError::InputExhausted {
            plane,
            expected: size,
            got: bytes.len(),
        });
    }

    for (offset, &byte) in bytes.iter().enumerate() {
        memory.write(plane, offset, byte)?;
    }
    debug!(%plane, bytes = size, "Plane loaded");
    Ok(())
}

/// Load the Y, Cb and Cr planes of one frame into `slot`.
pub fn load_frame<R: Read, S: TraceSink>(
    memory: &mut FrameMemory<S>,
    slot: FrameSlot,
    input: &mut R,
) -> Result<()> {
    for plane in slot.planes() {
        load_plane(memory, plane, input)?;
    }
    Ok(())
}
