//! Makes the current frame the reference for the next one.

use fsbm_core::{FrameMemory, Plane, Result, TraceSink};
use tracing::debug;

/// Copy the current Y, Cb and Cr planes over the previous ones, byte by byte.
///
/// Every byte is read from the current plane and written to the previous
/// plane through the traced interface. Luma is copied first; chroma is then
/// copied in one pass that handles Cb and Cr at the same offset before
/// moving on, which fixes the order of the chroma records in the trace.
pub fn rotate_frame<S: TraceSink>(memory: &mut FrameMemory<S>) -> Result<()> {
    let luma = memory.layout().plane_size(Plane::CurrentY);
    let chroma = memory.layout().plane_size(Plane::CurrentCb);

    for offset in 0..luma {
        let pixel = memory.read(Plane::CurrentY, offset)?;
        memory.write(Plane::PreviousY, offset, pixel)?;
    }
    for offset in 0..chroma {
        let cb = memory.read(Plane::CurrentCb, offset)?;
        memory.write(Plane::PreviousCb, offset, cb)?;
        let cr = memory.read(Plane::CurrentCr, offset)?;
        memory.write(Plane::PreviousCr, offset, cr)?;
    }

    debug!(bytes = luma + 2 * chroma, "Current frame rotated into reference slots");
    Ok(())
}
