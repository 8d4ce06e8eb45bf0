//! Synthetic YUV sequences.

use fsbm_core::FrameGeometry;

/// Non-repeating luma texture, so no two blocks of a frame match exactly.
pub fn texture(x: usize, y: usize) -> u8 {
    let mut h = (x as u32).wrapping_mul(0x9E37_79B9) ^ (y as u32).wrapping_mul(0x85EB_CA6B);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    (h >> 24) as u8
}

/// One raw 4:2:0 frame whose luma pixel (x, y) is `luma(x, y)`.
pub fn yuv_frame(g: &FrameGeometry, luma: impl Fn(usize, usize) -> u8) -> Vec<u8> {
    let mut frame = Vec::with_capacity(g.frame_size());
    for y in 0..g.height() {
        for x in 0..g.width() {
            frame.push(luma(x, y));
        }
    }
    for i in 0..g.chroma_size() {
        frame.push((i % 200) as u8 + 20);
    }
    for i in 0..g.chroma_size() {
        frame.push(255 - (i % 200) as u8);
    }
    frame
}

/// Concatenate frames into one input stream.
pub fn sequence(frames: &[Vec<u8>]) -> Vec<u8> {
    frames.concat()
}
