//! Six-plane frame memory with traced byte access.
//!
//! One flat buffer holds the previous and current frames, each as Y, Cb
//! and Cr planes in 4:2:0 layout. Every read and write goes through
//! [`FrameMemory`], which appends a [`TraceRecord`] to its sink before
//! returning, so the sink sees every access in call order.

use crate::error::{FsbmError, Result};
use crate::geometry::FrameGeometry;
use crate::trace::{TraceRecord, TraceSink};
use std::fmt;

/// One logical plane of the frame memory.
///
/// Discriminants are the raw plane identifiers accepted by
/// [`FrameMemory::read_raw`] and [`FrameMemory::write_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Plane {
    PreviousY = 0,
    PreviousCb = 1,
    PreviousCr = 2,
    CurrentY = 3,
    CurrentCb = 4,
    CurrentCr = 5,
}

impl Plane {
    /// All planes in memory order.
    pub const ALL: [Plane; 6] = [
        Plane::PreviousY,
        Plane::PreviousCb,
        Plane::PreviousCr,
        Plane::CurrentY,
        Plane::CurrentCb,
        Plane::CurrentCr,
    ];

    /// Whether this is a luma plane.
    #[inline]
    pub fn is_luma(self) -> bool {
        matches!(self, Self::PreviousY | Self::CurrentY)
    }

    /// Frame this plane belongs to.
    pub fn slot(self) -> FrameSlot {
        match self {
            Self::PreviousY | Self::PreviousCb | Self::PreviousCr => FrameSlot::Previous,
            Self::CurrentY | Self::CurrentCb | Self::CurrentCr => FrameSlot::Current,
        }
    }

    /// Offset from the start of the buffer, in quarters of a luma plane.
    #[inline]
    fn base_quarters(self) -> usize {
        match self {
            Self::PreviousY => 0,
            Self::PreviousCb => 4,
            Self::PreviousCr => 5,
            Self::CurrentY => 6,
            Self::CurrentCb => 10,
            Self::CurrentCr => 11,
        }
    }

    /// Plane size, in quarters of a luma plane.
    #[inline]
    fn size_quarters(self) -> usize {
        if self.is_luma() {
            4
        } else {
            1
        }
    }
}

impl TryFrom<u8> for Plane {
    type Error = FsbmError;

    fn try_from(id: u8) -> Result<Self> {
        Plane::ALL
            .get(id as usize)
            .copied()
            .ok_or(FsbmError::InvalidPlane(id))
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PreviousY => "previous-Y",
            Self::PreviousCb => "previous-Cb",
            Self::PreviousCr => "previous-Cr",
            Self::CurrentY => "current-Y",
            Self::CurrentCb => "current-Cb",
            Self::CurrentCr => "current-Cr",
        };
        f.write_str(name)
    }
}

/// The previous (reference) or current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSlot {
    Previous,
    Current,
}

impl FrameSlot {
    /// Y, Cb and Cr planes of this frame, in load order.
    pub fn planes(self) -> [Plane; 3] {
        match self {
            Self::Previous => [Plane::PreviousY, Plane::PreviousCb, Plane::PreviousCr],
            Self::Current => [Plane::CurrentY, Plane::CurrentCb, Plane::CurrentCr],
        }
    }
}

/// Base offsets and sizes of the six planes, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneLayout {
    quarter: usize,
}

impl PlaneLayout {
    /// Compute the layout for a validated geometry.
    pub fn new(geometry: &FrameGeometry) -> Result<Self> {
        geometry.validate()?;
        Ok(Self {
            quarter: geometry.luma_size() / 4,
        })
    }

    /// Absolute address of the first byte of `plane`.
    #[inline]
    pub fn base(&self, plane: Plane) -> usize {
        plane.base_quarters() * self.quarter
    }

    /// Size of `plane` in bytes.
    #[inline]
    pub fn plane_size(&self, plane: Plane) -> usize {
        plane.size_quarters() * self.quarter
    }

    /// Total frame memory size in bytes.
    #[inline]
    pub fn total_size(&self) -> usize {
        12 * self.quarter
    }

    /// Absolute address of `offset` within `plane`.
    ///
    /// Does not check the offset against the plane size. Saturates at
    /// `usize::MAX` for offsets that overflow the address space.
    #[inline]
    pub fn address(&self, plane: Plane, offset: usize) -> usize {
        self.base(plane).saturating_add(offset)
    }
}

/// Frame memory context: the byte buffer together with its trace sink.
pub struct FrameMemory<S> {
    data: Vec<u8>,
    layout: PlaneLayout,
    sink: S,
    accesses: u64,
}

impl<S: TraceSink> FrameMemory<S> {
    /// Allocate a zeroed frame memory for `geometry`.
    pub fn new(geometry: &FrameGeometry, sink: S) -> Result<Self> {
        let layout = PlaneLayout::new(geometry)?;
        Ok(Self {
            data: vec![0u8; layout.total_size()],
            layout,
            sink,
            accesses: 0,
        })
    }

    /// Read one byte of `plane`, tracing the access.
    #[inline]
    pub fn read(&mut self, plane: Plane, offset: usize) -> Result<u8> {
        let address = self.trace(plane, offset, TraceRecord::read)?;
        Ok(self.data[address])
    }

    /// Write one byte of `plane`, tracing the access. Returns the written value.
    #[inline]
    pub fn write(&mut self, plane: Plane, offset: usize, value: u8) -> Result<u8> {
        let address = self.trace(plane, offset, TraceRecord::write)?;
        self.data[address] = value;
        Ok(value)
    }

    /// Read through a raw plane identifier.
    pub fn read_raw(&mut self, plane_id: u8, offset: usize) -> Result<u8> {
        self.read(Plane::try_from(plane_id)?, offset)
    }

    /// Write through a raw plane identifier.
    pub fn write_raw(&mut self, plane_id: u8, offset: usize, value: u8) -> Result<u8> {
        self.write(Plane::try_from(plane_id)?, offset, value)
    }

    /// Records the access, then checks the offset lies inside the plane.
    #[inline]
    fn trace(
        &mut self,
        plane: Plane,
        offset: usize,
        make: fn(u32) -> TraceRecord,
    ) -> Result<usize> {
        let address = self.layout.address(plane, offset);
        // Addresses wider than 32 bits are already out of range; saturate the trace field.
        let traced = u32::try_from(address).unwrap_or(u32::MAX);
        self.sink.record(make(traced))?;
        self.accesses += 1;

        let len = self.layout.plane_size(plane);
        if offset >= len {
            return Err(FsbmError::AddressOutOfRange { plane, offset, len });
        }
        Ok(address)
    }

    /// Flush the trace sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }
}

impl<S> FrameMemory<S> {
    /// Plane layout of this memory.
    #[inline]
    pub fn layout(&self) -> &PlaneLayout {
        &self.layout
    }

    /// Number of traced accesses so far.
    #[inline]
    pub fn access_count(&self) -> u64 {
        self.accesses
    }

    /// Untraced view of a whole plane, for inspection and tests.
    pub fn plane(&self, plane: Plane) -> &[u8] {
        let base = self.layout.base(plane);
        &self.data[base..base + self.layout.plane_size(plane)]
    }

    /// The trace sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the memory and return its trace sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
