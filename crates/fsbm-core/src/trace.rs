//! Access trace records and the sinks that collect them.

use crate::error::Result;
use std::fmt;

/// Direction of a frame-memory access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Read,
    Write,
}

impl Access {
    /// Single-character tag used in trace files.
    pub fn tag(self) -> char {
        match self {
            Self::Read => 'r',
            Self::Write => 'w',
        }
    }
}

/// One traced frame-memory access.
///
/// Every access is a single byte; the size is implied and always printed as `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceRecord {
    pub access: Access,
    /// Absolute byte address in the frame memory.
    pub address: u32,
}

impl TraceRecord {
    /// Size of every access in bytes.
    pub const SIZE: u32 = 1;

    #[inline]
    pub fn read(address: u32) -> Self {
        Self {
            access: Access::Read,
            address,
        }
    }

    #[inline]
    pub fn write(address: u32) -> Self {
        Self {
            access: Access::Write,
            address,
        }
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:08x} {}", self.access.tag(), self.address, Self::SIZE)
    }
}

/// Destination for trace records, in call order.
pub trait TraceSink {
    /// Append one record.
    fn record(&mut self, record: TraceRecord) -> Result<()>;

    /// Flush any buffered records.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Keeps every record in memory.
impl TraceSink for Vec<TraceRecord> {
    #[inline]
    fn record(&mut self, record: TraceRecord) -> Result<()> {
        self.push(record);
        Ok(())
    }
}

/// Counts records without storing them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountingSink {
    pub reads: u64,
    pub writes: u64,
}

impl CountingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records seen.
    pub fn total(&self) -> u64 {
        self.reads + self.writes
    }
}

impl TraceSink for CountingSink {
    #[inline]
    fn record(&mut self, record: TraceRecord) -> Result<()> {
        match record.access {
            Access::Read => self.reads += 1,
            Access::Write => self.writes += 1,
        }
        Ok(())
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    #[inline]
    fn record(&mut self, record: TraceRecord) -> Result<()> {
        (**self).record(record)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
