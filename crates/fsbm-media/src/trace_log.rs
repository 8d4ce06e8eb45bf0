//! Text trace log: one `<r|w> <address> 1` line per access.

use fsbm_core::{FsbmError, Result, TraceRecord, TraceSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered trace sink that writes each record as a text line.
pub struct TraceWriter<W: Write> {
    out: BufWriter<W>,
    lines: u64,
}

impl TraceWriter<File> {
    /// Create (or truncate) a trace file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> TraceWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            out: BufWriter::with_capacity(1 << 16, inner),
            lines: 0,
        }
    }

    /// Number of lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|e| FsbmError::Io(e.into_error()))
    }
}

impl<W: Write> TraceSink for TraceWriter<W> {
    #[inline]
    fn record(&mut self, record: TraceRecord) -> Result<()> {
        writeln!(self.out, "{record}")?;
        self.lines += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
