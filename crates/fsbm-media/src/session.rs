//! Per-frame pipeline driving a whole run.
//!
//! The first frame of the input seeds the reference planes. Each following
//! frame then goes through, strictly in order:
//! 1. load into the current planes
//! 2. reset the motion vector table
//! 3. search every macroblock
//! 4. append the report
//! 5. rotate the current frame into the reference planes

use crate::config::RunConfig;
use crate::loader::load_frame;
use crate::report::write_report;
use crate::rotation::rotate_frame;
use crate::trace_log::TraceWriter;
use fsbm_core::{FrameGeometry, FrameMemory, FrameSlot, Result, TraceSink};
use fsbm_search::{search_frame, MotionField};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use tracing::info;

/// Outcome of one processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummary {
    /// 1-based frame number, as printed in the report.
    pub index: usize,
    /// Mean SAD over all macroblocks.
    pub mean_cost: f64,
    /// Whether every macroblock matched its co-located block exactly.
    pub still: bool,
    /// Trace records emitted while processing this frame.
    pub accesses: u64,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub frames: Vec<FrameSummary>,
    /// Total trace records, including the reference frame load.
    pub trace_records: u64,
}

/// Frame memory, motion table and progress of one run.
pub struct Session<S> {
    geometry: FrameGeometry,
    memory: FrameMemory<S>,
    field: MotionField,
    frames_done: usize,
}

impl<S: TraceSink> Session<S> {
    pub fn new(geometry: FrameGeometry, sink: S) -> Result<Self> {
        let memory = FrameMemory::new(&geometry, sink)?;
        Ok(Self {
            geometry,
            memory,
            field: MotionField::for_geometry(&geometry),
            frames_done: 0,
        })
    }

    /// Load the first frame of the sequence into the reference planes.
    pub fn load_reference<R: Read>(&mut self, input: &mut R) -> Result<()> {
        load_frame(&mut self.memory, FrameSlot::Previous, input)
    }

    /// Process the next frame of `input`, appending its report to `results`.
    pub fn process_frame<R: Read, W: Write>(
        &mut self,
        input: &mut R,
        results: &mut W,
    ) -> Result<FrameSummary> {
        let start = self.memory.access_count();
        let index = self.frames_done + 1;

        load_frame(&mut self.memory, FrameSlot::Current, input)?;
        self.field.reset();
        search_frame(&mut self.memory, &self.geometry, &mut self.field)?;
        write_report(results, index, &self.field)?;
        rotate_frame(&mut self.memory)?;

        self.frames_done = index;
        let summary = FrameSummary {
            index,
            mean_cost: self.field.mean_cost(),
            still: self.field.is_still(),
            accesses: self.memory.access_count() - start,
        };
        info!(
            frame = index,
            macroblocks = self.field.len(),
            mean_cost = summary.mean_cost,
            accesses = summary.accesses,
            "Frame processed"
        );
        Ok(summary)
    }

    /// Seed the reference frame, then process `frames` frames.
    pub fn run<R: Read, W: Write>(
        &mut self,
        frames: usize,
        input: &mut R,
        results: &mut W,
    ) -> Result<RunSummary> {
        self.load_reference(input)?;

        let mut summary = RunSummary::default();
        for _ in 0..frames {
            summary.frames.push(self.process_frame(input, results)?);
        }
        results.flush()?;
        self.memory.flush()?;
        summary.trace_records = self.memory.access_count();
        Ok(summary)
    }

    /// Motion vectors of the last processed frame.
    pub fn motion_field(&self) -> &MotionField {
        &self.field
    }

    pub fn memory(&self) -> &FrameMemory<S> {
        &self.memory
    }

    pub fn frames_done(&self) -> usize {
        self.frames_done
    }

    /// Finish the session and hand back the trace sink.
    pub fn into_sink(self) -> S {
        self.memory.into_sink()
    }
}

/// Run a whole configuration against the files it names.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    config.validate()?;
    info!(
        input = %config.input.display(),
        frames = config.frames,
        width = config.geometry.width(),
        height = config.geometry.height(),
        "Starting motion estimation"
    );

    let mut input = BufReader::new(File::open(&config.input)?);
    let mut results = BufWriter::new(File::create(&config.results)?);
    let trace = TraceWriter::create(&config.trace)?;

    let mut session = Session::new(config.geometry, trace)?;
    let summary = session.run(config.frames, &mut input, &mut results)?;

    info!(
        frames = summary.frames.len(),
        trace_records = summary.trace_records,
        results = %config.results.display(),
        trace = %config.trace.display(),
        "Motion estimation finished"
    );
    Ok(summary)
}
