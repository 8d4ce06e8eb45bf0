//! Text report of the motion vector and SAD tables.

use fsbm_core::Result;
use fsbm_search::MotionField;
use std::io::Write;

const RULE: &str = "************************************";

/// Append the report for one processed frame.
///
/// Layout: a frame header, then the `(dx,dy)` table and the SAD table, each
/// row-major with a tab after every entry and a newline after each row.
pub fn write_report<W: Write>(out: &mut W, frame_index: usize, field: &MotionField) -> Result<()> {
    writeln!(out, "\n{RULE} FRAME No.{frame_index:2} {RULE}")?;

    writeln!(out, "MVs Table (MV_s,MV_y):")?;
    for row in field.iter_rows() {
        for mv in row {
            write!(out, "({},{})\t", mv.dx, mv.dy)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "SAD_MB Table:")?;
    for row in field.iter_rows() {
        for mv in row {
            write!(out, "{}\t", mv.cost)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
