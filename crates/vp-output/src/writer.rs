//! The `OutputWriter` trait implemented by all backend writers.

use vp_model::RunOutput;

use crate::row::{entity_rows, series_rows};
use crate::{EntityRow, OutputResult, SeriesPointRow, SummaryRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait OutputWriter {
    /// Write a batch of series samples.
    fn write_series(&mut self, rows: &[SeriesPointRow]) -> OutputResult<()>;

    /// Write a batch of per-entity timing rows.
    fn write_entities(&mut self, rows: &[EntityRow]) -> OutputResult<()>;

    /// Write one run summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write everything a finished run recorded: its series, its entity log and
/// its summary row.  Does not call [`OutputWriter::finish`].
pub fn write_run<W: OutputWriter>(writer: &mut W, run_id: u32, output: &RunOutput) -> OutputResult<()> {
    writer.write_series(&series_rows(run_id, &output.metrics))?;
    writer.write_entities(&entity_rows(run_id, &output.log))?;
    writer.write_summary(&SummaryRow::new(run_id, &output.config, &output.summary))
}
