//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `series.csv`
//! - `entities.csv`
//! - `summary.csv`
//!
//! Missing values are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EntityRow, OutputResult, SeriesPointRow, SummaryRow};

pub const SERIES_HEADER: [&str; 4] = ["run_id", "series", "time_hours", "value"];

pub const ENTITY_HEADER: [&str; 15] = [
    "run_id", "kind", "id", "arrival", "pushback", "departure",
    "departure_queue_enter", "departure_queue_exit", "tlof_arrival_wait", "park_wait",
    "tlof_departure_wait", "passenger_wait", "landing_service", "charge_service",
    "departure_service",
];

pub const SUMMARY_HEADER: [&str; 20] = [
    "run_id", "seed", "num_park", "aircraft_arrival_rate", "passenger_arrival_rate",
    "tlof_time", "charge_time", "terminal_buffer_capacity", "blocking", "tlof_feedback",
    "passenger_arrivals", "end_time_hours", "num_rejected_aircraft",
    "aircraft_throughput_rate", "terminal_queue_length", "avg_num_aircraft_at_surface",
    "passenger_queue_length", "variance_in_terminal_queue_length",
    "variance_in_num_aircraft_at_surface", "variance_in_pax_queue_length",
];

/// Writes run output to three CSV files.
pub struct CsvWriter {
    series:    Writer<File>,
    entities:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut series = Writer::from_path(dir.join("series.csv"))?;
        series.write_record(SERIES_HEADER)?;

        let mut entities = Writer::from_path(dir.join("entities.csv"))?;
        entities.write_record(ENTITY_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("summary.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            series,
            entities,
            summaries,
            finished: false,
        })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_series(&mut self, rows: &[SeriesPointRow]) -> OutputResult<()> {
        for row in rows {
            self.series.write_record(&[
                row.run_id.to_string(),
                row.series.to_owned(),
                row.time_hours.to_string(),
                row.value.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_entities(&mut self, rows: &[EntityRow]) -> OutputResult<()> {
        for row in rows {
            self.entities.write_record(&[
                row.run_id.to_string(),
                row.kind.to_owned(),
                row.id.to_string(),
                opt(row.arrival),
                opt(row.pushback),
                opt(row.departure),
                opt(row.departure_queue_enter),
                opt(row.departure_queue_exit),
                opt(row.tlof_arrival_wait),
                opt(row.park_wait),
                opt(row.tlof_departure_wait),
                opt(row.passenger_wait),
                opt(row.landing_service),
                opt(row.charge_service),
                opt(row.departure_service),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.run_id.to_string(),
            row.seed.to_string(),
            row.num_park.to_string(),
            row.aircraft_arrival_rate.to_string(),
            row.passenger_arrival_rate.to_string(),
            row.tlof_time.to_string(),
            row.charge_time.to_string(),
            opt(row.terminal_buffer_capacity),
            (row.blocking as u8).to_string(),
            (row.tlof_feedback as u8).to_string(),
            (row.passenger_arrivals as u8).to_string(),
            row.end_time_hours.to_string(),
            row.num_rejected_aircraft.to_string(),
            row.aircraft_throughput_rate.to_string(),
            row.terminal_queue_length.to_string(),
            row.avg_num_aircraft_at_surface.to_string(),
            row.passenger_queue_length.to_string(),
            row.variance_in_terminal_queue_length.to_string(),
            row.variance_in_num_aircraft_at_surface.to_string(),
            row.variance_in_pax_queue_length.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.series.flush()?;
        self.entities.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
