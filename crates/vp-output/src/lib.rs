//! `vp-output`: run output writers for the vertiport simulator.
//!
//! Two backends, the second behind a Cargo feature:
//!
//! | Feature   | Backend | Files created                                  |
//! |-----------|---------|------------------------------------------------|
//! | *(none)*  | CSV     | `series.csv`, `entities.csv`, `summary.csv`    |
//! | `sqlite`  | SQLite  | `output.db` (`series`, `entities`, `metrics`)  |
//!
//! Both implement [`OutputWriter`].  [`write_run`] writes everything one
//! finished run recorded.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vp_output::{CsvWriter, OutputWriter, write_run};
//!
//! let output = vp_model::simulate(config)?;
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_run(&mut writer, 0, &output)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{EntityRow, SeriesPointRow, SummaryRow, entity_rows, series_rows};
pub use writer::{OutputWriter, write_run};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
