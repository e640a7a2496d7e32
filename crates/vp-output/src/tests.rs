//! Integration tests for vp-output.

use vp_core::{BufferCapacity, VertiportConfig};
use vp_model::RunOutput;

fn small_config() -> VertiportConfig {
    VertiportConfig {
        num_aircraft: 20,
        seed:         3,
        ..VertiportConfig::from_rates(10.0, 60.0, 6.0, 1.0)
    }
}

fn small_run() -> RunOutput {
    vp_model::simulate(small_config()).unwrap()
}

fn point(run_id: u32, series: &'static str, time_hours: f64, value: i64) -> crate::SeriesPointRow {
    crate::SeriesPointRow { run_id, series, time_hours, value }
}

#[cfg(test)]
mod rows {
    use super::*;
    use crate::{SummaryRow, entity_rows, series_rows};

    #[test]
    fn summary_row_uses_sweep_units() {
        let config = VertiportConfig::from_rates(12.0, 40.0, 15.0, 2.0);
        let out = vp_model::simulate(VertiportConfig { num_aircraft: 10, ..config.clone() }).unwrap();
        let row = SummaryRow::new(7, &out.config, &out.summary);
        assert_eq!(row.run_id, 7);
        assert!((row.aircraft_arrival_rate - 12.0).abs() < 1e-9);
        assert!((row.passenger_arrival_rate - 40.0).abs() < 1e-9);
        assert!((row.charge_time - 15.0).abs() < 1e-9);
        assert!((row.tlof_time - 2.0).abs() < 1e-9);
        assert_eq!(row.terminal_buffer_capacity, Some(50));
        assert_eq!(row.num_rejected_aircraft, out.summary.rejected_aircraft);
    }

    #[test]
    fn unbounded_buffer_has_no_capacity() {
        let config = VertiportConfig { terminal_buffer_capacity: BufferCapacity::Unbounded, ..small_config() };
        let out = vp_model::simulate(config).unwrap();
        assert_eq!(SummaryRow::new(0, &out.config, &out.summary).terminal_buffer_capacity, None);
    }

    #[test]
    fn one_row_per_sample_and_entity() {
        let out = small_run();
        let samples: usize = out.metrics.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(series_rows(1, &out.metrics).len(), samples);
        assert_eq!(entity_rows(1, &out.log).len(), out.log.len());
        assert!(entity_rows(1, &out.log).iter().all(|r| r.run_id == 1));
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, ENTITY_HEADER, SERIES_HEADER, SUMMARY_HEADER};
    use crate::writer::{OutputWriter, write_run};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(headers(&dir, "series.csv"), SERIES_HEADER);
        assert_eq!(headers(&dir, "entities.csv"), ENTITY_HEADER);
        assert_eq!(headers(&dir, "summary.csv"), SUMMARY_HEADER);
    }

    #[test]
    fn csv_series_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_series(&[point(0, "park_queue_length", 0.0, 0), point(0, "park_queue_length", 1.5, 2)])
            .unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "series.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "park_queue_length");
        assert_eq!(&rows[1][2], "1.5");
        assert_eq!(&rows[1][3], "2");
    }

    #[test]
    fn csv_missing_entity_times_are_empty() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let out = small_run();
        let rows = crate::entity_rows(0, &out.log);
        w.write_entities(&rows).unwrap();
        w.finish().unwrap();

        // Passenger rows never carry aircraft-only milestones.
        let written = records(&dir, "entities.csv");
        assert_eq!(written.len(), rows.len());
        let pax = written.iter().find(|r| &r[1] == "passenger").unwrap();
        assert_eq!(&pax[4], ""); // pushback
        assert_ne!(&pax[3], ""); // arrival
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        let dir = tmp();
        let out = small_run();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_run(&mut w, 4, &out).unwrap();
        w.finish().unwrap();

        let samples: usize = out.metrics.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(records(&dir, "series.csv").len(), samples);

        let summary = records(&dir, "summary.csv");
        assert_eq!(summary.len(), 1);
        assert_eq!(&summary[0][0], "4");
        assert_eq!(&summary[0][1], "3"); // seed
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::{OutputWriter, write_run};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn count(dir: &TempDir, table: &str) -> i64 {
        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_series_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_series(&[
            point(0, "aircraft_arrival_queue", 0.0, 0),
            point(0, "aircraft_arrival_queue", 0.5, 1),
            point(0, "aircraft_arrival_queue", 0.7, 0),
        ])
        .unwrap();
        w.finish().unwrap();
        assert_eq!(count(&dir, "series"), 3);
    }

    #[test]
    fn sqlite_runs_append_to_metrics() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let out = small_run();
        write_run(&mut w, 0, &out).unwrap();
        write_run(&mut w, 1, &out).unwrap();
        w.finish().unwrap();

        assert_eq!(count(&dir, "metrics"), 2);
        assert_eq!(count(&dir, "entities"), 2 * out.log.len() as i64);
    }

    #[test]
    fn sqlite_unbounded_buffer_is_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let config = VertiportConfig { terminal_buffer_capacity: BufferCapacity::Unbounded, ..small_config() };
        let out = vp_model::simulate(config).unwrap();
        write_run(&mut w, 0, &out).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let cap: Option<i64> = conn
            .query_row("SELECT terminal_buffer_capacity FROM metrics", [], |r| r.get(0))
            .unwrap();
        assert_eq!(cap, None);
    }
}
