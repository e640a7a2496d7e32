//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `series`, `entities` and `metrics`.  Repeated runs of a
//! sweep append to the same tables, distinguished by `run_id`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EntityRow, OutputResult, SeriesPointRow, SummaryRow};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS series (
                 run_id     INTEGER NOT NULL,
                 series     TEXT    NOT NULL,
                 time_hours REAL    NOT NULL,
                 value      INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS entities (
                 run_id                INTEGER NOT NULL,
                 kind                  TEXT    NOT NULL,
                 id                    INTEGER NOT NULL,
                 arrival               REAL,
                 pushback              REAL,
                 departure             REAL,
                 departure_queue_enter REAL,
                 departure_queue_exit  REAL,
                 tlof_arrival_wait     REAL,
                 park_wait             REAL,
                 tlof_departure_wait   REAL,
                 passenger_wait        REAL,
                 landing_service       REAL,
                 charge_service        REAL,
                 departure_service     REAL
             );
             CREATE TABLE IF NOT EXISTS metrics (
                 id                                  INTEGER PRIMARY KEY,
                 run_id                              INTEGER NOT NULL,
                 seed                                INTEGER NOT NULL,
                 num_park                            INTEGER NOT NULL,
                 aircraft_arrival_rate               REAL    NOT NULL,
                 passenger_arrival_rate              REAL    NOT NULL,
                 tlof_time                           REAL    NOT NULL,
                 charge_time                         REAL    NOT NULL,
                 terminal_buffer_capacity            INTEGER,
                 blocking                            INTEGER NOT NULL,
                 tlof_feedback                       INTEGER NOT NULL,
                 passenger_arrivals                  INTEGER NOT NULL,
                 end_time_hours                      REAL    NOT NULL,
                 num_rejected_aircraft               INTEGER NOT NULL,
                 aircraft_throughput_rate            REAL    NOT NULL,
                 terminal_queue_length               REAL    NOT NULL,
                 avg_num_aircraft_at_surface         REAL    NOT NULL,
                 passenger_queue_length              REAL    NOT NULL,
                 variance_in_terminal_queue_length   REAL    NOT NULL,
                 variance_in_num_aircraft_at_surface REAL    NOT NULL,
                 variance_in_pax_queue_length        REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_series(&mut self, rows: &[SeriesPointRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO series (run_id, series, time_hours, value) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.run_id, row.series, row.time_hours, row.value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_entities(&mut self, rows: &[EntityRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO entities \
                 (run_id, kind, id, arrival, pushback, departure, departure_queue_enter, \
                  departure_queue_exit, tlof_arrival_wait, park_wait, tlof_departure_wait, \
                  passenger_wait, landing_service, charge_service, departure_service) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.run_id,
                    row.kind,
                    row.id,
                    row.arrival,
                    row.pushback,
                    row.departure,
                    row.departure_queue_enter,
                    row.departure_queue_exit,
                    row.tlof_arrival_wait,
                    row.park_wait,
                    row.tlof_departure_wait,
                    row.passenger_wait,
                    row.landing_service,
                    row.charge_service,
                    row.departure_service,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO metrics \
             (run_id, seed, num_park, aircraft_arrival_rate, passenger_arrival_rate, tlof_time, \
              charge_time, terminal_buffer_capacity, blocking, tlof_feedback, passenger_arrivals, \
              end_time_hours, num_rejected_aircraft, aircraft_throughput_rate, \
              terminal_queue_length, avg_num_aircraft_at_surface, passenger_queue_length, \
              variance_in_terminal_queue_length, variance_in_num_aircraft_at_surface, \
              variance_in_pax_queue_length) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)",
            rusqlite::params![
                row.run_id,
                row.seed as i64,
                row.num_park,
                row.aircraft_arrival_rate,
                row.passenger_arrival_rate,
                row.tlof_time,
                row.charge_time,
                row.terminal_buffer_capacity.map(|n| n as i64),
                row.blocking as i64,
                row.tlof_feedback as i64,
                row.passenger_arrivals as i64,
                row.end_time_hours,
                row.num_rejected_aircraft as i64,
                row.aircraft_throughput_rate,
                row.terminal_queue_length,
                row.avg_num_aircraft_at_surface,
                row.passenger_queue_length,
                row.variance_in_terminal_queue_length,
                row.variance_in_num_aircraft_at_surface,
                row.variance_in_pax_queue_length,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
