//! seed_sweep: parameter sweep over arrival rate, charge time, bay count and
//! seed, run in parallel with rayon.
//!
//! ```text
//! cargo run -p seed_sweep --release -- [output-dir]
//! cargo run -p seed_sweep --release --features sqlite -- [output-dir]
//! ```
//!
//! Only one summary row per run is persisted.  Combinations whose charging
//! capacity cannot keep up with the arrival rate are skipped.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use rayon::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vp_core::VertiportConfig;
use vp_output::{OutputWriter, SummaryRow};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_DIR: &str = "output/seed_sweep";

const AIRCRAFT_RATES:   [f64; 4] = [2.0, 5.0, 10.0, 20.0];
const CHARGE_MINUTES:   [f64; 3] = [10.0, 20.0, 30.0];
const NUM_PARK:         [u32; 3] = [1, 2, 4];
const SEEDS:            u64      = 10;
const PASSENGER_RATE:   f64      = 60.0;
const TLOF_MINUTES:     f64      = 1.0;

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Aircraft the bays can charge per hour.
fn charge_capacity(charge_minutes: f64, num_park: u32) -> f64 {
    60.0 / charge_minutes * num_park as f64
}

fn grid() -> Vec<VertiportConfig> {
    let mut configs = Vec::new();
    for &rate in &AIRCRAFT_RATES {
        for &charge in &CHARGE_MINUTES {
            for &num_park in &NUM_PARK {
                if charge_capacity(charge, num_park) < rate {
                    continue;
                }
                for seed in 0..SEEDS {
                    configs.push(VertiportConfig {
                        num_park,
                        seed,
                        ..VertiportConfig::from_rates(rate, PASSENGER_RATE, charge, TLOF_MINUTES)
                    });
                }
            }
        }
    }
    configs
}

// ── Output ────────────────────────────────────────────────────────────────────

#[cfg(not(feature = "sqlite"))]
fn open_writer(dir: &std::path::Path) -> Result<impl OutputWriter> {
    Ok(vp_output::CsvWriter::new(dir)?)
}

#[cfg(feature = "sqlite")]
fn open_writer(dir: &std::path::Path) -> Result<impl OutputWriter> {
    Ok(vp_output::SqliteWriter::new(dir)?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,seed_sweep=info")))
        .init();

    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_owned()));
    let configs = grid();
    info!(runs = configs.len(), threads = rayon::current_num_threads(), "starting sweep");

    let t0 = Instant::now();
    let rows: Vec<SummaryRow> = configs
        .into_par_iter()
        .enumerate()
        .filter_map(|(run_id, config)| {
            let run_id = run_id as u32;
            match vp_model::simulate(config) {
                Ok(output) => Some(SummaryRow::new(run_id, &output.config, &output.summary)),
                Err(e) => {
                    warn!(run_id, error = %e, "run failed");
                    None
                }
            }
        })
        .collect();
    info!(completed = rows.len(), elapsed_s = t0.elapsed().as_secs_f64(), "sweep finished");

    std::fs::create_dir_all(&out_dir)?;
    let mut writer = open_writer(&out_dir)?;
    for row in &rows {
        writer.write_summary(row)?;
    }
    writer.finish()?;

    println!("{:<6} {:>5} {:>7} {:>5} {:>10} {:>9} {:>9}", "rate", "bays", "charge", "seed", "throughput", "terminal", "rejected");
    println!("{}", "-".repeat(58));
    for row in rows.iter().filter(|r| r.seed == 0) {
        println!(
            "{:<6} {:>5} {:>7} {:>5} {:>10.3} {:>9.3} {:>9}",
            row.aircraft_arrival_rate,
            row.num_park,
            row.charge_time,
            row.seed,
            row.aircraft_throughput_rate,
            row.terminal_queue_length,
            row.num_rejected_aircraft,
        );
    }
    println!();
    println!("{} summary rows written to {}", rows.len(), out_dir.display());

    Ok(())
}
