//! single_run: one vertiport simulation with full CSV output.
//!
//! ```text
//! cargo run -p single_run --release -- [config.json] [output-dir]
//! ```
//!
//! Without a config file the default parameters are used (10 aircraft/h,
//! 60 passengers/h, 6 min charge, 1 min landing).  Log verbosity follows
//! `RUST_LOG` and defaults to `info`.  The summary statistics are also
//! written as `summary.json` next to the CSV files.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vp_core::VertiportConfig;
use vp_output::{CsvWriter, OutputWriter, write_run};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_DIR: &str = "output/single_run";
const RUN_ID: u32 = 0;
const SUMMARY_JSON: &str = "summary.json";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<VertiportConfig> {
    let Some(path) = path else {
        return Ok(VertiportConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config = load_config(args.next().as_deref())?;
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_owned()));

    println!("=== single_run: vertiport simulation ===");
    println!(
        "Aircraft: {}  |  Passengers: {}  |  Bays: {}  |  Seed: {}",
        config.num_aircraft, config.num_passengers, config.num_park, config.seed
    );
    println!();

    // 1. Run.
    let t0 = Instant::now();
    let output = vp_model::simulate(config)?;
    let elapsed = t0.elapsed();

    // 2. Write output.
    std::fs::create_dir_all(&out_dir)?;
    let mut writer = CsvWriter::new(&out_dir)?;
    write_run(&mut writer, RUN_ID, &output)?;
    writer.finish()?;

    // 3. Summary.
    let s = &output.summary;
    std::fs::write(out_dir.join(SUMMARY_JSON), serde_json::to_string_pretty(s)?)?;
    info!(
        elapsed_s = elapsed.as_secs_f64(),
        events = output.run.events,
        end_time_h = s.end_time_hours,
        arrivals = s.aircraft_arrivals,
        departures = s.aircraft_departures,
        rejected = s.rejected_aircraft,
        throughput = s.aircraft_throughput,
        "simulation complete"
    );
    info!(
        terminal_queue = s.avg_terminal_queue,
        terminal_var = s.var_terminal_queue,
        surface = s.avg_surface_aircraft,
        surface_var = s.var_surface_aircraft,
        passenger_queue = s.avg_passenger_queue,
        passenger_var = s.var_passenger_queue,
        "time-weighted averages"
    );
    println!("Output written to {}", out_dir.display());

    Ok(())
}
