//! `Vertiport`: a ready-to-run simulation and its results.

use tracing::info;

use vp_core::{SimTime, VertiportConfig};
use vp_engine::{Engine, EngineObserver, NoopObserver, RunSummary, TerminationSignal};
use vp_metrics::{EntityLog, MetricsRecorder, SummaryStatistics};

use crate::{ModelResult, Process, VertiportSim};

/// Everything a finished run exposes to reporting layers.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub config:  VertiportConfig,
    pub summary: SummaryStatistics,
    pub run:     RunSummary,
    /// Counter and queue-length series.
    pub metrics: MetricsRecorder,
    /// Per-aircraft and per-passenger times.
    pub log:     EntityLog,
}

/// One simulation run: a [`VertiportSim`] on an [`Engine`] with its arrival
/// processes already registered.
///
/// # Example
///
/// ```rust,ignore
/// let config = VertiportConfig::from_rates(10.0, 60.0, 6.0, 1.0);
/// let output = Vertiport::new(config)?.run(&mut NoopObserver)?;
/// println!("{:.2} aircraft/h", output.summary.aircraft_throughput);
/// ```
pub struct Vertiport {
    engine: Engine<VertiportSim>,
    signal: TerminationSignal,
}

impl Vertiport {
    /// Build a run with its own termination signal.
    pub fn new(config: VertiportConfig) -> ModelResult<Self> {
        Self::with_signal(config, TerminationSignal::new())
    }

    /// Build a run that fires `signal` when the aircraft supply is exhausted.
    /// The caller may keep a clone to observe the stop time.
    pub fn with_signal(config: VertiportConfig, signal: TerminationSignal) -> ModelResult<Self> {
        let sim = VertiportSim::new(config)?;
        let passenger_arrivals = sim.config.passenger_arrivals;
        let mut engine = Engine::new(sim, signal.clone());
        engine.spawn(Process::aircraft_arrivals());
        if passenger_arrivals {
            engine.spawn(Process::passenger_arrivals());
        }
        Ok(Self { engine, signal })
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.engine.now()
    }

    #[inline]
    pub fn sim(&self) -> &VertiportSim {
        &self.engine.model
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.signal.is_fired()
    }

    /// Resume a single process.  Lets callers inspect state between events.
    pub fn step<O: EngineObserver>(&mut self, observer: &mut O) -> ModelResult<()> {
        self.engine.step(observer)
    }

    /// Run until the aircraft supply is exhausted and collect the results.
    pub fn run<O: EngineObserver>(mut self, observer: &mut O) -> ModelResult<RunOutput> {
        let config = self.engine.model.config.clone();
        info!(
            seed = config.seed,
            aircraft = config.num_aircraft,
            passengers = config.num_passengers,
            blocking = config.blocking,
            tlof_feedback = config.tlof_feedback,
            buffer = ?config.terminal_buffer_capacity,
            "vertiport run started"
        );

        let run = self.engine.run(observer)?;
        Ok(self.finish(config, run))
    }

    /// Drain the remaining events of a run driven by [`step`][Self::step]
    /// without an observer, then collect the results.
    pub fn run_to_end(self) -> ModelResult<RunOutput> {
        self.run(&mut NoopObserver)
    }

    fn finish(self, config: VertiportConfig, run: RunSummary) -> RunOutput {
        let (metrics, log) = self.engine.into_model().into_records();
        let summary = SummaryStatistics::from_recorder(&metrics, run.end_time);
        info!(
            end_time = %run.end_time,
            events = run.events,
            arrivals = summary.aircraft_arrivals,
            departures = summary.aircraft_departures,
            rejected = summary.rejected_aircraft,
            throughput = summary.aircraft_throughput,
            "vertiport run finished"
        );
        RunOutput { config, summary, run, metrics, log }
    }
}

/// Build and run `config` to completion.
pub fn simulate(config: VertiportConfig) -> ModelResult<RunOutput> {
    Vertiport::new(config)?.run(&mut NoopObserver)
}
