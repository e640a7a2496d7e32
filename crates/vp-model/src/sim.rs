//! `VertiportSim`: the owning context of one run.

use std::collections::VecDeque;

use vp_core::{AircraftId, BufferCapacity, IdSupply, PassengerId, ProcessId, SimRng, VertiportConfig};
use vp_engine::{FifoMutex, HandoffQueue, Kernel, Model, PriorityMutex, Resume, TokenStore};
use vp_metrics::{EntityLog, MetricsRecorder};

use crate::{ModelError, ModelResult, Process};

/// All state of one vertiport run: configuration, RNG, identifier supplies,
/// every resource and every metric.
///
/// Processes never own any of it; the engine hands each resumed process a
/// `&mut VertiportSim` through [`Model::resume`].
pub struct VertiportSim {
    pub(crate) config: VertiportConfig,
    pub(crate) rng:    SimRng,

    pub(crate) aircraft_ids:  IdSupply<AircraftId>,
    pub(crate) passenger_ids: IdSupply<PassengerId>,

    /// TLOF pad used by landings, and by departures under the feedback policy.
    pub(crate) landing_pad:    PriorityMutex,
    /// Dedicated TLOF pad for departures when feedback is off.
    pub(crate) departure_pad:  PriorityMutex,
    /// The single charging server standing in for every bay.
    pub(crate) park:           FifoMutex,
    /// Terminal holding buffer.
    pub(crate) terminal:       TokenStore,
    /// Surface reservation slot, used in blocking mode only.
    pub(crate) surface:        TokenStore,
    /// Charged aircraft waiting for a passenger batch.
    pub(crate) ready_aircraft: HandoffQueue<AircraftId>,

    /// Passengers not yet assigned to a batch, oldest first.
    pub(crate) waiting_passengers:    VecDeque<PassengerId>,
    /// Passengers in the system: +1 per arrival, −seat_capacity per
    /// departing aircraft once it takes the pad.
    pub(crate) passenger_service_len: i64,

    pub(crate) metrics: MetricsRecorder,
    pub(crate) log:     EntityLog,
}

impl VertiportSim {
    /// Validate `config` and build every resource from it.
    pub fn new(config: VertiportConfig) -> ModelResult<Self> {
        config.validate()?;
        let terminal = match config.terminal_buffer_capacity {
            BufferCapacity::Bounded(n) => TokenStore::bounded("terminal_buffer", n),
            BufferCapacity::Unbounded  => TokenStore::unbounded("terminal_buffer"),
        };
        Ok(Self {
            rng:                   SimRng::new(config.seed),
            aircraft_ids:          IdSupply::new(config.num_aircraft),
            passenger_ids:         IdSupply::new(config.num_passengers),
            landing_pad:           PriorityMutex::new("landing_pad"),
            departure_pad:         PriorityMutex::new("departure_pad"),
            park:                  FifoMutex::new("park"),
            terminal,
            surface:               TokenStore::bounded("surface", 1),
            ready_aircraft:        HandoffQueue::new(),
            waiting_passengers:    VecDeque::new(),
            passenger_service_len: 0,
            metrics:               MetricsRecorder::new(),
            log:                   EntityLog::new(),
            config,
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &VertiportConfig {
        &self.config
    }

    #[inline]
    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    #[inline]
    pub fn log(&self) -> &EntityLog {
        &self.log
    }

    pub fn terminal(&self) -> &TokenStore {
        &self.terminal
    }

    pub fn surface(&self) -> &TokenStore {
        &self.surface
    }

    pub fn landing_pad(&self) -> &PriorityMutex {
        &self.landing_pad
    }

    pub fn departure_pad(&self) -> &PriorityMutex {
        &self.departure_pad
    }

    pub fn ready_aircraft(&self) -> &HandoffQueue<AircraftId> {
        &self.ready_aircraft
    }

    /// Aircraft ids drawn so far (admitted plus rejected).
    pub fn aircraft_consumed(&self) -> u32 {
        self.aircraft_ids.consumed()
    }

    pub fn passengers_consumed(&self) -> u32 {
        self.passenger_ids.consumed()
    }

    /// Passengers arrived but not yet pooled into a batch.
    pub fn waiting_passengers(&self) -> usize {
        self.waiting_passengers.len()
    }

    pub fn passenger_service_len(&self) -> i64 {
        self.passenger_service_len
    }

    /// Hand the recorded data over once the run is finished.
    pub fn into_records(self) -> (MetricsRecorder, EntityLog) {
        (self.metrics, self.log)
    }

    // ── Helpers for the process modules ───────────────────────────────────

    /// An interarrival or service duration around `mean`.
    #[inline]
    pub(crate) fn draw(&mut self, mean: f64) -> f64 {
        self.rng.duration(mean, self.config.stochastic)
    }

    /// The pad departures contend for under the configured policy.
    #[inline]
    pub(crate) fn departure_pad_mut(&mut self) -> &mut PriorityMutex {
        if self.config.tlof_feedback {
            &mut self.landing_pad
        } else {
            &mut self.departure_pad
        }
    }

    #[inline]
    pub(crate) fn seats(&self) -> i64 {
        i64::from(self.config.seat_capacity)
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

impl Model for VertiportSim {
    type Process = Process;
    type Error   = ModelError;

    fn resume(
        &mut self,
        pid:     ProcessId,
        process: &mut Process,
        kernel:  &mut Kernel<Process>,
    ) -> ModelResult<Resume> {
        match process {
            Process::AircraftArrivals { armed }  => self.resume_aircraft_arrivals(pid, armed, kernel),
            Process::PassengerArrivals { armed } => self.resume_passenger_arrivals(pid, armed, kernel),
            Process::Aircraft(flow)              => self.resume_aircraft(pid, flow, kernel),
            Process::Pooling(flow)               => self.resume_pooling(pid, flow, kernel),
            Process::Departure(flow)             => self.resume_departure(pid, flow, kernel),
        }
    }
}
