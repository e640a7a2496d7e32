//! `MetricsRecorder`: the two named series families of a run.
//!
//! (a) cumulative arrival/departure counters per agent kind,
//! (b) queue-length series for the terminal arrival queue, departure queue,
//!     park queue, passenger service queue and surface occupancy.
//!
//! The set of series is closed; [`SeriesName`] enumerates it.  String lookup
//! (for output layers) fails fast with [`MetricsError::UnknownSeries`].

use std::fmt;
use std::str::FromStr;

use vp_core::SimTime;

use crate::{MetricsError, MetricsResult, MetricsSeries};

// ── Names ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Aircraft,
    Passenger,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Aircraft  => "aircraft",
            AgentKind::Passenger => "passenger",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum CounterKind {
    Arrival,
    Departure,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum QueueKind {
    /// Aircraft holding in the terminal buffer.
    AircraftArrival,
    /// Aircraft assigned a batch but not yet on the departure pad.
    AircraftDeparture,
    /// Aircraft landed and waiting for the charging server.
    Park,
    /// Passengers in the system, counted until their aircraft takes the pad.
    PassengerService,
    /// Aircraft landed and not yet handed a batch.
    SurfaceOccupancy,
}

/// One of the nine series a run records.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum SeriesName {
    Counter(AgentKind, CounterKind),
    Queue(QueueKind),
}

impl SeriesName {
    pub const COUNT: usize = 9;

    pub const ALL: [SeriesName; Self::COUNT] = [
        SeriesName::Counter(AgentKind::Aircraft, CounterKind::Arrival),
        SeriesName::Counter(AgentKind::Aircraft, CounterKind::Departure),
        SeriesName::Counter(AgentKind::Passenger, CounterKind::Arrival),
        SeriesName::Counter(AgentKind::Passenger, CounterKind::Departure),
        SeriesName::Queue(QueueKind::AircraftArrival),
        SeriesName::Queue(QueueKind::AircraftDeparture),
        SeriesName::Queue(QueueKind::Park),
        SeriesName::Queue(QueueKind::PassengerService),
        SeriesName::Queue(QueueKind::SurfaceOccupancy),
    ];

    #[inline]
    fn index(self) -> usize {
        match self {
            SeriesName::Counter(AgentKind::Aircraft, CounterKind::Arrival) => 0,
            SeriesName::Counter(AgentKind::Aircraft, CounterKind::Departure) => 1,
            SeriesName::Counter(AgentKind::Passenger, CounterKind::Arrival) => 2,
            SeriesName::Counter(AgentKind::Passenger, CounterKind::Departure) => 3,
            SeriesName::Queue(QueueKind::AircraftArrival) => 4,
            SeriesName::Queue(QueueKind::AircraftDeparture) => 5,
            SeriesName::Queue(QueueKind::Park) => 6,
            SeriesName::Queue(QueueKind::PassengerService) => 7,
            SeriesName::Queue(QueueKind::SurfaceOccupancy) => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeriesName::Counter(AgentKind::Aircraft, CounterKind::Arrival) => "aircraft_arrival_counter",
            SeriesName::Counter(AgentKind::Aircraft, CounterKind::Departure) => "aircraft_departure_counter",
            SeriesName::Counter(AgentKind::Passenger, CounterKind::Arrival) => "passenger_arrival_counter",
            SeriesName::Counter(AgentKind::Passenger, CounterKind::Departure) => "passenger_departure_counter",
            SeriesName::Queue(QueueKind::AircraftArrival) => "aircraft_arrival_queue",
            SeriesName::Queue(QueueKind::AircraftDeparture) => "aircraft_departure_queue",
            SeriesName::Queue(QueueKind::Park) => "park_queue_length",
            SeriesName::Queue(QueueKind::PassengerService) => "passenger_service_queue",
            SeriesName::Queue(QueueKind::SurfaceOccupancy) => "surface_aircraft_count",
        }
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesName {
    type Err = MetricsError;

    fn from_str(s: &str) -> MetricsResult<SeriesName> {
        SeriesName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| MetricsError::UnknownSeries(s.to_owned()))
    }
}

// ── MetricsRecorder ───────────────────────────────────────────────────────────

/// Owns every series of one run plus the rejected-aircraft count.
///
/// All series start at zero at time zero.
#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    series:            [MetricsSeries; SeriesName::COUNT],
    rejected_aircraft: u64,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            series: std::array::from_fn(|_| MetricsSeries::starting_at(0)),
            rejected_aircraft: 0,
        }
    }

    /// Add `by` to a cumulative counter at `at`.  Returns the new total.
    pub fn increment(
        &mut self,
        agent:   AgentKind,
        counter: CounterKind,
        at:      SimTime,
        by:      i64,
    ) -> MetricsResult<i64> {
        self.series_mut(SeriesName::Counter(agent, counter)).apply_delta(at, by)
    }

    /// Change a queue length by `delta` at `at`.  Returns the new length.
    pub fn adjust_queue(&mut self, queue: QueueKind, at: SimTime, delta: i64) -> MetricsResult<i64> {
        self.series_mut(SeriesName::Queue(queue)).apply_delta(at, delta)
    }

    /// Sample a queue length tracked elsewhere.
    pub fn sample_queue(&mut self, queue: QueueKind, at: SimTime, length: i64) -> MetricsResult<()> {
        self.series_mut(SeriesName::Queue(queue)).record(at, length)?;
        Ok(())
    }

    pub fn record_rejection(&mut self) -> u64 {
        self.rejected_aircraft += 1;
        self.rejected_aircraft
    }

    #[inline]
    pub fn rejected_aircraft(&self) -> u64 {
        self.rejected_aircraft
    }

    #[inline]
    pub fn series(&self, name: SeriesName) -> &MetricsSeries {
        &self.series[name.index()]
    }

    /// Look a series up by its string name.
    pub fn series_by_name(&self, name: &str) -> MetricsResult<&MetricsSeries> {
        Ok(self.series(name.parse()?))
    }

    /// Latest value of a counter (zero before any update).
    pub fn counter(&self, agent: AgentKind, counter: CounterKind) -> i64 {
        self.series(SeriesName::Counter(agent, counter)).latest_or_zero()
    }

    /// Latest value of a queue length.
    pub fn queue(&self, queue: QueueKind) -> i64 {
        self.series(SeriesName::Queue(queue)).latest_or_zero()
    }

    /// Every series with its name, in [`SeriesName::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SeriesName, &MetricsSeries)> + '_ {
        SeriesName::ALL.into_iter().map(|name| (name, self.series(name)))
    }

    fn series_mut(&mut self, name: SeriesName) -> &mut MetricsSeries {
        &mut self.series[name.index()]
    }
}
