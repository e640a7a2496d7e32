//! Post-hoc summary of one run.

use vp_core::SimTime;

use crate::{AgentKind, CounterKind, MetricsRecorder, QueueKind, SeriesName, time_average, time_variance};

/// The numbers a sweep driver persists per run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStatistics {
    pub end_time_hours:       f64,

    /// Aircraft departures per hour over the whole run.
    pub aircraft_throughput:  f64,
    pub avg_terminal_queue:   f64,
    pub avg_surface_aircraft: f64,
    pub avg_passenger_queue:  f64,
    pub var_terminal_queue:   f64,
    pub var_surface_aircraft: f64,
    pub var_passenger_queue:  f64,

    pub rejected_aircraft:    u64,
    pub aircraft_arrivals:    i64,
    pub aircraft_departures:  i64,
    pub passenger_arrivals:   i64,
    pub passenger_departures: i64,
}

impl SummaryStatistics {
    /// Summarize `metrics` for a run that stopped at `end`.
    pub fn from_recorder(metrics: &MetricsRecorder, end: SimTime) -> Self {
        let queue = move |q| metrics.series(SeriesName::Queue(q));
        let aircraft_departures = metrics.counter(AgentKind::Aircraft, CounterKind::Departure);
        let aircraft_throughput = if end.hours() > 0.0 {
            aircraft_departures as f64 / end.hours()
        } else {
            0.0
        };

        Self {
            end_time_hours: end.hours(),
            aircraft_throughput,
            avg_terminal_queue:   time_average(queue(QueueKind::AircraftArrival)),
            avg_surface_aircraft: time_average(queue(QueueKind::SurfaceOccupancy)),
            avg_passenger_queue:  time_average(queue(QueueKind::PassengerService)),
            var_terminal_queue:   time_variance(queue(QueueKind::AircraftArrival)),
            var_surface_aircraft: time_variance(queue(QueueKind::SurfaceOccupancy)),
            var_passenger_queue:  time_variance(queue(QueueKind::PassengerService)),
            rejected_aircraft:    metrics.rejected_aircraft(),
            aircraft_arrivals:    metrics.counter(AgentKind::Aircraft, CounterKind::Arrival),
            aircraft_departures,
            passenger_arrivals:   metrics.counter(AgentKind::Passenger, CounterKind::Arrival),
            passenger_departures: metrics.counter(AgentKind::Passenger, CounterKind::Departure),
        }
    }
}
