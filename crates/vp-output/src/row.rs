//! Plain data row types written by output backends.

use vp_core::{SimTime, VertiportConfig};
use vp_metrics::{EntityKey, EntityLog, EntityRecord, MetricsRecorder, SummaryStatistics};

/// One sample of one named series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPointRow {
    pub run_id:     u32,
    pub series:     &'static str,
    pub time_hours: f64,
    pub value:      i64,
}

/// Every sample of every series in `metrics`, series by series.
pub fn series_rows(run_id: u32, metrics: &MetricsRecorder) -> Vec<SeriesPointRow> {
    metrics
        .iter()
        .flat_map(|(name, series)| {
            series.iter().map(move |(t, value)| SeriesPointRow {
                run_id,
                series: name.as_str(),
                time_hours: t.hours(),
                value,
            })
        })
        .collect()
}

/// The timing record of one aircraft or passenger.  Every time is in hours;
/// `None` means the milestone was never reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityRow {
    pub run_id:                u32,
    pub kind:                  &'static str,
    pub id:                    u32,
    pub arrival:               Option<f64>,
    pub pushback:              Option<f64>,
    pub departure:             Option<f64>,
    pub departure_queue_enter: Option<f64>,
    pub departure_queue_exit:  Option<f64>,
    pub tlof_arrival_wait:     Option<f64>,
    pub park_wait:             Option<f64>,
    pub tlof_departure_wait:   Option<f64>,
    pub passenger_wait:        Option<f64>,
    pub landing_service:       Option<f64>,
    pub charge_service:        Option<f64>,
    pub departure_service:     Option<f64>,
}

impl EntityRow {
    pub fn new(run_id: u32, key: &EntityKey, record: &EntityRecord) -> Self {
        let hours = |t: Option<SimTime>| t.map(SimTime::hours);
        Self {
            run_id,
            kind:                  key.kind.as_str(),
            id:                    key.id,
            arrival:               hours(record.arrival),
            pushback:              hours(record.pushback),
            departure:             hours(record.departure),
            departure_queue_enter: hours(record.departure_queue_enter),
            departure_queue_exit:  hours(record.departure_queue_exit),
            tlof_arrival_wait:     record.tlof_arrival_wait,
            park_wait:             record.park_wait,
            tlof_departure_wait:   record.tlof_departure_wait,
            passenger_wait:        record.passenger_wait,
            landing_service:       record.landing_service,
            charge_service:        record.charge_service,
            departure_service:     record.departure_service,
        }
    }
}

pub fn entity_rows(run_id: u32, log: &EntityLog) -> Vec<EntityRow> {
    log.iter().map(|(key, record)| EntityRow::new(run_id, key, record)).collect()
}

/// One run's parameters and outcome, in the sweep driver's units: rates per
/// hour and service times in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub run_id:                   u32,
    pub seed:                     u64,
    pub num_park:                 u32,
    pub aircraft_arrival_rate:    f64,
    pub passenger_arrival_rate:   f64,
    pub tlof_time:                f64,
    pub charge_time:              f64,
    /// `None` for an unbounded buffer.
    pub terminal_buffer_capacity: Option<u64>,
    pub blocking:                 bool,
    pub tlof_feedback:            bool,
    pub passenger_arrivals:       bool,

    pub end_time_hours:                      f64,
    pub num_rejected_aircraft:               u64,
    pub aircraft_throughput_rate:            f64,
    pub terminal_queue_length:               f64,
    pub avg_num_aircraft_at_surface:         f64,
    pub passenger_queue_length:              f64,
    pub variance_in_terminal_queue_length:   f64,
    pub variance_in_num_aircraft_at_surface: f64,
    pub variance_in_pax_queue_length:        f64,
}

impl SummaryRow {
    pub fn new(run_id: u32, config: &VertiportConfig, summary: &SummaryStatistics) -> Self {
        let terminal_buffer_capacity = config.terminal_buffer_capacity.limit().map(|n| n as u64);
        Self {
            run_id,
            seed:                     config.seed,
            num_park:                 config.num_park,
            aircraft_arrival_rate:    1.0 / config.aircraft_mean_interarrival,
            passenger_arrival_rate:   1.0 / config.passenger_mean_interarrival,
            tlof_time:                config.landing_mean_service * 60.0,
            charge_time:              config.charge_mean_service * 60.0,
            terminal_buffer_capacity,
            blocking:                 config.blocking,
            tlof_feedback:            config.tlof_feedback,
            passenger_arrivals:       config.passenger_arrivals,

            end_time_hours:                      summary.end_time_hours,
            num_rejected_aircraft:               summary.rejected_aircraft,
            aircraft_throughput_rate:            summary.aircraft_throughput,
            terminal_queue_length:               summary.avg_terminal_queue,
            avg_num_aircraft_at_surface:         summary.avg_surface_aircraft,
            passenger_queue_length:              summary.avg_passenger_queue,
            variance_in_terminal_queue_length:   summary.var_terminal_queue,
            variance_in_num_aircraft_at_surface: summary.var_surface_aircraft,
            variance_in_pax_queue_length:        summary.var_passenger_queue,
        }
    }
}
