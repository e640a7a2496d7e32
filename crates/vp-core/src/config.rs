//! Vertiport run configuration.
//!
//! A `VertiportConfig` is validated once when a simulation is built and is
//! immutable afterwards.  All durations are in hours.

use crate::{CoreError, CoreResult};

// ── BufferCapacity ────────────────────────────────────────────────────────────

/// Capacity of the terminal holding buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BufferCapacity {
    /// At most `n` aircraft may hold in the terminal buffer; later arrivals
    /// are rejected.
    Bounded(usize),
    /// No limit; buffer tokens are synthesized as aircraft enter.
    Unbounded,
}

impl BufferCapacity {
    #[inline]
    pub fn is_bounded(self) -> bool {
        matches!(self, BufferCapacity::Bounded(_))
    }

    /// The bound, if any.
    #[inline]
    pub fn limit(self) -> Option<usize> {
        match self {
            BufferCapacity::Bounded(n) => Some(n),
            BufferCapacity::Unbounded => None,
        }
    }
}

// ── VertiportConfig ───────────────────────────────────────────────────────────

/// Everything a single simulation run needs.
///
/// Typically built with [`VertiportConfig::from_rates`] by a sweep driver, or
/// loaded from JSON by a demo binary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertiportConfig {
    /// Parking/charging bays.  The bays are modelled as one charging server
    /// running `num_park` times faster (see [`Self::effective_charge_mean`]).
    pub num_park: u32,

    /// Size of the aircraft identifier supply.  Exhausting it ends the run.
    pub num_aircraft: u32,

    /// Size of the passenger identifier supply.
    pub num_passengers: u32,

    pub aircraft_mean_interarrival:  f64,
    pub passenger_mean_interarrival: f64,
    pub landing_mean_service:        f64,
    pub departure_mean_service:      f64,
    /// Mean charge time of a single bay.
    pub charge_mean_service:         f64,

    /// Passengers per departing aircraft; also the pooling batch size.
    pub seat_capacity: u32,

    pub terminal_buffer_capacity: BufferCapacity,

    /// Exponential service and interarrival times instead of their means.
    pub stochastic: bool,

    /// An aircraft reserves the surface before landing and keeps the
    /// reservation until its departing batch is assigned.
    pub blocking: bool,

    /// Departures contend for the landing pad (at lower priority) instead of
    /// using a dedicated departure pad.
    pub tlof_feedback: bool,

    /// Run the passenger arrival process at all.  Without it no batch ever
    /// forms and no aircraft departs.
    pub passenger_arrivals: bool,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for VertiportConfig {
    fn default() -> Self {
        Self::from_rates(10.0, 60.0, 6.0, 1.0)
    }
}

impl VertiportConfig {
    /// Build a configuration from hourly arrival rates and minute-based
    /// service times, with the remaining fields at their usual values.
    ///
    /// Interarrival means are `1 / rate`; service means are `minutes / 60`.
    pub fn from_rates(
        aircraft_per_hour:   f64,
        passengers_per_hour: f64,
        charge_minutes:      f64,
        tlof_minutes:        f64,
    ) -> Self {
        Self {
            num_park:                    1,
            num_aircraft:                2_500,
            num_passengers:              10_000,
            aircraft_mean_interarrival:  1.0 / aircraft_per_hour,
            passenger_mean_interarrival: 1.0 / passengers_per_hour,
            landing_mean_service:        tlof_minutes / 60.0,
            departure_mean_service:      tlof_minutes / 60.0,
            charge_mean_service:         charge_minutes / 60.0,
            seat_capacity:               4,
            terminal_buffer_capacity:    BufferCapacity::Bounded(50),
            stochastic:                  true,
            blocking:                    false,
            tlof_feedback:               true,
            passenger_arrivals:          true,
            seed:                        0,
        }
    }

    /// Mean service time of the single charging server standing in for
    /// `num_park` bays.
    #[inline]
    pub fn effective_charge_mean(&self) -> f64 {
        self.charge_mean_service / self.num_park as f64
    }

    /// Check every field once.  Called by the simulation builder.
    pub fn validate(&self) -> CoreResult<()> {
        positive("aircraft_mean_interarrival", self.aircraft_mean_interarrival)?;
        positive("landing_mean_service", self.landing_mean_service)?;
        positive("departure_mean_service", self.departure_mean_service)?;
        positive("charge_mean_service", self.charge_mean_service)?;
        if self.passenger_arrivals {
            positive("passenger_mean_interarrival", self.passenger_mean_interarrival)?;
        }
        if self.num_park == 0 {
            return Err(CoreError::Config("num_park must be at least 1".into()));
        }
        if self.seat_capacity == 0 {
            return Err(CoreError::Config("seat_capacity must be at least 1".into()));
        }
        if self.num_aircraft == 0 {
            return Err(CoreError::Config("num_aircraft must be at least 1".into()));
        }
        Ok(())
    }
}

fn positive(what: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidDuration { what, value })
    }
}
