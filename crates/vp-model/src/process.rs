//! Process continuations.
//!
//! Each variant of [`Process`] is one logical actor of the vertiport.  Its
//! phase names the point it will continue from when the engine next resumes
//! it: either a timed delay has elapsed, or a resource has been granted.
//!
//! Phases whose name describes a request (`EnterBuffer`, `RequestLanding`, …)
//! issue that request; the phase after it runs once the request is granted,
//! immediately when the resource was free or on a later wake-up otherwise.

use vp_core::{AircraftId, PassengerId, SimTime};

/// Landing requests outrank departure requests on a shared pad.
pub const LANDING_PRIORITY: i32 = 0;
pub const DEPARTURE_PRIORITY: i32 = 1;

// ── Process ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Process {
    /// The aircraft arrival loop.  Ends the run when its id supply runs out.
    AircraftArrivals { armed: bool },
    /// The passenger arrival loop.  Finishes quietly when its id supply runs
    /// out.
    PassengerArrivals { armed: bool },
    /// One admitted aircraft, from the terminal buffer until it is ready to
    /// depart.
    Aircraft(AircraftFlow),
    /// One full batch of passengers waiting for a charged aircraft.
    Pooling(PoolingFlow),
    /// One aircraft carrying a batch off the departure pad.
    Departure(DepartureFlow),
}

impl Process {
    pub fn aircraft_arrivals() -> Self {
        Process::AircraftArrivals { armed: false }
    }

    pub fn passenger_arrivals() -> Self {
        Process::PassengerArrivals { armed: false }
    }
}

// ── Aircraft ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftPhase {
    EnterBuffer,
    InBuffer,
    ReserveSurface,
    SurfaceReserved,
    RequestLanding,
    OnLandingPad,
    Landed,
    Parked,
    Charged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AircraftFlow {
    pub id:    AircraftId,
    pub phase: AircraftPhase,
    /// Start of the wait currently being measured.
    pub since: SimTime,
}

impl AircraftFlow {
    pub fn new(id: AircraftId, now: SimTime) -> Self {
        Self { id, phase: AircraftPhase::EnterBuffer, since: now }
    }
}

// ── Pooling ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolingPhase {
    Claim,
    AwaitingAircraft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoolingFlow {
    /// Exactly `seat_capacity` passengers, oldest first.
    pub batch: Vec<PassengerId>,
    pub phase: PoolingPhase,
}

impl PoolingFlow {
    pub fn new(batch: Vec<PassengerId>) -> Self {
        Self { batch, phase: PoolingPhase::Claim }
    }
}

// ── Departure ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeparturePhase {
    RequestPad,
    OnPad,
    Departed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartureFlow {
    pub aircraft: AircraftId,
    pub phase:    DeparturePhase,
    pub since:    SimTime,
}

impl DepartureFlow {
    pub fn new(aircraft: AircraftId, now: SimTime) -> Self {
        Self { aircraft, phase: DeparturePhase::RequestPad, since: now }
    }
}
