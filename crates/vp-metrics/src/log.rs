//! Per-entity timing log.
//!
//! One flat map keyed by `(AgentKind, id)`; each record names every
//! milestone and duration the vertiport process model writes.  Records are
//! for post-hoc reporting only.

use std::collections::BTreeMap;

use vp_core::SimTime;

use crate::AgentKind;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct EntityKey {
    pub kind: AgentKind,
    pub id:   u32,
}

/// Timestamps and durations (hours) of one aircraft or passenger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityRecord {
    pub arrival:               Option<SimTime>,
    /// Aircraft: took the departure pad.
    pub pushback:              Option<SimTime>,
    /// Aircraft: left the departure pad.
    pub departure:             Option<SimTime>,
    pub departure_queue_enter: Option<SimTime>,
    pub departure_queue_exit:  Option<SimTime>,

    /// Aircraft: terminal buffer entry → landing pad grant.
    pub tlof_arrival_wait:     Option<f64>,
    /// Aircraft: landed → charging server grant.
    pub park_wait:             Option<f64>,
    /// Aircraft: batch assigned → departure pad grant.
    pub tlof_departure_wait:   Option<f64>,
    /// Passenger: arrival → assigned to an aircraft.
    pub passenger_wait:        Option<f64>,

    pub landing_service:       Option<f64>,
    pub charge_service:        Option<f64>,
    pub departure_service:     Option<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct EntityLog {
    records: BTreeMap<EntityKey, EntityRecord>,
}

impl EntityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record for `(kind, id)`, created empty on first access.
    pub fn entry(&mut self, kind: AgentKind, id: u32) -> &mut EntityRecord {
        self.records.entry(EntityKey { kind, id }).or_default()
    }

    pub fn get(&self, kind: AgentKind, id: u32) -> Option<&EntityRecord> {
        self.records.get(&EntityKey { kind, id })
    }

    /// Records in (kind, id) order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityKey, &EntityRecord)> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
