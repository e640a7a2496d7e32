//! `MetricsSeries`: an ordered timestamp → value mapping.

use std::collections::BTreeMap;

use vp_core::SimTime;

use crate::{MetricsError, MetricsResult};

/// Offset applied to a colliding timestamp: 0.01 ms expressed in hours.
pub const COLLISION_EPSILON: f64 = 1.0 / (60.0 * 60.0 * 1000.0);

/// Upper bound on collision retries for a single write.
pub const MAX_COLLISION_RETRIES: u32 = 100_000;

/// A step-function sample series: each key is the instant a counter or queue
/// length took on its value.
///
/// Keys are unique.  Writes never overwrite: see [`record`][Self::record].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSeries {
    points: BTreeMap<SimTime, i64>,
    latest: Option<i64>,
}

impl MetricsSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// A series holding `value` at time zero.
    pub fn starting_at(value: i64) -> Self {
        let mut series = Self::new();
        series.points.insert(SimTime::ZERO, value);
        series.latest = Some(value);
        series
    }

    /// The first unused key at or after `at`, stepping by
    /// [`COLLISION_EPSILON`].
    ///
    /// A write never lands before the last key: once a collision has pushed
    /// a sample to `t + ε`, a later write at any time up to that key starts
    /// stepping from it, so key order stays insertion order.
    pub fn free_key(&self, at: SimTime) -> MetricsResult<SimTime> {
        let mut key = match self.last_key() {
            Some(last) if last > at => last,
            _ => at,
        };
        let mut attempts = 0;
        while self.points.contains_key(&key) {
            if attempts == MAX_COLLISION_RETRIES {
                return Err(MetricsError::CollisionRetriesExhausted { at, attempts });
            }
            key = key.after(COLLISION_EPSILON);
            attempts += 1;
        }
        Ok(key)
    }

    /// Store `value` at `at`, or at the next free key if `at` is taken.
    /// Returns the key actually used.
    pub fn record(&mut self, at: SimTime, value: i64) -> MetricsResult<SimTime> {
        let key = self.free_key(at)?;
        self.points.insert(key, value);
        self.latest = Some(value);
        Ok(key)
    }

    /// Record `latest + delta` at `at` and return the new value.
    pub fn apply_delta(&mut self, at: SimTime, delta: i64) -> MetricsResult<i64> {
        let value = self.latest_or_zero() + delta;
        self.record(at, value)?;
        Ok(value)
    }

    /// The most recently written value.
    #[inline]
    pub fn latest(&self) -> Option<i64> {
        self.latest
    }

    #[inline]
    pub fn latest_or_zero(&self) -> i64 {
        self.latest.unwrap_or(0)
    }

    pub fn get(&self, at: SimTime) -> Option<i64> {
        self.points.get(&at).copied()
    }

    /// Samples in key order.
    pub fn iter(&self) -> impl Iterator<Item = (SimTime, i64)> + '_ {
        self.points.iter().map(|(&t, &v)| (t, v))
    }

    pub fn first_key(&self) -> Option<SimTime> {
        self.points.keys().next().copied()
    }

    pub fn last_key(&self) -> Option<SimTime> {
        self.points.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(SimTime, i64)> for MetricsSeries {
    /// Build a series from samples.  Duplicate times keep the last value.
    fn from_iter<T: IntoIterator<Item = (SimTime, i64)>>(iter: T) -> Self {
        let mut series = Self::new();
        for (t, v) in iter {
            series.points.insert(t, v);
            series.latest = Some(v);
        }
        series
    }
}
