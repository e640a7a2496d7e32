//! Simulated time model.
//!
//! # Design
//!
//! Time is continuous and measured in **hours** since the start of the run.
//! `SimTime` wraps an `f64` and orders with `f64::total_cmp`, so it can key
//! a `BTreeMap` or a `BinaryHeap` directly.  Constructors reject negative and
//! non-finite values in debug builds; the clock never moves backwards.
//!
//! For logs, `Display` renders the offset from the start as
//! `T+<days>d HH:MM:SS.mmm`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Milliseconds per simulated hour.
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// An absolute point in simulated time, in hours from the start of the run.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn from_hours(hours: f64) -> SimTime {
        debug_assert!(hours.is_finite() && hours >= 0.0, "invalid sim time {hours}");
        SimTime(hours)
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.0
    }

    /// The instant `delay` hours after `self`.
    #[inline]
    pub fn after(self, delay: f64) -> SimTime {
        debug_assert!(delay >= 0.0, "negative delay {delay}");
        SimTime(self.0 + delay)
    }

    /// Hours elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// Break the offset into (days, hours, minutes, seconds, millis).
    pub fn dhms(self) -> (u64, u32, u32, u32, u32) {
        let total_ms = (self.0.max(0.0) * MILLIS_PER_HOUR).round() as u64;
        let days = total_ms / 86_400_000;
        let hours = ((total_ms % 86_400_000) / 3_600_000) as u32;
        let minutes = ((total_ms % 3_600_000) / 60_000) as u32;
        let seconds = ((total_ms % 60_000) / 1_000) as u32;
        let millis = (total_ms % 1_000) as u32;
        (days, hours, minutes, seconds, millis)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for SimTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        self.after(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.since(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m, s, ms) = self.dhms();
        write!(f, "T+{d}d {h:02}:{m:02}:{s:02}.{ms:03}")
    }
}
