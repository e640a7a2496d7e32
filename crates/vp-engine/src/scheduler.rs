//! `Scheduler`: the simulation clock and its pending wake-ups.
//!
//! A min-ordered heap of `(due time, sequence)` keys.  The sequence number is
//! assigned at scheduling time, so wake-ups due at the same instant come out
//! in the order they were scheduled.  Popping advances the clock; the clock
//! never moves backwards.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use vp_core::{ProcessId, SimTime};

/// A pending resumption of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wakeup {
    pub at:  SimTime,
    pub seq: u64,
    pub pid: ProcessId,
}

impl Ord for Wakeup {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by (at, seq).
        other
            .at
            .cmp(&self.at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Wakeup {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now:      SimTime,
    queue:    BinaryHeap<Wakeup>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Schedule `pid` to resume at the absolute time `at`.
    pub fn schedule_at(&mut self, at: SimTime, pid: ProcessId) {
        debug_assert!(at >= self.now, "wake-up at {at} is before now ({})", self.now);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Wakeup { at, seq, pid });
    }

    /// Schedule `pid` to resume `delay` hours from now.
    #[inline]
    pub fn schedule_after(&mut self, delay: f64, pid: ProcessId) {
        self.schedule_at(self.now.after(delay), pid);
    }

    /// Schedule `pid` to resume at the current instant, after everything
    /// already due now.
    #[inline]
    pub fn schedule_now(&mut self, pid: ProcessId) {
        self.schedule_at(self.now, pid);
    }

    /// Remove the earliest wake-up and advance the clock to it.
    pub fn pop_next(&mut self) -> Option<Wakeup> {
        let wakeup = self.queue.pop()?;
        self.now = wakeup.at;
        Some(wakeup)
    }

    /// Due time of the earliest pending wake-up.
    pub fn next_time(&self) -> Option<SimTime> {
        self.queue.peek().map(|w| w.at)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
