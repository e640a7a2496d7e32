//! Single-server mutual exclusion: `PriorityMutex` and `FifoMutex`.
//!
//! Both have capacity 1.  A request on a free mutex is granted on the spot;
//! otherwise the requester joins the wait list and suspends.  On release the
//! head of the wait list becomes the holder immediately and is woken at the
//! current instant.  Nothing is ever preempted.

use std::collections::BTreeMap;

use vp_core::ProcessId;

use crate::{EngineError, EngineResult, Scheduler};

/// Result of a request on a mutex or store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquire {
    /// The caller holds the resource now and may continue.
    Granted,
    /// The caller is on the wait list and must suspend; it is woken once the
    /// resource has been handed to it.
    Queued,
}

// ── PriorityMutex ─────────────────────────────────────────────────────────────

/// Capacity-1 server whose waiters are ordered by (priority ascending,
/// request order).  Lower numeric priority is served first.
#[derive(Debug)]
pub struct PriorityMutex {
    name:     &'static str,
    holder:   Option<ProcessId>,
    waiters:  BTreeMap<(i32, u64), ProcessId>,
    next_seq: u64,
}

impl PriorityMutex {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            holder: None,
            waiters: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Request the mutex for `pid` at `priority`.
    pub fn request(&mut self, pid: ProcessId, priority: i32) -> Acquire {
        if self.holder.is_none() {
            debug_assert!(self.waiters.is_empty());
            self.holder = Some(pid);
            return Acquire::Granted;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.waiters.insert((priority, seq), pid);
        Acquire::Queued
    }

    /// Release the mutex held by `pid`, handing it to the best waiter.
    ///
    /// Returns the new holder, which has been scheduled to resume now.
    pub fn release(
        &mut self,
        pid:       ProcessId,
        scheduler: &mut Scheduler,
    ) -> EngineResult<Option<ProcessId>> {
        if self.holder != Some(pid) {
            return Err(EngineError::NotHolder { resource: self.name, pid });
        }
        self.holder = self.waiters.pop_first().map(|(_, next)| next);
        if let Some(next) = self.holder {
            scheduler.schedule_now(next);
        }
        Ok(self.holder)
    }

    #[inline]
    pub fn holder(&self) -> Option<ProcessId> {
        self.holder
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.holder.is_none()
    }

    /// Number of processes waiting (excluding the holder).
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.waiters.len()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// ── FifoMutex ─────────────────────────────────────────────────────────────────

/// Capacity-1 server with a single FIFO class of waiters.
#[derive(Debug)]
pub struct FifoMutex(PriorityMutex);

impl FifoMutex {
    pub fn new(name: &'static str) -> Self {
        FifoMutex(PriorityMutex::new(name))
    }

    #[inline]
    pub fn request(&mut self, pid: ProcessId) -> Acquire {
        self.0.request(pid, 0)
    }

    #[inline]
    pub fn release(
        &mut self,
        pid:       ProcessId,
        scheduler: &mut Scheduler,
    ) -> EngineResult<Option<ProcessId>> {
        self.0.release(pid, scheduler)
    }

    #[inline]
    pub fn holder(&self) -> Option<ProcessId> {
        self.0.holder()
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.0.queue_len()
    }
}
