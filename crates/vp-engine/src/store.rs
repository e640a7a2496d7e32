//! Buffers: `TokenStore` (interchangeable capacity tokens) and
//! `HandoffQueue` (FIFO hand-off of items between processes).

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use vp_core::ProcessId;

use crate::{Acquire, EngineError, EngineResult, Scheduler};

// ── TokenStore ────────────────────────────────────────────────────────────────

/// A pool of interchangeable tokens with FIFO waiters.
///
/// A bounded store starts full with `capacity` tokens and conserves them:
/// `in_use + available == capacity` at all times.  An unbounded store starts
/// empty; [`synthesize`][Self::synthesize] mints a token on demand so a `get`
/// never has to wait.
#[derive(Debug)]
pub struct TokenStore {
    name:      &'static str,
    capacity:  Option<usize>,
    available: usize,
    in_use:    usize,
    getters:   VecDeque<ProcessId>,
}

impl TokenStore {
    /// A store holding `capacity` tokens.
    pub fn bounded(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            capacity: Some(capacity),
            available: capacity,
            in_use: 0,
            getters: VecDeque::new(),
        }
    }

    /// A store with no capacity limit and no initial stock.
    pub fn unbounded(name: &'static str) -> Self {
        Self {
            name,
            capacity: None,
            available: 0,
            in_use: 0,
            getters: VecDeque::new(),
        }
    }

    /// Mint a token if the store is unbounded and has none available.
    ///
    /// Returns whether a token was created.  A no-op on bounded stores.
    pub fn synthesize(&mut self) -> bool {
        if self.capacity.is_none() && self.available == 0 {
            self.available += 1;
            true
        } else {
            false
        }
    }

    /// Take a token for `pid`, or join the wait list.
    pub fn get(&mut self, pid: ProcessId) -> Acquire {
        if self.available > 0 {
            self.available -= 1;
            self.in_use += 1;
            Acquire::Granted
        } else {
            self.getters.push_back(pid);
            Acquire::Queued
        }
    }

    /// Return a token.  If a getter is waiting the token passes straight to
    /// it and it is woken now; that getter is returned.
    pub fn put(&mut self, scheduler: &mut Scheduler) -> EngineResult<Option<ProcessId>> {
        if self.in_use == 0 {
            return Err(EngineError::StoreOverflow { resource: self.name });
        }
        if let Some(next) = self.getters.pop_front() {
            scheduler.schedule_now(next);
            return Ok(Some(next));
        }
        self.in_use -= 1;
        self.available += 1;
        Ok(None)
    }

    #[inline]
    pub fn available(&self) -> usize {
        self.available
    }

    #[inline]
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of processes waiting for a token.
    #[inline]
    pub fn waiting(&self) -> usize {
        self.getters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.available == 0
    }
}

// ── HandoffQueue ──────────────────────────────────────────────────────────────

/// Unbounded FIFO of items with FIFO getters.
///
/// `put` never waits.  A `get` on an empty queue suspends; when an item
/// arrives it is parked for the longest-waiting getter, which collects it on
/// resumption with [`take_delivered`][Self::take_delivered].
#[derive(Debug)]
pub struct HandoffQueue<T> {
    items:     VecDeque<T>,
    getters:   VecDeque<ProcessId>,
    delivered: FxHashMap<ProcessId, T>,
}

impl<T> Default for HandoffQueue<T> {
    fn default() -> Self {
        Self {
            items:     VecDeque::new(),
            getters:   VecDeque::new(),
            delivered: FxHashMap::default(),
        }
    }
}

impl<T> HandoffQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, delivering it to a waiting getter if there is one.
    pub fn put(&mut self, item: T, scheduler: &mut Scheduler) -> Option<ProcessId> {
        match self.getters.pop_front() {
            Some(getter) => {
                self.delivered.insert(getter, item);
                scheduler.schedule_now(getter);
                Some(getter)
            }
            None => {
                self.items.push_back(item);
                None
            }
        }
    }

    /// Take the oldest item, or register `pid` as a waiting getter.
    pub fn get(&mut self, pid: ProcessId) -> Option<T> {
        let item = self.items.pop_front();
        if item.is_none() {
            self.getters.push_back(pid);
        }
        item
    }

    /// Collect the item delivered to `pid` while it was waiting.
    pub fn take_delivered(&mut self, pid: ProcessId) -> Option<T> {
        self.delivered.remove(&pid)
    }

    /// Items waiting for a getter.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Getters waiting for an item.
    #[inline]
    pub fn waiting(&self) -> usize {
        self.getters.len()
    }
}
