//! One-shot termination signal.

use std::sync::{Arc, OnceLock};

use vp_core::SimTime;

/// A signal that is fulfilled at most once, recording the simulated time at
/// which it fired.
///
/// Clones share the same underlying slot, so the party that supplies the
/// signal can keep a handle and inspect it after the run.
#[derive(Clone, Debug, Default)]
pub struct TerminationSignal {
    fired: Arc<OnceLock<SimTime>>,
}

impl TerminationSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the signal at `at`.  Returns `false` if it had already fired; the
    /// first firing time is kept.
    pub fn fire(&self, at: SimTime) -> bool {
        self.fired.set(at).is_ok()
    }

    pub fn is_fired(&self) -> bool {
        self.fired.get().is_some()
    }

    pub fn fired_at(&self) -> Option<SimTime> {
        self.fired.get().copied()
    }
}
