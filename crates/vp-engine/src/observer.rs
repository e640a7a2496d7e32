//! Engine observer trait for progress reporting.

use vp_core::{ProcessId, SimTime};

/// Callbacks invoked by [`Engine::run`][crate::Engine::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait EngineObserver {
    /// Called just before a process is resumed, after the clock advanced.
    fn on_resume(&mut self, _now: SimTime, _pid: ProcessId) {}

    /// Called once when the run stops, with the total number of resumptions.
    fn on_run_end(&mut self, _now: SimTime, _events: u64) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
