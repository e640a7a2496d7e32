//! The process runtime: `Kernel`, the `Model` trait and the `Engine` loop.

use rustc_hash::FxHashMap;
use tracing::debug;

use vp_core::{ProcessId, SimTime};

use crate::{EngineError, EngineObserver, Scheduler, TerminationSignal};

// ── Resume ────────────────────────────────────────────────────────────────────

/// What a process reports when it yields control back to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    /// The process reached a suspension point and has registered a wake-up
    /// (a timed delay) or a waiter entry on some resource.
    Suspend,
    /// The process finished its modelled lifecycle and is dropped.
    Done,
}

// ── Kernel ────────────────────────────────────────────────────────────────────

/// The part of the engine a process may touch while it runs: the clock and
/// scheduler, process spawning, and the termination signal.
pub struct Kernel<P> {
    pub scheduler: Scheduler,
    termination:   TerminationSignal,
    next_pid:      u32,
    spawned:       Vec<(ProcessId, P)>,
}

impl<P> Kernel<P> {
    fn new(termination: TerminationSignal) -> Self {
        Self {
            scheduler: Scheduler::new(),
            termination,
            next_pid: 0,
            spawned: Vec::new(),
        }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.scheduler.now()
    }

    /// Suspend `pid` for `delay` hours.
    #[inline]
    pub fn sleep(&mut self, pid: ProcessId, delay: f64) {
        self.scheduler.schedule_after(delay, pid);
    }

    /// Register a new process.  It first runs at the current instant, after
    /// every wake-up already due now.
    pub fn spawn(&mut self, process: P) -> ProcessId {
        let pid = ProcessId(self.next_pid);
        self.next_pid += 1;
        self.spawned.push((pid, process));
        self.scheduler.schedule_now(pid);
        pid
    }

    /// Fire the termination signal.  Idempotent: returns `false` if it had
    /// already fired.
    pub fn terminate(&mut self) -> bool {
        self.termination.fire(self.scheduler.now())
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.termination.is_fired()
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// The simulated system: owns every resource and metric, and knows how to
/// advance any of its processes from one suspension point to the next.
pub trait Model {
    /// Per-process continuation state.
    type Process;
    type Error: From<EngineError>;

    /// Run `process` from its current phase until it suspends or finishes.
    fn resume(
        &mut self,
        pid:     ProcessId,
        process: &mut Self::Process,
        kernel:  &mut Kernel<Self::Process>,
    ) -> Result<Resume, Self::Error>;
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Outcome of [`Engine::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Clock value when the run stopped.
    pub end_time:       SimTime,
    /// Number of process resumptions performed.
    pub events:         u64,
    /// Processes still suspended when the run stopped.
    pub live_processes: usize,
}

/// Drives a [`Model`] until its termination signal fires.
pub struct Engine<M: Model> {
    pub model:  M,
    kernel:     Kernel<M::Process>,
    processes:  FxHashMap<ProcessId, M::Process>,
    events:     u64,
}

impl<M: Model> Engine<M> {
    pub fn new(model: M, termination: TerminationSignal) -> Self {
        Self {
            model,
            kernel: Kernel::new(termination),
            processes: FxHashMap::default(),
            events: 0,
        }
    }

    /// Register an initial process, first resumed at the current instant.
    pub fn spawn(&mut self, process: M::Process) -> ProcessId {
        let pid = self.kernel.spawn(process);
        self.adopt_spawned();
        pid
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.kernel.now()
    }

    pub fn live_processes(&self) -> usize {
        self.processes.len()
    }

    pub fn into_model(self) -> M {
        self.model
    }

    /// Resume processes until the termination signal fires.
    ///
    /// The signal is the only stopping condition: processes still in flight
    /// at that point are left suspended.  Draining the event queue first is
    /// an error ([`EngineError::Stalled`]).
    pub fn run<O: EngineObserver>(&mut self, observer: &mut O) -> Result<RunSummary, M::Error> {
        while !self.kernel.is_terminated() {
            self.step(observer)?;
        }
        let end_time = self.kernel.now();
        debug!(%end_time, events = self.events, live = self.processes.len(), "engine stopped");
        observer.on_run_end(end_time, self.events);
        Ok(RunSummary {
            end_time,
            events: self.events,
            live_processes: self.processes.len(),
        })
    }

    /// Resume exactly one process: the earliest pending wake-up.
    pub fn step<O: EngineObserver>(&mut self, observer: &mut O) -> Result<(), M::Error> {
        let Some(wakeup) = self.kernel.scheduler.pop_next() else {
            return Err(EngineError::Stalled { now: self.kernel.now() }.into());
        };
        let Some(mut process) = self.processes.remove(&wakeup.pid) else {
            return Err(EngineError::UnknownProcess(wakeup.pid).into());
        };

        observer.on_resume(wakeup.at, wakeup.pid);
        let outcome = self.model.resume(wakeup.pid, &mut process, &mut self.kernel)?;
        if outcome == Resume::Suspend {
            self.processes.insert(wakeup.pid, process);
        }
        self.adopt_spawned();
        self.events += 1;
        Ok(())
    }

    fn adopt_spawned(&mut self) {
        for (pid, process) in self.kernel.spawned.drain(..) {
            self.processes.insert(pid, process);
        }
    }
}
