//! Unit tests for vp-engine.

use vp_core::{ProcessId, SimTime};

use crate::{
    Acquire, Engine, EngineError, EngineObserver, FifoMutex, HandoffQueue, Kernel, Model,
    NoopObserver, PriorityMutex, Resume, Scheduler, TerminationSignal, TokenStore,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pid(n: u32) -> ProcessId {
    ProcessId(n)
}

/// Toy processes: a sleeper that logs each wake, a stopper that fires the
/// termination signal, and a pad user contending for a priority mutex.
enum Toy {
    Sleeper { remaining: u32, period: f64 },
    Stopper { at: f64, armed: bool },
    PadUser { priority: i32, hold: f64, phase: PadPhase },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PadPhase {
    Start,
    Waiting,
    Holding,
}

struct ToyModel {
    pad: PriorityMutex,
    log: Vec<(SimTime, ProcessId)>,
}

impl ToyModel {
    fn new() -> Self {
        Self { pad: PriorityMutex::new("pad"), log: Vec::new() }
    }
}

impl Model for ToyModel {
    type Process = Toy;
    type Error = EngineError;

    fn resume(
        &mut self,
        pid:     ProcessId,
        process: &mut Toy,
        kernel:  &mut Kernel<Toy>,
    ) -> Result<Resume, EngineError> {
        match process {
            Toy::Sleeper { remaining, period } => {
                self.log.push((kernel.now(), pid));
                if *remaining == 0 {
                    return Ok(Resume::Done);
                }
                *remaining -= 1;
                kernel.sleep(pid, *period);
                Ok(Resume::Suspend)
            }
            Toy::Stopper { at, armed } => {
                if !*armed {
                    *armed = true;
                    kernel.sleep(pid, *at);
                    return Ok(Resume::Suspend);
                }
                kernel.terminate();
                Ok(Resume::Done)
            }
            Toy::PadUser { priority, hold, phase } => match *phase {
                PadPhase::Start => match self.pad.request(pid, *priority) {
                    Acquire::Granted => {
                        kernel.sleep(pid, *hold);
                        *phase = PadPhase::Holding;
                        Ok(Resume::Suspend)
                    }
                    Acquire::Queued => {
                        *phase = PadPhase::Waiting;
                        Ok(Resume::Suspend)
                    }
                },
                PadPhase::Waiting => {
                    assert_eq!(self.pad.holder(), Some(pid));
                    kernel.sleep(pid, *hold);
                    *phase = PadPhase::Holding;
                    Ok(Resume::Suspend)
                }
                PadPhase::Holding => {
                    self.log.push((kernel.now(), pid));
                    self.pad.release(pid, &mut kernel.scheduler)?;
                    Ok(Resume::Done)
                }
            },
        }
    }
}

#[derive(Default)]
struct CountingObserver {
    resumes: u64,
    ended:   Option<(SimTime, u64)>,
    last:    SimTime,
}

impl EngineObserver for CountingObserver {
    fn on_resume(&mut self, now: SimTime, _pid: ProcessId) {
        assert!(now >= self.last, "clock moved backwards");
        self.last = now;
        self.resumes += 1;
    }

    fn on_run_end(&mut self, now: SimTime, events: u64) {
        self.ended = Some((now, events));
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use super::*;

    #[test]
    fn pops_in_time_order_and_advances_clock() {
        let mut s = Scheduler::new();
        s.schedule_at(SimTime(10.0), pid(0));
        s.schedule_at(SimTime(5.0), pid(1));
        s.schedule_at(SimTime(20.0), pid(2));

        assert_eq!(s.next_time(), Some(SimTime(5.0)));
        assert_eq!(s.pop_next().unwrap().pid, pid(1));
        assert_eq!(s.now(), SimTime(5.0));
        assert_eq!(s.pop_next().unwrap().pid, pid(0));
        assert_eq!(s.now(), SimTime(10.0));
        assert_eq!(s.pop_next().unwrap().pid, pid(2));
        assert_eq!(s.now(), SimTime(20.0));
        assert!(s.pop_next().is_none());
        assert!(s.is_empty());
    }

    #[test]
    fn equal_due_times_are_fifo() {
        let mut s = Scheduler::new();
        for n in [4, 2, 9, 0, 7] {
            s.schedule_at(SimTime(1.0), pid(n));
        }
        let order: Vec<u32> = std::iter::from_fn(|| s.pop_next()).map(|w| w.pid.0).collect();
        assert_eq!(order, vec![4, 2, 9, 0, 7]);
    }

    #[test]
    fn schedule_after_is_relative_to_now() {
        let mut s = Scheduler::new();
        s.schedule_after(2.0, pid(0));
        s.pop_next();
        s.schedule_after(0.5, pid(1));
        s.schedule_now(pid(2));
        assert_eq!(s.pop_next().unwrap().pid, pid(2));
        assert_eq!(s.now(), SimTime(2.0));
        assert_eq!(s.pop_next().unwrap().at, SimTime(2.5));
    }
}

// ── Mutexes ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mutexes {
    use super::*;

    #[test]
    fn free_mutex_grants_immediately() {
        let mut m = PriorityMutex::new("pad");
        assert_eq!(m.request(pid(0), 1), Acquire::Granted);
        assert_eq!(m.holder(), Some(pid(0)));
        assert_eq!(m.request(pid(1), 0), Acquire::Queued);
        assert_eq!(m.queue_len(), 1);
    }

    #[test]
    fn lower_priority_value_served_first_then_fifo() {
        let mut s = Scheduler::new();
        let mut m = PriorityMutex::new("pad");
        m.request(pid(0), 0);
        m.request(pid(1), 1); // departure
        m.request(pid(2), 0); // landing
        m.request(pid(3), 1); // departure
        m.request(pid(4), 0); // landing

        let mut served = vec![];
        let mut holder = pid(0);
        while let Some(next) = m.release(holder, &mut s).unwrap() {
            served.push(next.0);
            holder = next;
        }
        assert_eq!(served, vec![2, 4, 1, 3]);
        assert!(m.is_free());
    }

    #[test]
    fn release_wakes_new_holder_now() {
        let mut s = Scheduler::new();
        let mut m = PriorityMutex::new("pad");
        m.request(pid(0), 0);
        m.request(pid(1), 1);
        m.release(pid(0), &mut s).unwrap();
        let w = s.pop_next().unwrap();
        assert_eq!(w.pid, pid(1));
        assert_eq!(w.at, SimTime::ZERO);
    }

    #[test]
    fn release_by_non_holder_fails() {
        let mut s = Scheduler::new();
        let mut m = PriorityMutex::new("pad");
        m.request(pid(0), 0);
        let err = m.release(pid(5), &mut s).unwrap_err();
        assert!(matches!(err, EngineError::NotHolder { resource: "pad", .. }));
    }

    #[test]
    fn fifo_mutex_serves_in_arrival_order() {
        let mut s = Scheduler::new();
        let mut m = FifoMutex::new("park");
        for n in 0..4 {
            m.request(pid(n));
        }
        assert_eq!(m.queue_len(), 3);
        assert_eq!(m.release(pid(0), &mut s).unwrap(), Some(pid(1)));
        assert_eq!(m.release(pid(1), &mut s).unwrap(), Some(pid(2)));
        assert_eq!(m.release(pid(2), &mut s).unwrap(), Some(pid(3)));
        assert_eq!(m.release(pid(3), &mut s).unwrap(), None);
        assert_eq!(m.holder(), None);
    }
}

// ── Stores ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stores {
    use super::*;

    #[test]
    fn bounded_store_conserves_tokens() {
        let mut s = Scheduler::new();
        let mut store = TokenStore::bounded("buffer", 3);
        for n in 0..3 {
            assert_eq!(store.get(pid(n)), Acquire::Granted);
            assert_eq!(store.in_use() + store.available(), 3);
        }
        assert!(store.is_empty());
        assert_eq!(store.get(pid(9)), Acquire::Queued);
        assert_eq!(store.in_use() + store.available(), 3);

        // The returned token goes straight to the waiter.
        assert_eq!(store.put(&mut s).unwrap(), Some(pid(9)));
        assert_eq!(store.in_use(), 3);
        assert_eq!(store.put(&mut s).unwrap(), None);
        assert_eq!((store.in_use(), store.available()), (2, 1));
    }

    #[test]
    fn zero_capacity_store_is_always_empty() {
        let store = TokenStore::bounded("buffer", 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), Some(0));
    }

    #[test]
    fn put_without_outstanding_token_overflows() {
        let mut s = Scheduler::new();
        let mut store = TokenStore::bounded("surface", 1);
        let err = store.put(&mut s).unwrap_err();
        assert!(matches!(err, EngineError::StoreOverflow { resource: "surface" }));
    }

    #[test]
    fn unbounded_store_synthesizes_on_demand() {
        let mut s = Scheduler::new();
        let mut store = TokenStore::unbounded("buffer");
        assert!(store.synthesize());
        assert!(!store.synthesize(), "one spare token is enough");
        assert_eq!(store.get(pid(0)), Acquire::Granted);
        assert!(store.synthesize());
        assert_eq!(store.get(pid(1)), Acquire::Granted);
        assert_eq!(store.in_use(), 2);
        store.put(&mut s).unwrap();
        assert!(!store.synthesize(), "returned token is reused");
        assert_eq!(store.capacity(), None);
    }

    #[test]
    fn bounded_store_never_synthesizes() {
        let mut store = TokenStore::bounded("buffer", 0);
        assert!(!store.synthesize());
        assert_eq!(store.available(), 0);
    }

    #[test]
    fn handoff_item_before_getter() {
        let mut s = Scheduler::new();
        let mut q = HandoffQueue::new();
        assert_eq!(q.put("a", &mut s), None);
        assert_eq!(q.put("b", &mut s), None);
        assert_eq!(q.get(pid(0)), Some("a"));
        assert_eq!(q.get(pid(1)), Some("b"));
        assert!(q.is_empty());
    }

    #[test]
    fn handoff_getter_before_item() {
        let mut s = Scheduler::new();
        let mut q = HandoffQueue::new();
        assert_eq!(q.get(pid(0)), None);
        assert_eq!(q.get(pid(1)), None);
        assert_eq!(q.waiting(), 2);
        assert_eq!(q.put(10, &mut s), Some(pid(0)));
        assert_eq!(q.put(11, &mut s), Some(pid(1)));
        assert_eq!(q.take_delivered(pid(1)), Some(11));
        assert_eq!(q.take_delivered(pid(0)), Some(10));
        assert_eq!(q.take_delivered(pid(0)), None);
        assert_eq!(s.pop_next().unwrap().pid, pid(0));
    }
}

// ── Signal ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod signal {
    use super::*;

    #[test]
    fn fires_once_and_is_shared() {
        let external = TerminationSignal::new();
        let internal = external.clone();
        assert!(!external.is_fired());
        assert!(internal.fire(SimTime(3.0)));
        assert!(!internal.fire(SimTime(4.0)));
        assert_eq!(external.fired_at(), Some(SimTime(3.0)));
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn runs_until_signal_and_leaves_in_flight_processes() {
        let signal = TerminationSignal::new();
        let mut engine = Engine::new(ToyModel::new(), signal.clone());
        engine.spawn(Toy::Sleeper { remaining: 100, period: 1.0 });
        engine.spawn(Toy::Stopper { at: 3.5, armed: false });

        let mut obs = CountingObserver::default();
        let summary = engine.run(&mut obs).unwrap();

        assert_eq!(summary.end_time, SimTime(3.5));
        assert_eq!(signal.fired_at(), Some(SimTime(3.5)));
        assert_eq!(summary.live_processes, 1, "sleeper is cut off mid-life");
        assert_eq!(obs.ended, Some((SimTime(3.5), summary.events)));
        assert_eq!(obs.resumes, summary.events);
        let times: Vec<f64> = engine.model.log.iter().map(|(t, _)| t.hours()).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn drained_queue_without_signal_is_stalled() {
        let mut engine = Engine::new(ToyModel::new(), TerminationSignal::new());
        engine.spawn(Toy::Sleeper { remaining: 2, period: 1.0 });
        let err = engine.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, EngineError::Stalled { now } if now == SimTime(2.0)));
    }

    #[test]
    fn landing_priority_wins_at_release() {
        let mut engine = Engine::new(ToyModel::new(), TerminationSignal::new());
        let holder = engine.spawn(Toy::PadUser { priority: 0, hold: 1.0, phase: PadPhase::Start });
        let departure = engine.spawn(Toy::PadUser { priority: 1, hold: 1.0, phase: PadPhase::Start });
        let landing = engine.spawn(Toy::PadUser { priority: 0, hold: 1.0, phase: PadPhase::Start });
        engine.spawn(Toy::Stopper { at: 10.0, armed: false });

        engine.run(&mut NoopObserver).unwrap();

        let order: Vec<(f64, ProcessId)> =
            engine.model.log.iter().map(|(t, p)| (t.hours(), *p)).collect();
        assert_eq!(order, vec![(1.0, holder), (2.0, landing), (3.0, departure)]);
    }

    #[test]
    fn identical_runs_are_identical() {
        let run = || {
            let mut engine = Engine::new(ToyModel::new(), TerminationSignal::new());
            for n in 0..5 {
                engine.spawn(Toy::PadUser { priority: n % 2, hold: 0.5, phase: PadPhase::Start });
                engine.spawn(Toy::Sleeper { remaining: 3, period: 0.25 * (n + 1) as f64 });
            }
            engine.spawn(Toy::Stopper { at: 8.0, armed: false });
            engine.run(&mut NoopObserver).unwrap();
            engine.into_model().log
        };
        assert_eq!(run(), run());
    }
}
