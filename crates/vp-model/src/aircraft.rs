//! Aircraft arrivals and the inbound turnaround.
//!
//! ```text
//! arrival ─┬─ buffer full (bounded) ──────────────────────────► rejected
//!          └─ buffer token ─► [surface slot] ─► landing pad (prio 0)
//!               ─► landing ─► park/charge ─► ready_aircraft hand-off
//! ```
//!
//! The departure leg starts from the pooling process once a passenger batch
//! claims the aircraft (see the passenger module).

use tracing::{debug, info};

use vp_core::{AircraftId, ProcessId, SimTime};
use vp_engine::{Acquire, Kernel, Resume};
use vp_metrics::{AgentKind, CounterKind, QueueKind};

use crate::process::{AircraftFlow, AircraftPhase, LANDING_PRIORITY};
use crate::{ModelResult, Process, VertiportSim};

impl VertiportSim {
    /// The arrival loop: sleep one interarrival time, then admit or reject
    /// the next aircraft.  Once the id supply is exhausted the termination
    /// signal fires and the loop ends.
    pub(crate) fn resume_aircraft_arrivals(
        &mut self,
        pid:    ProcessId,
        armed:  &mut bool,
        kernel: &mut Kernel<Process>,
    ) -> ModelResult<Resume> {
        if *armed {
            let now = kernel.now();
            let Some(id) = self.aircraft_ids.next_id() else {
                if kernel.terminate() {
                    info!(%now, consumed = self.aircraft_ids.consumed(), "aircraft supply exhausted, stopping run");
                }
                return Ok(Resume::Done);
            };
            self.admit_aircraft(id, now, kernel)?;
        }
        *armed = true;
        let delay = self.draw(self.config.aircraft_mean_interarrival);
        kernel.sleep(pid, delay);
        Ok(Resume::Suspend)
    }

    /// Reject the aircraft if a bounded buffer is full at this instant,
    /// otherwise count it and start its turnaround.
    fn admit_aircraft(
        &mut self,
        id:     AircraftId,
        now:    SimTime,
        kernel: &mut Kernel<Process>,
    ) -> ModelResult<()> {
        self.log.entry(AgentKind::Aircraft, id.get()).arrival = Some(now);

        if self.config.terminal_buffer_capacity.is_bounded() && self.terminal.is_empty() {
            let rejected = self.metrics.record_rejection();
            debug!(%now, aircraft = %id, rejected, "terminal buffer full, aircraft rejected");
            return Ok(());
        }

        self.metrics.increment(AgentKind::Aircraft, CounterKind::Arrival, now, 1)?;
        kernel.spawn(Process::Aircraft(AircraftFlow::new(id, now)));
        Ok(())
    }

    /// Advance one aircraft from buffer entry to the ready hand-off.
    pub(crate) fn resume_aircraft(
        &mut self,
        pid:    ProcessId,
        flow:   &mut AircraftFlow,
        kernel: &mut Kernel<Process>,
    ) -> ModelResult<Resume> {
        let id = flow.id;
        loop {
            let now = kernel.now();
            match flow.phase {
                AircraftPhase::EnterBuffer => {
                    self.terminal.synthesize();
                    flow.phase = AircraftPhase::InBuffer;
                    if self.terminal.get(pid) == Acquire::Queued {
                        return Ok(Resume::Suspend);
                    }
                }

                AircraftPhase::InBuffer => {
                    let queued = self.metrics.adjust_queue(QueueKind::AircraftArrival, now, 1)?;
                    debug!(%now, aircraft = %id, queued, "entered terminal buffer");
                    flow.since = now;
                    flow.phase = if self.config.blocking {
                        AircraftPhase::ReserveSurface
                    } else {
                        AircraftPhase::RequestLanding
                    };
                }

                AircraftPhase::ReserveSurface => {
                    flow.phase = AircraftPhase::SurfaceReserved;
                    if self.surface.get(pid) == Acquire::Queued {
                        return Ok(Resume::Suspend);
                    }
                }

                AircraftPhase::SurfaceReserved => {
                    debug!(%now, aircraft = %id, "surface reserved");
                    flow.phase = AircraftPhase::RequestLanding;
                }

                AircraftPhase::RequestLanding => {
                    flow.phase = AircraftPhase::OnLandingPad;
                    if self.landing_pad.request(pid, LANDING_PRIORITY) == Acquire::Queued {
                        return Ok(Resume::Suspend);
                    }
                }

                AircraftPhase::OnLandingPad => {
                    self.metrics.adjust_queue(QueueKind::AircraftArrival, now, -1)?;
                    self.terminal.put(&mut kernel.scheduler)?;
                    let service = self.draw(self.config.landing_mean_service);
                    let record = self.log.entry(AgentKind::Aircraft, id.get());
                    record.tlof_arrival_wait = Some(now - flow.since);
                    record.landing_service = Some(service);
                    debug!(%now, aircraft = %id, service, "left terminal buffer, landing");
                    flow.phase = AircraftPhase::Landed;
                    kernel.sleep(pid, service);
                    return Ok(Resume::Suspend);
                }

                AircraftPhase::Landed => {
                    self.landing_pad.release(pid, &mut kernel.scheduler)?;
                    let on_surface = self.metrics.adjust_queue(QueueKind::SurfaceOccupancy, now, 1)?;
                    self.metrics.adjust_queue(QueueKind::Park, now, 1)?;
                    debug!(%now, aircraft = %id, on_surface, "landed");
                    flow.since = now;
                    flow.phase = AircraftPhase::Parked;
                    if self.park.request(pid) == Acquire::Queued {
                        return Ok(Resume::Suspend);
                    }
                }

                AircraftPhase::Parked => {
                    self.metrics.adjust_queue(QueueKind::Park, now, -1)?;
                    let service = self.draw(self.config.effective_charge_mean());
                    let record = self.log.entry(AgentKind::Aircraft, id.get());
                    record.park_wait = Some(now - flow.since);
                    record.charge_service = Some(service);
                    debug!(%now, aircraft = %id, service, "parked, charging");
                    flow.phase = AircraftPhase::Charged;
                    kernel.sleep(pid, service);
                    return Ok(Resume::Suspend);
                }

                AircraftPhase::Charged => {
                    self.park.release(pid, &mut kernel.scheduler)?;
                    self.ready_aircraft.put(id, &mut kernel.scheduler);
                    self.log.entry(AgentKind::Aircraft, id.get()).departure_queue_enter = Some(now);
                    debug!(%now, aircraft = %id, "charged, ready for departure");
                    return Ok(Resume::Done);
                }
            }
        }
    }
}
