//! The departure leg: pad acquisition at departure priority, departure
//! service, and the departure counters.

use tracing::debug;

use vp_core::ProcessId;
use vp_engine::{Acquire, Kernel, Resume};
use vp_metrics::{AgentKind, CounterKind, QueueKind};

use crate::process::{DEPARTURE_PRIORITY, DepartureFlow, DeparturePhase};
use crate::{ModelResult, Process, VertiportSim};

impl VertiportSim {
    pub(crate) fn resume_departure(
        &mut self,
        pid:    ProcessId,
        flow:   &mut DepartureFlow,
        kernel: &mut Kernel<Process>,
    ) -> ModelResult<Resume> {
        let id = flow.aircraft;
        loop {
            let now = kernel.now();
            match flow.phase {
                DeparturePhase::RequestPad => {
                    flow.since = now;
                    flow.phase = DeparturePhase::OnPad;
                    if self.departure_pad_mut().request(pid, DEPARTURE_PRIORITY) == Acquire::Queued {
                        return Ok(Resume::Suspend);
                    }
                }

                DeparturePhase::OnPad => {
                    self.metrics.adjust_queue(QueueKind::AircraftDeparture, now, -1)?;
                    self.passenger_service_len -= self.seats();
                    self.metrics.sample_queue(QueueKind::PassengerService, now, self.passenger_service_len)?;
                    let service = self.draw(self.config.departure_mean_service);
                    let record = self.log.entry(AgentKind::Aircraft, id.get());
                    record.pushback = Some(now);
                    record.tlof_departure_wait = Some(now - flow.since);
                    record.departure_service = Some(service);
                    debug!(%now, aircraft = %id, service, "pushback");
                    flow.phase = DeparturePhase::Departed;
                    kernel.sleep(pid, service);
                    return Ok(Resume::Suspend);
                }

                DeparturePhase::Departed => {
                    self.departure_pad_mut().release(pid, &mut kernel.scheduler)?;
                    let seats = self.seats();
                    let departed = self.metrics.increment(AgentKind::Aircraft, CounterKind::Departure, now, 1)?;
                    self.metrics.increment(AgentKind::Passenger, CounterKind::Departure, now, seats)?;
                    self.log.entry(AgentKind::Aircraft, id.get()).departure = Some(now);
                    debug!(%now, aircraft = %id, departed, "departed");
                    return Ok(Resume::Done);
                }
            }
        }
    }
}
