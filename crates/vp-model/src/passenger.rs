//! Passenger arrivals and batch pooling.
//!
//! Passengers queue in arrival order.  Every time `seat_capacity` of them
//! are waiting, the oldest `seat_capacity` leave the queue as one batch and a
//! pooling process claims the next charged aircraft for them.

use tracing::debug;

use vp_core::{PassengerId, ProcessId, SimTime};
use vp_engine::{Kernel, Resume};
use vp_metrics::{AgentKind, CounterKind, QueueKind};

use crate::process::{DepartureFlow, PoolingFlow, PoolingPhase};
use crate::{ModelError, ModelResult, Process, VertiportSim};

impl VertiportSim {
    /// The passenger arrival loop.  Ends silently when its id supply runs
    /// out; the run itself keeps going until the aircraft supply does.
    pub(crate) fn resume_passenger_arrivals(
        &mut self,
        pid:    ProcessId,
        armed:  &mut bool,
        kernel: &mut Kernel<Process>,
    ) -> ModelResult<Resume> {
        if *armed {
            let now = kernel.now();
            let Some(id) = self.passenger_ids.next_id() else {
                debug!(%now, "passenger supply exhausted");
                return Ok(Resume::Done);
            };
            self.passenger_arrives(id, now, kernel)?;
        }
        *armed = true;
        let delay = self.draw(self.config.passenger_mean_interarrival);
        kernel.sleep(pid, delay);
        Ok(Resume::Suspend)
    }

    fn passenger_arrives(
        &mut self,
        id:     PassengerId,
        now:    SimTime,
        kernel: &mut Kernel<Process>,
    ) -> ModelResult<()> {
        self.log.entry(AgentKind::Passenger, id.get()).arrival = Some(now);
        self.metrics.increment(AgentKind::Passenger, CounterKind::Arrival, now, 1)?;
        self.passenger_service_len += 1;
        self.metrics.sample_queue(QueueKind::PassengerService, now, self.passenger_service_len)?;
        self.waiting_passengers.push_back(id);
        debug!(%now, passenger = %id, in_service = self.passenger_service_len, "passenger arrived");

        let seats = self.config.seat_capacity as usize;
        if self.waiting_passengers.len() >= seats {
            // The batch stays counted in the service queue until its aircraft
            // takes the departure pad.
            self.metrics.sample_queue(QueueKind::PassengerService, now, self.passenger_service_len)?;
            let batch: Vec<PassengerId> = self.waiting_passengers.drain(..seats).collect();
            debug!(%now, size = batch.len(), "passenger batch formed");
            kernel.spawn(Process::Pooling(PoolingFlow::new(batch)));
        }
        Ok(())
    }

    /// Claim a charged aircraft for a batch, end its surface reservation and
    /// start its departure.
    pub(crate) fn resume_pooling(
        &mut self,
        pid:    ProcessId,
        flow:   &mut PoolingFlow,
        kernel: &mut Kernel<Process>,
    ) -> ModelResult<Resume> {
        let aircraft = match flow.phase {
            PoolingPhase::Claim => match self.ready_aircraft.get(pid) {
                Some(aircraft) => aircraft,
                None => {
                    flow.phase = PoolingPhase::AwaitingAircraft;
                    return Ok(Resume::Suspend);
                }
            },
            PoolingPhase::AwaitingAircraft => self
                .ready_aircraft
                .take_delivered(pid)
                .ok_or(ModelError::MissingHandoff(pid))?,
        };

        let now = kernel.now();
        self.log.entry(AgentKind::Aircraft, aircraft.get()).departure_queue_exit = Some(now);
        let departing = self.metrics.adjust_queue(QueueKind::AircraftDeparture, now, 1)?;
        for passenger in &flow.batch {
            let record = self.log.entry(AgentKind::Passenger, passenger.get());
            record.departure_queue_exit = Some(now);
            record.passenger_wait = record.arrival.map(|arrived| now - arrived);
        }

        if self.config.blocking {
            self.surface.put(&mut kernel.scheduler)?;
        }
        let on_surface = self.metrics.adjust_queue(QueueKind::SurfaceOccupancy, now, -1)?;
        debug!(%now, aircraft = %aircraft, passengers = flow.batch.len(), departing, on_surface, "batch assigned");

        kernel.spawn(Process::Departure(DepartureFlow::new(aircraft, now)));
        Ok(Resume::Done)
    }
}
