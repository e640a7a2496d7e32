//! `vp-model`: the vertiport as a set of cooperating processes.
//!
//! # Processes
//!
//! | Process             | Lifecycle                                                    |
//! |---------------------|--------------------------------------------------------------|
//! | `AircraftArrivals`  | interarrival sleep → admit or reject → … → fire termination  |
//! | `Aircraft`          | buffer → [surface] → landing pad → park/charge → hand-off    |
//! | `PassengerArrivals` | interarrival sleep → queue → form a batch every `seat_capacity` |
//! | `Pooling`           | claim a charged aircraft → release surface → spawn departure |
//! | `Departure`         | departure pad (prio 1) → departure service → counters        |
//!
//! # Resources
//!
//! | Field            | Primitive       | Notes                                        |
//! |------------------|-----------------|----------------------------------------------|
//! | `landing_pad`    | `PriorityMutex` | landings at priority 0; departures at 1 with feedback |
//! | `departure_pad`  | `PriorityMutex` | departures when feedback is off              |
//! | `park`           | `FifoMutex`     | one server charging at `charge / num_park`   |
//! | `terminal`       | `TokenStore`    | bounded (rejects when empty) or unbounded    |
//! | `surface`        | `TokenStore(1)` | blocking mode: held from before landing to batch hand-off |
//! | `ready_aircraft` | `HandoffQueue`  | charged aircraft awaiting a batch            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vp_core::VertiportConfig;
//! use vp_model::simulate;
//!
//! let output = simulate(VertiportConfig::from_rates(10.0, 60.0, 6.0, 1.0))?;
//! println!("{:#?}", output.summary);
//! ```

mod aircraft;
mod departure;
pub mod error;
mod passenger;
pub mod process;
pub mod sim;
pub mod vertiport;


pub use error::{ModelError, ModelResult};
pub use process::{DEPARTURE_PRIORITY, LANDING_PRIORITY, Process};
pub use sim::VertiportSim;
pub use vertiport::{RunOutput, Vertiport, simulate};
