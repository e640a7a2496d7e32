//! `vp-engine`: single-threaded discrete-event kernel.
//!
//! # Execution model
//!
//! ```text
//! loop:
//!   ① stop if the termination signal has fired
//!   ② pop the earliest wake-up (due time, then scheduling order)
//!   ③ advance the clock to its due time
//!   ④ resume exactly that process via Model::resume
//!        → it runs until its next suspension point:
//!          sleep, mutex request, store get, hand-off get
//!   ⑤ register any processes it spawned
//! ```
//!
//! Processes are plain state machines owned by the engine.  A process
//! waiting on a resource is an entry in that resource's waiter list; when the
//! resource is granted to it, the resource schedules a wake-up at the current
//! time, and the process picks up from its recorded phase.
//!
//! # Crate layout
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`scheduler`] | `Scheduler`, `Wakeup`                             |
//! | [`kernel`]    | `Kernel`, `Model`, `Engine`, `Resume`, `RunSummary` |
//! | [`mutex`]     | `PriorityMutex`, `FifoMutex`, `Acquire`           |
//! | [`store`]     | `TokenStore`, `HandoffQueue`                      |
//! | [`signal`]    | `TerminationSignal`                               |
//! | [`observer`]  | `EngineObserver`, `NoopObserver`                  |
//! | [`error`]     | `EngineError`, `EngineResult`                     |

pub mod error;
pub mod kernel;
pub mod mutex;
pub mod observer;
pub mod scheduler;
pub mod signal;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{EngineError, EngineResult};
pub use kernel::{Engine, Kernel, Model, Resume, RunSummary};
pub use mutex::{Acquire, FifoMutex, PriorityMutex};
pub use observer::{EngineObserver, NoopObserver};
pub use scheduler::{Scheduler, Wakeup};
pub use signal::TerminationSignal;
pub use store::{HandoffQueue, TokenStore};
