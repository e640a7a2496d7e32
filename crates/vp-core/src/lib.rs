//! `vp-core`: foundational types for the vertiport simulator.
//!
//! This crate is a dependency of every other `vp-*` crate.  It has no `vp-*`
//! dependencies and only small external ones (`rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AircraftId`, `PassengerId`, `ProcessId`                  |
//! | [`time`]    | `SimTime` (hours since simulation start)                  |
//! | [`rng`]     | `SimRng` (seeded, exponential service/interarrival draws) |
//! | [`config`]  | `VertiportConfig`, `BufferCapacity`                       |
//! | [`supply`]  | `IdSupply`: pre-generated identifier supply              |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and id types.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod supply;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BufferCapacity, VertiportConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{AircraftId, PassengerId, ProcessId};
pub use rng::SimRng;
pub use supply::IdSupply;
pub use time::SimTime;
