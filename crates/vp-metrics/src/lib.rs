//! `vp-metrics`: what a run measures.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`series`]   | `MetricsSeries`: timestamp → value with collision avoidance |
//! | [`recorder`] | `MetricsRecorder`, `SeriesName`, `AgentKind`, `CounterKind`, `QueueKind` |
//! | [`stats`]    | `time_average`, `time_variance` over the post-warm-up window |
//! | [`log`]      | `EntityLog`, `EntityRecord`: per-aircraft/passenger times  |
//! | [`summary`]  | `SummaryStatistics`: the post-hoc numbers of one run       |
//! | [`error`]    | `MetricsError`, `MetricsResult<T>`                          |
//!
//! # Collision avoidance (summary)
//!
//! Several updates can land on the same simulated instant.  Each series keeps
//! every sample: a write at an occupied time `t` moves to `t + ε`, then
//! `t + 2ε`, … (ε = 0.01 ms in hours) until a free key is found.

pub mod error;
pub mod log;
pub mod recorder;
pub mod series;
pub mod stats;
pub mod summary;


pub use error::{MetricsError, MetricsResult};
pub use log::{EntityKey, EntityLog, EntityRecord};
pub use recorder::{AgentKind, CounterKind, MetricsRecorder, QueueKind, SeriesName};
pub use series::{COLLISION_EPSILON, MAX_COLLISION_RETRIES, MetricsSeries};
pub use stats::{WARM_UP_HOURS, time_average, time_variance};
pub use summary::SummaryStatistics;
