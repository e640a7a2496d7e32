use thiserror::Error;

use vp_core::SimTime;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// A series was looked up by a name outside the closed set.  This is a
    /// programming error, not a data condition.
    #[error("unknown metrics series {0:?}")]
    UnknownSeries(String),

    #[error("no free timestamp near {at} after {attempts} collision retries")]
    CollisionRetriesExhausted { at: SimTime, attempts: u32 },
}

pub type MetricsResult<T> = Result<T, MetricsError>;
