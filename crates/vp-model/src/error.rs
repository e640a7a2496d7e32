use thiserror::Error;

use vp_core::{CoreError, ProcessId};
use vp_engine::EngineError;
use vp_metrics::MetricsError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("metrics error: {0}")]
    Metrics(#[from] MetricsError),

    /// A pooling process was woken without an aircraft delivered to it.
    #[error("{0} resumed without a delivered aircraft")]
    MissingHandoff(ProcessId),
}

pub type ModelResult<T> = Result<T, ModelError>;
