use thiserror::Error;

use vp_core::{ProcessId, SimTime};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("event queue drained at {now} before the termination signal fired")]
    Stalled { now: SimTime },

    #[error("{resource}: token returned while none is outstanding")]
    StoreOverflow { resource: &'static str },

    #[error("{resource}: released by {pid}, which does not hold it")]
    NotHolder {
        resource: &'static str,
        pid:      ProcessId,
    },

    #[error("{0} was woken but is not registered with the engine")]
    UnknownProcess(ProcessId),
}

pub type EngineResult<T> = Result<T, EngineError>;
