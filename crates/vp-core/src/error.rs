//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `From`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} must be a positive, finite number of hours (got {value})")]
    InvalidDuration { what: &'static str, value: f64 },
}

/// Shorthand result type for `vp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
