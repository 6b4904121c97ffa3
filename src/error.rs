//! Error type shared across the crate.

use thiserror::Error;

/// Errors reported by the public fitting, configuration and interchange routines.
///
/// The numeric core never fails: degenerate geometry is handled by fallbacks.
/// Only structurally invalid arguments end up here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BezierError {
    #[error("tolerance must be a finite positive number, got {0}")]
    InvalidTolerance(f64),

    #[error("invalid fit configuration: {0}")]
    InvalidConfig(String),

    #[error("fit error: {0}")]
    FitError(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type BezierResult<T> = Result<T, BezierError>;
