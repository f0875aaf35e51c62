use thiserror::Error;

/// Top-level error type for the shell border engine.
///
/// The geometry pipeline itself never fails; only configuration of the
/// rendering model can be rejected.
#[derive(Debug, Error)]
pub enum BorderError {
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Errors related to drawing style and colour configuration.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid colour: {0}")]
    InvalidColor(String),

    #[error("invalid style parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`BorderError`].
pub type Result<T> = std::result::Result<T, BorderError>;
