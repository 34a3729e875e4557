use thiserror::Error;

/// Error taxonomy surfaced to the HTTP layer. Each variant maps to a
/// distinct response status; messages are shown to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}
