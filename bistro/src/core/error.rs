//! Session error type

/// Errors that end a session abnormally
///
/// Recoverable domain errors (bad quantity, bad payment method) never
/// reach this type; the flow reports them and carries on.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream reached EOF while a prompt was waiting
    #[error("Input closed")]
    InputClosed,
}

/// Result type for session operations
pub type FlowResult<T> = Result<T, FlowError>;
