//! Error types for runeasm

use thiserror::Error;

/// Runeasm error type
#[derive(Debug, Error)]
pub enum RuneasmError {
    /// Register index outside the architectural file
    #[error("Invalid register: {0}")]
    InvalidRegister(u8),

    /// Bit pattern template rejected at parse time
    #[error("Malformed bit pattern: {0}")]
    MalformedPattern(String),

    /// Execution fault surfaced through the host error channel
    #[error("Execution error: {0}")]
    Execution(String),
}

pub type Result<T> = std::result::Result<T, RuneasmError>;
