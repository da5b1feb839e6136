use thiserror::Error;

/// Malformed action reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty action reference")]
    Empty,

    #[error("Invalid action format: {0}")]
    InvalidFormat(String),

    #[error("Local workflow reference not supported: {0}")]
    LocalReference(String),
}
