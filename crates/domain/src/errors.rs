use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(String),

    #[error("Invalid argument count: {0}")]
    InvalidArgumentCount(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors caused by how the tool was invoked rather than by the
    /// identifier itself; reported together with usage text.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidArgumentCount(_) | DomainError::UnknownMode(_)
        )
    }
}
