use thiserror::Error;

/// A result type for HOO algorithms
pub type Result<T> = std::result::Result<T, HooError>;

/// An error for hierarchical optimistic optimization algorithms
#[derive(Error, Debug)]
pub enum HooError {
    /// When configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfigError(String),
    /// When pull and receive_reward calls do not alternate
    #[error("Protocol error: {0}")]
    ProtocolError(String),
    /// When an invalid value is encountered
    #[error("Value error: {0}")]
    InvalidValueError(String),
}
