use thiserror::Error;

/// Violation of a domain rule: a setter given an out-of-range value, or an
/// action attempted from a state that does not allow it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot {action} from status {from}")]
    InvalidTransition { from: String, action: &'static str },
}

impl DomainError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
