use thiserror::Error;

/// Errors raised while parsing or validating a version
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid character in identifier: '{0}'")]
    InvalidCharacter(String),

    #[error("Leading zero in numeric component: '{0}'")]
    LeadingZero(String),

    #[error("Numeric component exceeds u64: '{0}'")]
    NumericOverflow(String),

    #[error("Malformed version: '{0}'")]
    MalformedVersion(String),
}

pub type Result<T> = std::result::Result<T, Error>;
