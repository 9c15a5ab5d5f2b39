use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("no digit characters in version string: {0:?}")]
    NoDigits(String),

    #[error("digit sequence too large in version string: {0:?}")]
    Overflow(String),
}
