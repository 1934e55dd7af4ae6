//! Base error type.
//!
//! Sub-crates define their own error enums and convert this one into theirs
//! via `From` where a construction step can fail on bad parameters.

use thiserror::Error;

/// The top-level error type for `sg-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SgError {
    /// A construction parameter was outside its permitted range.
    #[error("invalid parameter `{name}` = {value}: expected {expected}")]
    InvalidParameter {
        name:     &'static str,
        value:    String,
        expected: &'static str,
    },
}

impl SgError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, expected: &'static str) -> Self {
        SgError::InvalidParameter { name, value: value.to_string(), expected }
    }
}

/// Shorthand result type for `sg-core`.
pub type SgResult<T> = Result<T, SgError>;
