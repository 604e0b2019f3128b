//! Error types for Plus.
//!
//! This module provides a structured error type using `thiserror`:
//!
//! - [`FilterError`] - Errors raised by the filter registry and renderer
//! - [`BoxError`] - The error type filter callbacks fail with

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while registering, applying or rendering filters.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A hook name was empty.
    #[error("invalid argument: hook name must not be empty")]
    InvalidName,

    /// An argument other than a hook name was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Rendering was attempted with no bindings registered at all.
    #[error("there are no filters to render")]
    NoFilters,

    /// A binding was invoked with a value of a type it does not accept.
    #[error("filter `{name}` expects `{expected}` but was applied to `{found}`")]
    TypeMismatch {
        /// The hook name being applied.
        name: String,
        /// The value type the binding was registered for.
        expected: &'static str,
        /// The value type that was passed in.
        found: &'static str,
    },

    /// A filter callback failed. The callback's error is passed through as-is.
    #[error(transparent)]
    Callback(BoxError),
}

impl FilterError {
    /// Returns `true` if this is an argument error raised before any callback ran.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidName | Self::InvalidArgument(_))
    }
}

impl From<BoxError> for FilterError {
    fn from(err: BoxError) -> Self {
        FilterError::Callback(err)
    }
}

/// Validates a hook name, rejecting the empty string.
pub fn check_name(name: &str) -> Result<&str, FilterError> {
    if name.is_empty() {
        Err(FilterError::InvalidName)
    } else {
        Ok(name)
    }
}
