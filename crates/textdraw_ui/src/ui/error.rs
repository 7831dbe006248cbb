//! UI error types

use super::properties::PropertyError;
use super::reflow::ReflowError;

/// Result type for UI operations
pub type UiResult<T> = Result<T, UiError>;

/// Errors raised by controls
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// The control was already disposed
    #[error("Cannot use {control} after it has been disposed")]
    UseAfterDispose {
        /// Kind of control
        control: &'static str,
    },

    /// An argument could not be used
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Property store failure
    #[error(transparent)]
    Property(#[from] PropertyError),
}

impl From<ReflowError> for UiError {
    fn from(err: ReflowError) -> Self {
        UiError::InvalidArgument(err.to_string())
    }
}
