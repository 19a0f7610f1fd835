use thiserror::Error;

/// Raised by [`Handler::can_handle`](crate::Handler::can_handle) when a
/// handler does not support the shape of the input it was given.
///
/// Callers recover from it locally, usually by trying the next handler in a
/// chain or by falling back to a simpler strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported input: {0}")]
pub struct UnsupportedInputError(pub String);

impl UnsupportedInputError {
    /// Create a new error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}
