//! Error conversion helpers for player interaction
//!
//! Provides an extension trait for cleaner error handling with context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to an I/O error. End of input becomes
    /// [`ApplicationError::InputClosed`].
    ///
    /// # Example
    /// ```ignore
    /// io.ask_text("Which animal?")
    ///     .with_context("read animal name")?;
    /// ```
    fn with_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => ApplicationError::InputClosed,
            _ => ApplicationError::OperationFailed {
                context: action.to_string(),
                source: Box::new(e),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_eof_when_adding_context_then_input_closed() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert!(matches!(
            result.with_context("read answer"),
            Err(ApplicationError::InputClosed)
        ));
    }

    #[test]
    fn given_other_io_error_when_adding_context_then_operation_failed() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        let err = result.with_context("show prompt").unwrap_err();
        assert_eq!(err.to_string(), "operation failed: show prompt");
    }
}
