use thiserror::Error;

/// The error type returned by the [`History`](crate::History).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The limit was set to `0`.
    #[error("limit can not be `0`")]
    InvalidLimit,
    /// `undo` was called with nothing on the undo stack.
    #[error("nothing in the undo stack")]
    EmptyUndo,
    /// `redo` was called with nothing on the redo stack.
    #[error("nothing in the redo stack")]
    EmptyRedo,
    /// `undo` or `redo` was called from inside a replayed operation.
    #[error("an undo or redo is already in progress")]
    Busy,
    /// The replayed operation returned an error.
    #[error("operation failed: {0}")]
    Operation(#[source] Box<dyn std::error::Error>),
}

impl Error {
    /// Returns `true` if the error was caused by an empty stack.
    pub fn is_empty_history(&self) -> bool {
        matches!(self, Error::EmptyUndo | Error::EmptyRedo)
    }
}
