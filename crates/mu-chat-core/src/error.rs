use thiserror::Error;

/// Failures talking to a chat session task.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("chat session is closed")]
    Closed,
}
