use thiserror::Error;

/// Raw move parameters outside the 54 valid quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid axis {0:?}, expected one of X, Y, Z")]
    InvalidAxis(char),
    #[error("invalid layer {0}, expected -1, 0 or 1")]
    InvalidLayer(i32),
    #[error("invalid direction {0}, expected 1 or -1")]
    InvalidDirection(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A solve replay owns the session until it finishes.
    #[error("input is locked while a solve is replaying")]
    InputLocked,
    #[error("session lock was poisoned by a panicked thread")]
    Poisoned,
}
