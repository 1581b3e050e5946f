use minimize_core::LengthMismatch;

/// Errors that can occur when evaluating a directional derivative.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("point and direction differ: {0}")]
    LengthMismatch(#[from] LengthMismatch),
}
