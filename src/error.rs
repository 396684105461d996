//! Error types for shuffle operations.

use thiserror::Error;

/// Errors that can occur while shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShuffleError {
    /// The selected shuffle style has no implementation yet.
    #[error("the {0} shuffle is not implemented")]
    Unimplemented(&'static str),
    /// Split precision is not a finite ratio in `[0, 1]`.
    #[error("split precision {0} is outside [0, 1]")]
    InvalidSplitPrecision(f64),
}
