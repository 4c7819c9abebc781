//! Error types for screw.

use thiserror::Error;

/// Errors raised by the few fallible dual-quaternion operations.
///
/// Everything else is total: dividing by a zero-length quantity in
/// `normalize`/`inverse` yields non-finite components rather than an error.
#[derive(Error, Debug)]
pub enum DualQuatError {
    /// A flat component list did not hold exactly eight scalars.
    #[error("dual quaternion needs exactly {expected} components, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Component index outside `0..8`.
    #[error("dual quaternion component index {0} out of range 0..8")]
    IndexOutOfRange(usize),

    /// Chained composition was handed no transformations.
    #[error("cannot compose an empty chain of transformations")]
    EmptyChain,

    /// Reading or writing the binary layout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for screw operations.
pub type Result<T> = std::result::Result<T, DualQuatError>;
