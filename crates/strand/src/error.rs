//! Error types for recoverable sequence operations.

use std::error::Error;
use std::fmt;

/// Errors from positional operations that are allowed to fail.
///
/// Only structural *writes* report through this type. Out-of-range indexed
/// reads are contract violations and abort the process instead; see the
/// crate-level failure policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// A position outside the live range was passed to a structural
    /// operation. For `insert` the valid range is `[0, len]` (inserting at
    /// `len` appends); for everything else it is `[0, len)`.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Live element count at the time of the call.
        len: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for sequence of length {len}")
            }
        }
    }
}

impl Error for SequenceError {}
