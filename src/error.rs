//! Error types.
//!
//! Editing itself never fails: out-of-range input is clamped and no-op edits
//! return their input. Errors only come from parsing user-supplied
//! configuration such as key notation.

use std::fmt;

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for fallible operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Key notation that does not describe a key, e.g. `"hyper+q"`.
    InvalidKey { notation: String, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { notation, reason } => {
                write!(f, "invalid key notation {notation:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}
