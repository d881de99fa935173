//! Common error type.

use core::fmt::{self, Display};

/// Common error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The stack contains no element to pop or peek at.
    Empty,
    /// A stack was constructed with an initial capacity of zero.
    InvalidArgument,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "stack is empty"),
            Self::InvalidArgument => write!(f, "initial capacity must be positive"),
        }
    }
}
