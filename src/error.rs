//! Error types for slotmask.

use std::fmt;

/// Result type alias for slotmask operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for slotmask operations.
///
/// Only structural misuse surfaces here. Editing a mask never fails; edits
/// that cannot be applied leave the caret where it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A template parser was given an empty raw template.
    EmptyTemplate,
    /// A mask descriptor carries neither slots nor a raw template.
    MalformedDescriptor,
    /// Index outside the range accepted by a direct index query.
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTemplate => write!(f, "raw mask template is empty"),
            Self::MalformedDescriptor => write!(
                f,
                "mask descriptor is malformed: it needs slots or a raw template"
            ),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for mask of size {len}")
            }
        }
    }
}

impl std::error::Error for Error {}
