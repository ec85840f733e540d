use thiserror::Error as ThisError;

///
/// Error
///
/// Public error surface for the workspace. Every failure in this library is
/// one of these variants; nothing is retried or silently defaulted.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum Error {
    /// Extraction was attempted on an empty cell.
    #[error("cannot extract a value from an empty cell")]
    EmptyCell,

    /// A disallowed operation was invoked on a sentinel-bearing value,
    /// e.g. serializing a marker.
    #[error("operation '{operation}' is not valid on this object")]
    InvalidOperation { operation: &'static str },
}

impl Error {
    /// Construct an invalid-operation error naming the disallowed operation.
    #[must_use]
    pub const fn invalid_operation(operation: &'static str) -> Self {
        Self::InvalidOperation { operation }
    }
}

///
/// TESTS
///
