//! Error types for sequence operations.

use thiserror::Error;

/// Errors returned by sequence operations.
///
/// The first four variants are translated from specific driver conditions.
/// Everything else is the driver's error, passed through untouched.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// A sequence with this name already exists and could not be created.
    #[error("Sequence '{0}' already exists")]
    AlreadyExist(String),

    /// The sequence does not exist and could not be dropped or accessed.
    #[error("Sequence '{0}' does not exist")]
    NotExist(String),

    /// The current value is undefined because `next` has not been called in
    /// this session.
    #[error("Current value of sequence '{0}' is not yet defined in this session")]
    CurrentValueUndefined(String),

    /// A non-cyclic sequence has reached its bound.
    ///
    /// This is the normal end of a bounded sequence, not a fault.
    #[error("Sequence '{0}' is exhausted")]
    Exhausted(String),

    /// Any other database error.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl SequenceError {
    /// Returns whether this is the end-of-sequence signal.
    #[must_use]
    pub const fn is_end_of_sequence(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    /// Returns the SQLSTATE code of an untranslated database error.
    #[must_use]
    pub fn sqlstate(&self) -> Option<String> {
        match self {
            Self::Database(error) => error
                .as_database_error()
                .and_then(|db| db.code())
                .map(|code| code.into_owned()),
            _ => None,
        }
    }
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
