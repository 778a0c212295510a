//! Driver error translation.
//!
//! sqlx reports every failed statement as `sqlx::Error::Database`, carrying
//! the server's SQLSTATE code. The same code means different things
//! depending on the statement: `55000` (object not in prerequisite state)
//! from `nextval` means the sequence is exhausted, while from `currval` it
//! means no value has been produced yet in this session. Each operation
//! therefore has its own [`ErrorMapping`].

use std::future::Future;

use tracing::debug;

use crate::error::{Result, SequenceError};

/// PostgreSQL SQLSTATE codes raised by sequence statements.
pub mod sqlstate {
    /// `undefined_table`: the named relation does not exist.
    pub const UNDEFINED_TABLE: &str = "42P01";
    /// `duplicate_table`: a relation with this name already exists.
    pub const DUPLICATE_TABLE: &str = "42P07";
    /// `object_not_in_prerequisite_state`.
    pub const OBJECT_NOT_IN_PREREQUISITE_STATE: &str = "55000";
    /// `sequence_generator_limit_exceeded`.
    pub const SEQUENCE_GENERATOR_LIMIT_EXCEEDED: &str = "2200H";
}

/// Domain error kind a driver condition is translated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`SequenceError::AlreadyExist`].
    AlreadyExist,
    /// See [`SequenceError::NotExist`].
    NotExist,
    /// See [`SequenceError::CurrentValueUndefined`].
    CurrentValueUndefined,
    /// See [`SequenceError::Exhausted`].
    Exhausted,
}

impl ErrorKind {
    /// Builds the error for sequence `name`.
    #[must_use]
    pub fn into_error(self, name: &str) -> SequenceError {
        let name = name.to_string();
        match self {
            Self::AlreadyExist => SequenceError::AlreadyExist(name),
            Self::NotExist => SequenceError::NotExist(name),
            Self::CurrentValueUndefined => SequenceError::CurrentValueUndefined(name),
            Self::Exhausted => SequenceError::Exhausted(name),
        }
    }
}

/// Fixed table from SQLSTATE code to [`ErrorKind`] for one operation.
#[derive(Debug, Clone, Copy)]
pub struct ErrorMapping {
    operation: &'static str,
    entries: &'static [(&'static str, ErrorKind)],
}

impl ErrorMapping {
    /// `CREATE SEQUENCE`.
    pub const CREATE: Self = Self {
        operation: "create",
        entries: &[(sqlstate::DUPLICATE_TABLE, ErrorKind::AlreadyExist)],
    };

    /// `DROP SEQUENCE`.
    pub const DROP: Self = Self {
        operation: "drop",
        entries: &[(sqlstate::UNDEFINED_TABLE, ErrorKind::NotExist)],
    };

    /// `nextval`. A bound hit and any state inconsistency reported while
    /// advancing both end the sequence.
    pub const NEXT: Self = Self {
        operation: "next",
        entries: &[
            (
                sqlstate::OBJECT_NOT_IN_PREREQUISITE_STATE,
                ErrorKind::Exhausted,
            ),
            (
                sqlstate::SEQUENCE_GENERATOR_LIMIT_EXCEEDED,
                ErrorKind::Exhausted,
            ),
            (sqlstate::UNDEFINED_TABLE, ErrorKind::NotExist),
        ],
    };

    /// `currval`.
    pub const PEEK: Self = Self {
        operation: "peek",
        entries: &[
            (
                sqlstate::OBJECT_NOT_IN_PREREQUISITE_STATE,
                ErrorKind::CurrentValueUndefined,
            ),
            (sqlstate::UNDEFINED_TABLE, ErrorKind::NotExist),
        ],
    };

    /// Returns the operation this table applies to.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Looks up the kind for a SQLSTATE code.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<ErrorKind> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == code)
            .map(|(_, kind)| *kind)
    }

    /// Translates a driver error raised while operating on sequence `name`.
    ///
    /// Errors whose code is not in the table are returned unchanged.
    #[must_use]
    pub fn translate(&self, name: &str, error: sqlx::Error) -> SequenceError {
        let kind = error
            .as_database_error()
            .and_then(|db| db.code())
            .and_then(|code| self.lookup(&code));

        match kind {
            Some(kind) => {
                debug!(
                    sequence = %name,
                    operation = self.operation,
                    kind = ?kind,
                    "Translated database error"
                );
                kind.into_error(name)
            }
            None => SequenceError::Database(error),
        }
    }
}

/// Awaits `operation`, translating its error through `mapping`.
pub async fn run<T, F>(mapping: &ErrorMapping, name: &str, operation: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, sqlx::Error>>,
{
    operation
        .await
        .map_err(|error| mapping.translate(name, error))
}
