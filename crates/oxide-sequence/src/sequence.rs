//! The sequence handle.

use futures::stream::{self, Stream};
use oxide_sequence_core::{CreateSequence, DropSequence, SequenceFunction, SequenceOptions};
use tracing::debug;

use crate::connection::Connector;
use crate::error::{Result, SequenceError};
use crate::translate::{ErrorMapping, run};

/// A named sequence living in the database.
///
/// A handle is only a name and a borrowed [`Connector`]. It does not cache
/// values and may be built before the sequence exists; operations on a
/// missing sequence fail with [`SequenceError::NotExist`].
///
/// # Example
///
/// ```rust,ignore
/// use oxide_sequence::prelude::*;
///
/// let session = PgSession::connect("postgres://localhost/app").await?;
///
/// let numbers = Sequence::create(&session, "numbers", SequenceOptions::new()).await?;
/// assert_eq!(numbers.next().await?, 1);
/// assert_eq!(numbers.peek().await?, 1);
/// assert_eq!(numbers.next().await?, 2);
///
/// Sequence::drop(&session, "numbers").await?;
/// ```
#[derive(Debug)]
pub struct Sequence<'c, C: Connector> {
    name: String,
    conn: &'c C,
}

impl<C: Connector> Clone for Sequence<'_, C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            conn: self.conn,
        }
    }
}

impl<'c, C: Connector> Sequence<'c, C> {
    /// Creates a handle for sequence `name`. No statement is issued.
    pub fn new(conn: &'c C, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conn,
        }
    }

    /// Creates sequence `name` in the database and returns a handle to it.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::AlreadyExist`] if a relation with this name
    /// already exists, or the driver error for anything else (e.g. a start
    /// value outside the bounds).
    pub async fn create(
        conn: &'c C,
        name: impl Into<String>,
        options: SequenceOptions,
    ) -> Result<Self> {
        let name = name.into();
        let sql = CreateSequence::new(&name).options(options).build();
        debug!(sequence = %name, sql = %sql, "Creating sequence");

        run(&ErrorMapping::CREATE, &name, conn.execute(&sql)).await?;
        Ok(Self::new(conn, name))
    }

    /// Drops sequence `name`.
    ///
    /// Existing handles for `name` are left as they are; their operations
    /// fail with [`SequenceError::NotExist`] from now on.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NotExist`] if there is no such sequence.
    pub async fn drop(conn: &C, name: &str) -> Result<()> {
        let sql = DropSequence::new(name).build();
        debug!(sequence = %name, sql = %sql, "Dropping sequence");

        run(&ErrorMapping::DROP, name, conn.execute(&sql)).await
    }

    /// Drops the sequence this handle names. The handle stays usable.
    ///
    /// # Errors
    ///
    /// See [`Sequence::drop`].
    pub async fn drop_sequence(&self) -> Result<()> {
        Self::drop(self.conn, &self.name).await
    }

    /// Returns the sequence name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the connector this handle runs statements on.
    #[must_use]
    pub const fn connector(&self) -> &'c C {
        self.conn
    }

    /// Advances the sequence and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Exhausted`] once a non-cyclic sequence has
    /// passed its bound, and on every call after that.
    /// Returns [`SequenceError::NotExist`] if there is no such sequence.
    pub async fn next(&self) -> Result<i64> {
        let sql = SequenceFunction::NextVal.select_literal(&self.conn.quote(&self.name));
        debug!(sequence = %self.name, sql = %sql, "Advancing sequence");

        run(&ErrorMapping::NEXT, &self.name, self.conn.select_scalar(&sql)).await
    }

    /// Returns the value most recently produced by [`next`](Self::next) in
    /// this database session. Always queries the database.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::CurrentValueUndefined`] if `next` has not
    /// been called on this session yet.
    /// Returns [`SequenceError::NotExist`] if there is no such sequence.
    pub async fn peek(&self) -> Result<i64> {
        let sql = SequenceFunction::CurrVal.select_literal(&self.conn.quote(&self.name));
        debug!(sequence = %self.name, sql = %sql, "Reading current value");

        run(&ErrorMapping::PEEK, &self.name, self.conn.select_scalar(&sql)).await
    }

    /// Returns a stream of successive [`next`](Self::next) values.
    ///
    /// The stream ends when the sequence is exhausted. Any other error is
    /// yielded once and then ends the stream. A cyclic sequence never ends.
    pub fn values(&self) -> impl Stream<Item = Result<i64>> + '_ {
        stream::unfold(false, move |done| async move {
            if done {
                return None;
            }
            match self.next().await {
                Ok(value) => Some((Ok(value), false)),
                Err(SequenceError::Exhausted(_)) => None,
                Err(error) => Some((Err(error), true)),
            }
        })
    }
}
