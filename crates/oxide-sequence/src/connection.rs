//! Connection providers.
//!
//! A [`Connector`] runs one statement at a time. [`PgSession`] is the
//! provided implementation: it pins a single connection, so every statement
//! runs in the same database session.
//!
//! `currval` is session-scoped, which is why [`PgPool`] is not a connector.
//! Two statements on a pool may land on different connections, and `peek`
//! would then fail with `CurrentValueUndefined` or return a value produced
//! by some other session. Check a connection out with
//! [`PgSession::from_pool`] instead; it goes back to the pool when the
//! session is dropped.

use std::future::Future;

use oxide_sequence_core::quote_literal;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnection, PgPool, Postgres};
use sqlx::Connection;
use tokio::sync::Mutex;

/// Runs sequence statements against a database.
pub trait Connector: Send + Sync {
    /// Executes a statement that returns no rows.
    fn execute(&self, sql: &str) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// Runs a query returning a single `bigint` and returns it.
    fn select_scalar(&self, sql: &str) -> impl Future<Output = Result<i64, sqlx::Error>> + Send;

    /// Quotes `value` as a SQL string literal.
    fn quote(&self, value: &str) -> String {
        quote_literal(value)
    }
}

enum SessionConnection {
    Pooled(PoolConnection<Postgres>),
    Owned(PgConnection),
}

impl SessionConnection {
    fn connection_mut(&mut self) -> &mut PgConnection {
        match self {
            Self::Pooled(conn) => &mut **conn,
            Self::Owned(conn) => conn,
        }
    }
}

/// A single database session shared by every statement.
///
/// The connection is locked for the duration of one statement only, so a
/// session can be shared between tasks. Statements from different tasks are
/// serialized.
pub struct PgSession {
    conn: Mutex<SessionConnection>,
}

impl PgSession {
    /// Opens a dedicated connection to `url`.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let conn = PgConnection::connect(url).await?;
        Ok(Self {
            conn: Mutex::new(SessionConnection::Owned(conn)),
        })
    }

    /// Checks a connection out of `pool` for the lifetime of the session.
    ///
    /// The connection returns to the pool when the session is dropped or
    /// closed, whether or not its statements succeeded.
    pub async fn from_pool(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let conn = pool.acquire().await?;
        Ok(Self::from(conn))
    }

    /// Closes the session.
    ///
    /// A pooled connection is returned to its pool instead.
    pub async fn close(self) -> Result<(), sqlx::Error> {
        match self.conn.into_inner() {
            SessionConnection::Pooled(conn) => {
                drop(conn);
                Ok(())
            }
            SessionConnection::Owned(conn) => conn.close().await,
        }
    }
}

impl std::fmt::Debug for PgSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgSession").finish_non_exhaustive()
    }
}

impl From<PoolConnection<Postgres>> for PgSession {
    fn from(conn: PoolConnection<Postgres>) -> Self {
        Self {
            conn: Mutex::new(SessionConnection::Pooled(conn)),
        }
    }
}

impl From<PgConnection> for PgSession {
    fn from(conn: PgConnection) -> Self {
        Self {
            conn: Mutex::new(SessionConnection::Owned(conn)),
        }
    }
}

impl Connector for PgSession {
    async fn execute(&self, sql: &str) -> Result<(), sqlx::Error> {
        let mut guard = self.conn.lock().await;
        sqlx::query(sql).execute(guard.connection_mut()).await?;
        Ok(())
    }

    async fn select_scalar(&self, sql: &str) -> Result<i64, sqlx::Error> {
        let mut guard = self.conn.lock().await;
        sqlx::query_scalar::<_, i64>(sql).fetch_one(guard.connection_mut()).await
    }
}
