//! Typed client for PostgreSQL sequences.
//!
//! `oxide-sequence` wraps the database's own `SEQUENCE` object. It never
//! counts anything itself: every value comes from `nextval`, and atomicity
//! across concurrent callers is the database's guarantee.
//!
//! # Architecture
//!
//! - **Statements** - built by `oxide-sequence-core`
//! - **Connector** - runs one statement on a pinned database session
//! - **Translation** - maps SQLSTATE codes to [`SequenceError`] kinds, per
//!   operation
//! - **Sequence** - the handle exposing `create`, `drop`, `next`, `peek`
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use oxide_sequence::prelude::*;
//!
//! let session = PoolConfig::from_env()?.connect_session().await?;
//!
//! let slots = Sequence::create(&session, "slots", SequenceOptions::new().max(3)).await?;
//! let all: Vec<i64> = slots.values().try_collect().await?;
//! assert_eq!(all, vec![1, 2, 3]);
//!
//! match slots.next().await {
//!     Err(SequenceError::Exhausted(_)) => {}
//!     other => panic!("expected end of sequence, got {other:?}"),
//! }
//!
//! slots.drop_sequence().await?;
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod sequence;
pub mod translate;

pub use error::{Result, SequenceError};
pub use sequence::Sequence;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{ConfigError, PoolConfig};
    pub use crate::connection::{Connector, PgSession};
    pub use crate::error::{Result, SequenceError};
    pub use crate::sequence::Sequence;
    pub use oxide_sequence_core::{
        CreateSequence, DropSequence, SequenceFunction, SequenceOptions,
    };
}
