//! # oxide-sequence-core
//!
//! SQL statement construction for database-native sequences.
//!
//! This crate provides:
//! - [`SequenceOptions`], the settings a new sequence is created with
//! - Builders for `CREATE SEQUENCE` and `DROP SEQUENCE`
//! - `SELECT nextval(..)` / `SELECT currval(..)` queries with the sequence
//!   name quoted as a string literal
//!
//! It performs no I/O. Executing the statements and interpreting driver
//! errors is the job of `oxide-sequence`.
//!
//! ## How PostgreSQL sequences behave
//!
//! - **Defaults**: an ascending sequence starts at 1 and is bounded by
//!   `2^63 - 1`; a descending one starts at -1 and is bounded by `-2^63`.
//!   Unset options are never written, so these defaults always apply.
//! - **[`CYCLE`]**: when the bound is reached a cyclic sequence wraps to its
//!   minimum (ascending) or maximum (descending); otherwise `nextval` fails.
//! - **[`currval`]** is session-scoped: it returns the value most recently
//!   produced by `nextval` on the same connection.
//!
//! [`CYCLE`]: https://www.postgresql.org/docs/current/sql-createsequence.html
//! [`currval`]: https://www.postgresql.org/docs/current/functions-sequence.html
//!
//! ## Example
//!
//! ```rust
//! use oxide_sequence_core::{CreateSequence, SequenceFunction, SequenceOptions};
//!
//! let sql = CreateSequence::new("numbers")
//!     .options(SequenceOptions::new().max(2).cycle(true))
//!     .build();
//! assert_eq!(sql, "CREATE SEQUENCE numbers MAXVALUE 2 CYCLE");
//!
//! let next = SequenceFunction::NextVal.select("numbers");
//! assert_eq!(next, "SELECT nextval('numbers')");
//! ```

pub mod builder;
pub mod options;
pub mod value;

pub use builder::{CreateSequence, DropSequence, SequenceFunction};
pub use options::SequenceOptions;
pub use value::{SqlValue, quote_literal};
