//! Sequence statement builders.
//!
//! # Example
//!
//! ```rust
//! use oxide_sequence_core::builder::{CreateSequence, DropSequence, SequenceFunction};
//! use oxide_sequence_core::SequenceOptions;
//!
//! let create = CreateSequence::new("invoice_numbers")
//!     .options(SequenceOptions::new().start(1000).max(9999))
//!     .build();
//! assert_eq!(
//!     create,
//!     "CREATE SEQUENCE invoice_numbers MAXVALUE 9999 START 1000 NO CYCLE"
//! );
//!
//! assert_eq!(
//!     DropSequence::new("invoice_numbers").build(),
//!     "DROP SEQUENCE invoice_numbers"
//! );
//! assert_eq!(
//!     SequenceFunction::CurrVal.select("invoice_numbers"),
//!     "SELECT currval('invoice_numbers')"
//! );
//! ```

mod create;
mod drop;
mod function;

pub use create::CreateSequence;
pub use drop::DropSequence;
pub use function::SequenceFunction;
