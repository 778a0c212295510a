//! CREATE SEQUENCE statement builder.

use std::fmt;

use crate::options::SequenceOptions;
use crate::value::SqlValue;

/// Builds a `CREATE SEQUENCE` statement.
///
/// Clauses are emitted in a fixed order: `INCREMENT BY`, `MINVALUE`,
/// `MAXVALUE`, `START`, followed by exactly one of `CYCLE` / `NO CYCLE`.
/// Unset options produce no clause at all.
///
/// The name is written as given. It is an identifier supplied by the
/// caller, not a user value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSequence {
    name: String,
    options: SequenceOptions,
}

impl CreateSequence {
    /// Creates a builder for sequence `name` with default options.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            options: SequenceOptions::new(),
        }
    }

    /// Replaces the creation options.
    #[must_use]
    pub fn options(mut self, options: SequenceOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the sequence name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds the SQL statement.
    #[must_use]
    pub fn build(&self) -> String {
        let mut parts = vec![format!("CREATE SEQUENCE {}", self.name)];

        let numeric = [
            ("INCREMENT BY", self.options.increment),
            ("MINVALUE", self.options.min),
            ("MAXVALUE", self.options.max),
            ("START", self.options.start),
        ];
        for (keyword, value) in numeric {
            if let Some(n) = value {
                parts.push(format!("{keyword} {}", SqlValue::Int(n).to_sql_inline()));
            }
        }

        parts.push(String::from(if self.options.cycle {
            "CYCLE"
        } else {
            "NO CYCLE"
        }));

        parts.join(" ")
    }
}

impl fmt::Display for CreateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
