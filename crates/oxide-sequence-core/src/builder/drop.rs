//! DROP SEQUENCE statement builder.

use std::fmt;

/// Builds a `DROP SEQUENCE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSequence {
    name: String,
}

impl DropSequence {
    /// Creates a builder for sequence `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
        }
    }

    /// Builds the SQL statement.
    #[must_use]
    pub fn build(&self) -> String {
        format!("DROP SEQUENCE {}", self.name)
    }
}

impl fmt::Display for DropSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
