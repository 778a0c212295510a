//! SQL literal rendering.
//!
//! Sequence statements cannot be fully parameterized: DDL takes no bind
//! parameters, and `nextval`/`currval` receive the sequence name as a string
//! literal. Values are therefore rendered inline, with text escaped.

/// A value rendered inline into a sequence statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(String),
}

impl SqlValue {
    /// Returns the SQL representation for inline use (escaped).
    #[must_use]
    pub fn to_sql_inline(&self) -> String {
        match self {
            Self::Int(n) => format!("{n}"),
            Self::Text(s) => {
                // Escape single quotes by doubling them
                let escaped = s.replace('\'', "''");
                format!("'{escaped}'")
            }
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Quotes `value` as a standard SQL string literal.
///
/// ```rust
/// use oxide_sequence_core::value::quote_literal;
///
/// assert_eq!(quote_literal("order_numbers"), "'order_numbers'");
/// assert_eq!(quote_literal("it's"), "'it''s'");
/// ```
#[must_use]
pub fn quote_literal(value: &str) -> String {
    SqlValue::from(value).to_sql_inline()
}
