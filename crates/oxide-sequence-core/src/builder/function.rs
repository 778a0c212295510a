//! `nextval` / `currval` queries.

use crate::value::quote_literal;

/// A sequence function that returns a single `bigint`.
///
/// The sequence name is passed to the function as a string literal, not as
/// an identifier, so it must always go through literal quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFunction {
    /// Advances the sequence and returns the new value.
    NextVal,
    /// Returns the value most recently obtained by `nextval` in the current
    /// session.
    CurrVal,
}

impl SequenceFunction {
    /// Returns the SQL function name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NextVal => "nextval",
            Self::CurrVal => "currval",
        }
    }

    /// Builds `SELECT <function>(<literal>)` from an already quoted literal.
    ///
    /// Use this when the connection supplies its own quoting.
    #[must_use]
    pub fn select_literal(self, quoted_name: &str) -> String {
        format!("SELECT {}({quoted_name})", self.as_str())
    }

    /// Builds `SELECT <function>('<name>')` using standard literal quoting.
    ///
    /// ```rust
    /// use oxide_sequence_core::SequenceFunction;
    ///
    /// assert_eq!(
    ///     SequenceFunction::NextVal.select("numbers"),
    ///     "SELECT nextval('numbers')"
    /// );
    /// ```
    #[must_use]
    pub fn select(self, name: &str) -> String {
        self.select_literal(&quote_literal(name))
    }
}
