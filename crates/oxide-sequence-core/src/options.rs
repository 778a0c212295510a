//! Options for creating a sequence.

/// How a new sequence should be created.
///
/// Every numeric option is optional. Unset options are left out of the
/// generated `CREATE SEQUENCE` statement so the database applies its own
/// defaults (start at 1, step 1, bounds of the `bigint` range).
///
/// # Example
///
/// ```rust
/// use oxide_sequence_core::SequenceOptions;
///
/// let options = SequenceOptions::new().start(42).increment(3).cycle(true);
/// assert_eq!(options.start, Some(42));
/// assert_eq!(options.increment, Some(3));
/// assert_eq!(options.min, None);
/// assert!(options.cycle);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequenceOptions {
    /// First value returned by `nextval`.
    pub start: Option<i64>,
    /// Value added to the current value on each advance.
    ///
    /// A positive value makes an ascending sequence, a negative one a
    /// descending sequence.
    pub increment: Option<i64>,
    /// Minimum value the sequence can generate.
    pub min: Option<i64>,
    /// Maximum value the sequence can generate.
    pub max: Option<i64>,
    /// Whether to wrap around once the bound is reached.
    pub cycle: bool,
}

impl SequenceOptions {
    /// Creates options with nothing set and `cycle` disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            increment: None,
            min: None,
            max: None,
            cycle: false,
        }
    }

    /// Sets the start value.
    #[must_use]
    pub const fn start(mut self, value: i64) -> Self {
        self.start = Some(value);
        self
    }

    /// Sets the increment.
    #[must_use]
    pub const fn increment(mut self, value: i64) -> Self {
        self.increment = Some(value);
        self
    }

    /// Sets the minimum value.
    #[must_use]
    pub const fn min(mut self, value: i64) -> Self {
        self.min = Some(value);
        self
    }

    /// Sets the maximum value.
    #[must_use]
    pub const fn max(mut self, value: i64) -> Self {
        self.max = Some(value);
        self
    }

    /// Enables or disables wraparound.
    #[must_use]
    pub const fn cycle(mut self, enabled: bool) -> Self {
        self.cycle = enabled;
        self
    }
}
