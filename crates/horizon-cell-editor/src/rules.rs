//! Ready-made domain rules.
//!
//! # Built-in Rules
//!
//! - [`InRange`]: Inclusive range check for any ordered value
//! - [`non_negative`] / [`positive`]: Sign checks for numeric editors
//! - [`Pattern`]: Full-match regular expression for text editors
//! - [`not_blank`]: Rejects empty or whitespace-only text
//! - [`all_of`]: Both of two rules must hold
//!
//! # Example
//!
//! ```
//! use horizon_cell_editor::rules::{all_of, non_negative, InRange};
//! use horizon_cell_editor::strategy::Rule;
//!
//! let percent = all_of(non_negative::<f64>(), InRange::new(0.0, 100.0));
//! assert!(percent.validate(&42.0));
//! assert!(!percent.validate(&100.5));
//! ```

use crate::strategy::Rule;

/// Accepts values in the inclusive range `[minimum, maximum]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InRange<T> {
    minimum: T,
    maximum: T,
}

impl<T: PartialOrd + Copy> InRange<T> {
    /// Create a range rule. Bounds given in the wrong order are swapped.
    pub fn new(minimum: T, maximum: T) -> Self {
        if maximum < minimum {
            Self {
                minimum: maximum,
                maximum: minimum,
            }
        } else {
            Self { minimum, maximum }
        }
    }

    /// Get the minimum value.
    pub fn minimum(&self) -> T {
        self.minimum
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> T {
        self.maximum
    }
}

impl<T: PartialOrd + Copy + Send + Sync> Rule<T> for InRange<T> {
    fn validate(&self, value: &T) -> bool {
        *value >= self.minimum && *value <= self.maximum
    }
}

/// Accepts zero and above.
pub fn non_negative<T>() -> impl Rule<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    |value: &T| *value >= T::default()
}

/// Accepts values strictly above zero.
pub fn positive<T>() -> impl Rule<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    |value: &T| *value > T::default()
}

/// Accepts any value. Useful for text columns that only need parsing.
pub fn accept_all<T>() -> impl Rule<T> {
    |_: &T| true
}

/// Rejects empty or whitespace-only text.
pub fn not_blank() -> impl Rule<String> {
    |value: &String| !value.trim().is_empty()
}

/// Accepts text that matches a regular expression in full.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: regex::Regex,
    source: String,
}

impl Pattern {
    /// Compile `pattern`. The whole text must match, so anchors are implied.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: regex::Regex::new(&format!("^(?:{pattern})$"))?,
            source: pattern.to_owned(),
        })
    }

    /// The pattern as given to [`Pattern::new`].
    pub fn pattern(&self) -> &str {
        &self.source
    }
}

impl Rule<String> for Pattern {
    fn validate(&self, value: &String) -> bool {
        self.regex.is_match(value)
    }
}

/// Accepts values that satisfy both rules. `second` is skipped when `first` fails.
#[derive(Debug, Clone, Copy)]
pub struct AllOf<A, B> {
    first: A,
    second: B,
}

/// Combine two rules so that both must hold.
pub fn all_of<A, B>(first: A, second: B) -> AllOf<A, B> {
    AllOf { first, second }
}

impl<T, A, B> Rule<T> for AllOf<A, B>
where
    A: Rule<T>,
    B: Rule<T>,
{
    fn validate(&self, value: &T) -> bool {
        self.first.validate(value) && self.second.validate(value)
    }
}
