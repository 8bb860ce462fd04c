//! Parse and validate strategies.
//!
//! An editor is configured with two capabilities instead of being subclassed
//! per type and rule:
//!
//! - a [`Parser<T>`] that turns raw cell text into a `T`, and
//! - a [`Rule<T>`] that decides whether a parsed `T` is acceptable.
//!
//! Both traits are implemented for closures, so ad-hoc strategies need no
//! new types:
//!
//! ```
//! use horizon_cell_editor::strategy::{EditStrategy, IntegerParser, Parser, Rule};
//!
//! let even = |n: &i64| n % 2 == 0;
//! assert!(even.validate(&4));
//!
//! let strategy = EditStrategy::new(IntegerParser, even);
//! assert_eq!(strategy.parse("6"), Ok(6));
//! assert!(!strategy.validate(&5));
//! ```

use std::fmt;
use std::num::IntErrorKind;
use std::sync::Arc;

use crate::error::ParseError;

/// Converts raw cell text into a typed value.
///
/// Parsers must be synchronous and free of side effects.
pub trait Parser<T>: Send + Sync {
    /// Parse `raw`, or explain why it cannot be converted.
    fn parse(&self, raw: &str) -> Result<T, ParseError>;
}

impl<T, F> Parser<T> for F
where
    F: Fn(&str) -> Result<T, ParseError> + Send + Sync,
{
    fn parse(&self, raw: &str) -> Result<T, ParseError> {
        self(raw)
    }
}

/// Domain acceptance rule for an already-parsed value.
///
/// Rules must be synchronous and free of side effects.
pub trait Rule<T>: Send + Sync {
    /// Returns `true` if `value` may be committed.
    fn validate(&self, value: &T) -> bool;
}

impl<T, F> Rule<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn validate(&self, value: &T) -> bool {
        self(value)
    }
}

/// Parses real numbers into `f64`.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected, as
/// are magnitudes too large to represent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleParser;

impl DoubleParser {
    const EXPECTED: &'static str = "real number";

    fn names_non_finite(text: &str) -> bool {
        let unsigned = text.trim_start_matches(['+', '-']);
        ["nan", "inf", "infinity"]
            .iter()
            .any(|name| unsigned.eq_ignore_ascii_case(name))
    }
}

impl Parser<f64> for DoubleParser {
    fn parse(&self, raw: &str) -> Result<f64, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }
        if Self::names_non_finite(trimmed) {
            return Err(ParseError::NotFinite {
                text: trimmed.to_owned(),
            });
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| ParseError::invalid(trimmed, Self::EXPECTED))?;
        if value.is_infinite() {
            return Err(ParseError::out_of_range(trimmed, Self::EXPECTED));
        }
        Ok(value)
    }
}

/// Parses whole numbers into `i64`.
///
/// Surrounding whitespace is ignored. Fractions, exponents and digit
/// separators are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerParser;

impl IntegerParser {
    const EXPECTED: &'static str = "whole number";
}

impl Parser<i64> for IntegerParser {
    fn parse(&self, raw: &str) -> Result<i64, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        trimmed.parse::<i64>().map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ParseError::out_of_range(trimmed, Self::EXPECTED)
            }
            _ => ParseError::invalid(trimmed, Self::EXPECTED),
        })
    }
}

/// Accepts text as-is, including surrounding whitespace and the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextParser;

impl Parser<String> for TextParser {
    fn parse(&self, raw: &str) -> Result<String, ParseError> {
        Ok(raw.to_owned())
    }
}

/// A parser and a rule, composed.
pub struct EditStrategy<T> {
    parser: Arc<dyn Parser<T>>,
    rule: Arc<dyn Rule<T>>,
}

impl<T> Clone for EditStrategy<T> {
    fn clone(&self) -> Self {
        Self {
            parser: Arc::clone(&self.parser),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T> EditStrategy<T> {
    /// Compose `parser` and `rule`.
    pub fn new<P, R>(parser: P, rule: R) -> Self
    where
        P: Parser<T> + 'static,
        R: Rule<T> + 'static,
    {
        Self::from_parts(Arc::new(parser), Arc::new(rule))
    }

    /// Compose already-shared strategy halves.
    pub fn from_parts(parser: Arc<dyn Parser<T>>, rule: Arc<dyn Rule<T>>) -> Self {
        Self { parser, rule }
    }

    /// Split into the shared parser and rule.
    pub fn into_parts(self) -> (Arc<dyn Parser<T>>, Arc<dyn Rule<T>>) {
        (self.parser, self.rule)
    }

    /// Run the parse step.
    pub fn parse(&self, raw: &str) -> Result<T, ParseError> {
        self.parser.parse(raw)
    }

    /// Run the domain rule.
    pub fn validate(&self, value: &T) -> bool {
        self.rule.validate(value)
    }
}

impl<T> fmt::Debug for EditStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditStrategy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_parser_accepts() {
        assert_eq!(DoubleParser.parse("3.5"), Ok(3.5));
        assert_eq!(DoubleParser.parse("-3.5"), Ok(-3.5));
        assert_eq!(DoubleParser.parse("  42 "), Ok(42.0));
        assert_eq!(DoubleParser.parse("1e3"), Ok(1000.0));
        assert_eq!(DoubleParser.parse(".5"), Ok(0.5));
        assert_eq!(DoubleParser.parse("+2"), Ok(2.0));
    }

    #[test]
    fn test_double_parser_rejects() {
        assert_eq!(DoubleParser.parse(""), Err(ParseError::Empty));
        assert_eq!(DoubleParser.parse("   "), Err(ParseError::Empty));
        assert_eq!(
            DoubleParser.parse("abc"),
            Err(ParseError::invalid("abc", "real number"))
        );
        assert!(matches!(
            DoubleParser.parse("1.2.3"),
            Err(ParseError::Invalid { .. })
        ));
        assert!(matches!(
            DoubleParser.parse("3,5"),
            Err(ParseError::Invalid { .. })
        ));
    }

    #[test]
    fn test_double_parser_non_finite() {
        for text in ["NaN", "inf", "-Infinity", "+INF"] {
            assert!(
                matches!(DoubleParser.parse(text), Err(ParseError::NotFinite { .. })),
                "{text}"
            );
        }
        assert_eq!(
            DoubleParser.parse("1e400"),
            Err(ParseError::out_of_range("1e400", "real number"))
        );
    }

    #[test]
    fn test_integer_parser_accepts() {
        assert_eq!(IntegerParser.parse("4"), Ok(4));
        assert_eq!(IntegerParser.parse("-17"), Ok(-17));
        assert_eq!(IntegerParser.parse(" +8 "), Ok(8));
        assert_eq!(IntegerParser.parse("9223372036854775807"), Ok(i64::MAX));
    }

    #[test]
    fn test_integer_parser_rejects() {
        assert_eq!(IntegerParser.parse(""), Err(ParseError::Empty));
        for text in ["4.0", "4.5", "1e3", "four", "1_000", "-"] {
            assert!(
                matches!(IntegerParser.parse(text), Err(ParseError::Invalid { .. })),
                "{text}"
            );
        }
        assert_eq!(
            IntegerParser.parse("9223372036854775808"),
            Err(ParseError::out_of_range("9223372036854775808", "whole number"))
        );
        assert!(matches!(
            IntegerParser.parse("-99999999999999999999"),
            Err(ParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_text_parser_is_identity() {
        assert_eq!(TextParser.parse(""), Ok(String::new()));
        assert_eq!(TextParser.parse(" padded "), Ok(" padded ".to_string()));
    }

    #[test]
    fn test_closure_strategies() {
        let parse_bool = |raw: &str| match raw.trim() {
            "yes" => Ok(true),
            "no" => Ok(false),
            other => Err(ParseError::custom(format!("expected yes/no, got '{other}'"))),
        };
        let strategy = EditStrategy::new(parse_bool, |b: &bool| *b);

        assert_eq!(strategy.parse("yes"), Ok(true));
        assert!(strategy.parse("maybe").is_err());
        assert!(strategy.validate(&true));
        assert!(!strategy.validate(&false));

        let cloned = strategy.clone();
        assert_eq!(cloned.parse(" no "), Ok(false));
    }
}
