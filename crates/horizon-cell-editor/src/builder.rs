//! Step-by-step editor construction.
//!
//! ```
//! use horizon_cell_editor::{BlankPolicy, EditorBuilder, ValidatingCellEditor};
//! use horizon_cell_editor::rules::InRange;
//! use horizon_cell_editor::strategy::IntegerParser;
//!
//! let editor: ValidatingCellEditor<i64> = EditorBuilder::new()
//!     .parser(IntegerParser)
//!     .rule(InRange::new(1, 12))
//!     .numeric(true)
//!     .blank_policy(BlankPolicy::Clear)
//!     .build()?;
//! assert!(editor.is_numeric());
//! # Ok::<(), horizon_cell_editor::ConfigError>(())
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use horizon_cell_editor_core::logging::targets;

use crate::component::{Alignment, EditingComponent, TextField};
use crate::config::{BlankPolicy, EditorConfig};
use crate::editor::ValidatingCellEditor;
use crate::error::ConfigError;
use crate::strategy::{DoubleParser, EditStrategy, IntegerParser, Parser, Rule, TextParser};

/// Builder for [`ValidatingCellEditor`].
///
/// Both a parser and a rule are required; [`build`](Self::build) reports
/// whichever is missing.
pub struct EditorBuilder<T, C = TextField> {
    parser: Option<Arc<dyn Parser<T>>>,
    rule: Option<Arc<dyn Rule<T>>>,
    config: EditorConfig,
    component: PhantomData<fn() -> C>,
}

impl<T, C> Default for EditorBuilder<T, C> {
    fn default() -> Self {
        Self {
            parser: None,
            rule: None,
            config: EditorConfig::default(),
            component: PhantomData,
        }
    }
}

impl<T, C: EditingComponent> EditorBuilder<T, C> {
    /// Creates a builder with no parser, no rule and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text-to-value conversion.
    pub fn parser<P: Parser<T> + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Sets the domain rule.
    pub fn rule<R: Rule<T> + 'static>(mut self, rule: R) -> Self {
        self.rule = Some(Arc::new(rule));
        self
    }

    /// Uses both halves of an existing strategy.
    pub fn strategy(mut self, strategy: EditStrategy<T>) -> Self {
        let (parser, rule) = strategy.into_parts();
        self.parser = Some(parser);
        self.rule = Some(rule);
        self
    }

    /// Right-align the text.
    pub fn numeric(mut self, numeric: bool) -> Self {
        self.config.numeric = numeric;
        self
    }

    /// Alignment used when not numeric.
    pub fn text_alignment(mut self, alignment: Alignment) -> Self {
        self.config.text_alignment = alignment;
        self
    }

    /// Blank input handling.
    pub fn blank_policy(mut self, policy: BlankPolicy) -> Self {
        self.config.blank_input = policy;
        self
    }

    /// Replaces all settings, for example with ones loaded by [`EditorConfig::load`].
    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the editor.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingParser`] or [`ConfigError::MissingRule`] when
    /// either half of the strategy was never supplied.
    pub fn build(self) -> Result<ValidatingCellEditor<T, C>, ConfigError> {
        let parser = self.parser.ok_or(ConfigError::MissingParser)?;
        let rule = self.rule.ok_or(ConfigError::MissingRule)?;
        tracing::trace!(target: targets::CONFIG, config = ?self.config, "building cell editor");
        Ok(ValidatingCellEditor::with_strategy(
            EditStrategy::from_parts(parser, rule),
            self.config,
        ))
    }
}

impl<C: EditingComponent> EditorBuilder<f64, C> {
    /// A numeric builder with the real number parser preset.
    pub fn double() -> Self {
        Self::new().parser(DoubleParser).numeric(true)
    }
}

impl<C: EditingComponent> EditorBuilder<i64, C> {
    /// A numeric builder with the whole number parser preset.
    pub fn integer() -> Self {
        Self::new().parser(IntegerParser).numeric(true)
    }
}

impl<C: EditingComponent> EditorBuilder<String, C> {
    /// A text builder with the identity parser preset.
    pub fn text() -> Self {
        Self::new().parser(TextParser)
    }
}

impl<T, C> fmt::Debug for EditorBuilder<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorBuilder")
            .field("has_parser", &self.parser.is_some())
            .field("has_rule", &self.rule.is_some())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{non_negative, not_blank};

    #[test]
    fn test_missing_parts_fail_at_build() {
        let missing_parser = EditorBuilder::<i64>::new().rule(|_: &i64| true).build();
        assert!(matches!(missing_parser, Err(ConfigError::MissingParser)));

        let missing_rule = EditorBuilder::<i64>::integer().build();
        assert!(matches!(missing_rule, Err(ConfigError::MissingRule)));

        let missing_both = EditorBuilder::<String>::new().build();
        assert!(matches!(missing_both, Err(ConfigError::MissingParser)));
    }

    #[test]
    fn test_presets() {
        let doubles = EditorBuilder::<f64>::double()
            .rule(non_negative::<f64>())
            .build()
            .unwrap();
        assert!(doubles.is_numeric());
        assert_eq!(doubles.alignment(), Alignment::Right);

        let text = EditorBuilder::<String>::text().rule(not_blank()).build().unwrap();
        assert!(!text.is_numeric());
        assert_eq!(text.alignment(), Alignment::Leading);
    }

    #[test]
    fn test_config_replaces_settings() {
        let config = EditorConfig::from_toml_str("text_alignment = \"center\"\nblank_input = \"reject\"")
            .unwrap();
        let editor = EditorBuilder::<String>::text()
            .numeric(true)
            .config(config)
            .rule(not_blank())
            .build()
            .unwrap();
        assert_eq!(editor.alignment(), Alignment::Center);
        assert_eq!(editor.blank_policy(), BlankPolicy::Reject);
    }

    #[test]
    fn test_from_strategy() {
        let strategy = EditStrategy::new(IntegerParser, |n: &i64| *n != 13);
        let editor = EditorBuilder::<i64>::new().strategy(strategy).build().unwrap();
        assert!(!editor.strategy().validate(&13));
    }
}
