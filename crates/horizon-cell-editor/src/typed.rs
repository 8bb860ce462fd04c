//! Ready-made editors for common column types.

use crate::component::{EditingComponent, TextField};
use crate::config::EditorConfig;
use crate::editor::ValidatingCellEditor;
use crate::strategy::{DoubleParser, EditStrategy, IntegerParser, Rule, TextParser};

/// Editor for real number columns. Right-aligned.
pub type DoubleEditor<C = TextField> = ValidatingCellEditor<f64, C>;

/// Editor for whole number columns. Right-aligned.
pub type IntegerEditor<C = TextField> = ValidatingCellEditor<i64, C>;

/// Editor for free text columns. Leading-aligned.
pub type TextEditor<C = TextField> = ValidatingCellEditor<String, C>;

impl<C: EditingComponent> ValidatingCellEditor<f64, C> {
    /// Create a real number editor that commits values accepted by `rule`.
    pub fn new<R: Rule<f64> + 'static>(rule: R) -> Self {
        Self::with_strategy(EditStrategy::new(DoubleParser, rule), EditorConfig::numeric())
    }
}

impl<C: EditingComponent> ValidatingCellEditor<i64, C> {
    /// Create a whole number editor that commits values accepted by `rule`.
    pub fn new<R: Rule<i64> + 'static>(rule: R) -> Self {
        Self::with_strategy(EditStrategy::new(IntegerParser, rule), EditorConfig::numeric())
    }
}

impl<C: EditingComponent> ValidatingCellEditor<String, C> {
    /// Create a text editor that commits text accepted by `rule`.
    ///
    /// Blank text is committed as the empty string unless the rule or the
    /// [`BlankPolicy`](crate::BlankPolicy) says otherwise.
    pub fn new<R: Rule<String> + 'static>(rule: R) -> Self {
        Self::with_strategy(EditStrategy::new(TextParser, rule), EditorConfig::default())
    }
}
