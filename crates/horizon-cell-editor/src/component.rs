//! The text input surface an editor drives.
//!
//! Editors never touch a concrete widget. They go through
//! [`EditingComponent`], a narrow capability covering text content, border
//! feedback and horizontal alignment. Toolkit integrations implement it for
//! their line-edit widget; [`TextField`] is a self-contained implementation
//! used by headless hosts and tests.

use horizon_cell_editor_core::Signal;
use serde::Deserialize;

/// Horizontal text alignment inside the editing component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Align to the start of the writing direction.
    #[default]
    Leading,
    /// Align to the left edge.
    Left,
    /// Align to the center.
    Center,
    /// Align to the right edge.
    Right,
}

/// Border feedback shown on the editing component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderState {
    /// Regular border.
    #[default]
    Normal,
    /// Error indicator (a red border in most themes).
    Error,
}

impl BorderState {
    /// Returns `true` for the error indicator.
    pub fn is_error(&self) -> bool {
        matches!(self, BorderState::Error)
    }
}

/// Capability surface consumed by cell editors.
pub trait EditingComponent {
    /// Current raw text.
    fn text(&self) -> String;

    /// Replace the text content.
    fn set_text(&mut self, text: &str);

    /// Show normal or error border feedback.
    fn set_border(&mut self, state: BorderState);

    /// Set horizontal text alignment.
    fn set_alignment(&mut self, alignment: Alignment);
}

impl<C: EditingComponent + ?Sized> EditingComponent for Box<C> {
    fn text(&self) -> String {
        (**self).text()
    }

    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }

    fn set_border(&mut self, state: BorderState) {
        (**self).set_border(state)
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        (**self).set_alignment(alignment)
    }
}

/// A headless single-line text field.
///
/// # Signals
///
/// - `text_changed`: Emitted when the text content changes
pub struct TextField {
    text: String,
    border: BorderState,
    alignment: Alignment,
    /// Maximum text length in characters (None = unlimited).
    max_length: Option<usize>,

    /// Signal emitted when text changes.
    pub text_changed: Signal<String>,
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl TextField {
    /// Create a new empty field.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            border: BorderState::Normal,
            alignment: Alignment::Leading,
            max_length: None,
            text_changed: Signal::new(),
        }
    }

    /// Create a new field with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.text = text.into();
        field
    }

    /// Limit the text to `max` characters. Longer text is truncated on `set_text`.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Simulate the user replacing the field contents.
    pub fn type_text(&mut self, text: &str) {
        self.set_text(text);
    }

    /// The current border feedback.
    pub fn border(&self) -> BorderState {
        self.border
    }

    /// The current horizontal alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The character limit, if any.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }
}

impl EditingComponent for TextField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        let new_text: String = match self.max_length {
            Some(max) if text.chars().count() > max => text.chars().take(max).collect(),
            _ => text.to_owned(),
        };

        if self.text != new_text {
            self.text = new_text;
            self.text_changed.emit(self.text.clone());
        }
    }

    fn set_border(&mut self, state: BorderState) {
        self.border = state;
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }
}

impl std::fmt::Debug for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextField")
            .field("text", &self.text)
            .field("border", &self.border)
            .field("alignment", &self.alignment)
            .field("max_length", &self.max_length)
            .finish()
    }
}

static_assertions::assert_impl_all!(TextField: Send, Sync);
