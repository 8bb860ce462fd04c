//! Validating in-place cell editors for Horizon table views.
//!
//! A cell editor sits between a table host and the text input shown over a
//! cell. When the user tries to commit, the editor parses the text into a typed
//! value and checks it against a domain rule. Accepted values are handed to the
//! host; rejected input keeps the editor open with an error border and notifies
//! every registered [`ValidationErrorListener`].
//!
//! # Editors
//!
//! - [`DoubleEditor`]: real numbers, right-aligned
//! - [`IntegerEditor`]: whole numbers, right-aligned
//! - [`TextEditor`]: free text
//! - [`EditorBuilder`]: any value type, with a custom [`Parser`](strategy::Parser)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use horizon_cell_editor::{CellValue, EditContext, IntegerEditor, TextField};
//! use horizon_cell_editor::rules::InRange;
//!
//! let mut editor: IntegerEditor = IntegerEditor::new(InRange::new(1, 31));
//!
//! let failures = Arc::new(AtomicUsize::new(0));
//! let counter = failures.clone();
//! editor.on_validation_failed(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! editor.begin_edit(TextField::new(), &CellValue::Int(1), EditContext::new(4, 0));
//! editor.component_mut().unwrap().type_text("32");
//! assert!(editor.attempt_commit()?.is_rejected());
//! assert_eq!(failures.load(Ordering::SeqCst), 1);
//!
//! editor.component_mut().unwrap().type_text("30");
//! assert!(editor.attempt_commit()?.is_accepted());
//! assert_eq!(editor.cell_value(), CellValue::Int(30));
//! # Ok::<(), horizon_cell_editor::EditorError>(())
//! ```
//!
//! # Threading
//!
//! Editors are bound to the thread that created them, like the widgets they
//! drive. Debug builds check this on every mutating call.

pub mod builder;
pub mod component;
pub mod config;
pub mod editor;
pub mod error;
pub mod listener;
pub mod rules;
pub mod strategy;
pub mod typed;
pub mod value;

pub use builder::EditorBuilder;
pub use component::{Alignment, BorderState, EditingComponent, TextField};
pub use config::{BlankPolicy, EditorConfig};
pub use editor::{CommitOutcome, Rejection, SessionState, ValidatingCellEditor, Validity};
pub use error::{ConfigError, EditorError, ParseError, Result};
pub use listener::ValidationErrorListener;
pub use typed::{DoubleEditor, IntegerEditor, TextEditor};
pub use value::{CellValue, EditContext};

pub use horizon_cell_editor_core::{ConnectionId, EmitReport, Signal};

static_assertions::assert_impl_all!(ValidatingCellEditor<f64>: Send, Sync);
static_assertions::assert_impl_all!(EditorBuilder<String>: Send, Sync);
