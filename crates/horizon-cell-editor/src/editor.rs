//! The validating cell editor.
//!
//! [`ValidatingCellEditor`] runs the edit session of one table cell at a time:
//!
//! 1. The host calls [`begin_edit`](ValidatingCellEditor::begin_edit) with the
//!    editing component. The border is reset, the alignment applied and the
//!    cell's current value written into the component.
//! 2. The user types.
//! 3. The host calls [`attempt_commit`](ValidatingCellEditor::attempt_commit).
//!    The raw text is parsed, then checked against the domain rule.
//!    - On success the value is stored, the border is normal and the session
//!      becomes committed. The host reads [`value`](ValidatingCellEditor::value)
//!      and ends the session with [`finish_edit`](ValidatingCellEditor::finish_edit).
//!    - On failure the border shows the error indicator, every registered
//!      [`ValidationErrorListener`] is notified once, and the session stays
//!      open for further typing and another attempt.
//! 4. Alternatively the host calls [`cancel`](ValidatingCellEditor::cancel).
//!
//! Parse errors and rule failures never escape as errors; they are reported as
//! [`CommitOutcome::Rejected`]. [`EditorError`] is reserved for calls made in
//! the wrong session state.
//!
//! # Example
//!
//! ```
//! use horizon_cell_editor::{CellValue, CommitOutcome, DoubleEditor, EditContext, TextField};
//! use horizon_cell_editor::component::{BorderState, EditingComponent};
//!
//! let mut editor: DoubleEditor = DoubleEditor::new(|v: &f64| *v >= 0.0);
//! editor.on_validation_failed(|| eprintln!("rejected"));
//!
//! let field = editor.begin_edit(TextField::new(), &CellValue::Float(1.0), EditContext::new(0, 2));
//! field.set_text("-3.5");
//! assert!(editor.attempt_commit()?.is_rejected());
//! assert_eq!(editor.component().map(|f| f.border()), Some(BorderState::Error));
//!
//! editor.component_mut().unwrap().set_text("3.5");
//! assert_eq!(editor.attempt_commit()?, CommitOutcome::Accepted);
//! assert_eq!(editor.value(), Some(&3.5));
//! let _field = editor.finish_edit()?;
//! # Ok::<(), horizon_cell_editor::EditorError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_cell_editor_core::logging::targets;
use horizon_cell_editor_core::{ConnectionId, Signal, ThreadAffinity};

use crate::component::{Alignment, BorderState, EditingComponent, TextField};
use crate::config::{BlankPolicy, EditorConfig};
use crate::error::{EditorError, ParseError, Result};
use crate::listener::{ListenerRegistry, ValidationErrorListener};
use crate::strategy::EditStrategy;
use crate::value::{CellValue, EditContext};

/// Lifecycle state of an open edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// The user is editing; commit may be attempted.
    Editing,
    /// A commit was accepted. Terminal until the host finishes or replaces the session.
    Committed,
}

/// Outcome of the most recent commit attempt in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Validity {
    /// No attempt has been made yet.
    #[default]
    Unknown,
    /// The last attempt parsed and passed the rule.
    Valid,
    /// The last attempt failed to parse or failed the rule.
    Invalid,
}

/// Why a commit attempt was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The text could not be converted to the editor's value type.
    Parse(ParseError),
    /// The converted value failed the domain rule.
    Validation,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Parse(err) => write!(f, "parse error: {err}"),
            Rejection::Validation => f.write_str("value failed validation"),
        }
    }
}

/// Result of [`ValidatingCellEditor::attempt_commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A value was committed; read it with [`ValidatingCellEditor::value`].
    Accepted,
    /// Blank input was accepted as "no value" under [`BlankPolicy::Clear`].
    Cleared,
    /// Nothing was committed; the session is still editing.
    Rejected(Rejection),
}

impl CommitOutcome {
    /// Returns `true` for [`Accepted`](Self::Accepted) and [`Cleared`](Self::Cleared).
    pub fn is_accepted(&self) -> bool {
        !self.is_rejected()
    }

    /// Returns `true` if nothing was committed.
    pub fn is_rejected(&self) -> bool {
        matches!(self, CommitOutcome::Rejected(_))
    }

    /// The rejection reason, if rejected.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            CommitOutcome::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

/// Transient state of one cell edit.
struct EditSession<C> {
    component: C,
    context: EditContext,
    state: SessionState,
    /// Text read by the latest commit attempt.
    raw_text: Option<String>,
    validity: Validity,
    last_rejection: Option<Rejection>,
}

/// A table cell editor that parses and validates before committing.
///
/// One instance serves one column (or cell type) for the lifetime of the
/// table; it holds at most one open session at a time. All calls must be made
/// on the thread that created the editor.
///
/// # Signals
///
/// - `editing_started`: A session began on a cell
/// - `editing_committed`: A commit attempt was accepted
/// - `editing_canceled`: A session was abandoned without committing
pub struct ValidatingCellEditor<T, C = TextField> {
    strategy: EditStrategy<T>,
    config: EditorConfig,
    listeners: ListenerRegistry,
    session: Option<EditSession<C>>,
    /// Last committed value; survives cancel and new sessions.
    value: Option<T>,
    affinity: ThreadAffinity,

    /// Signal emitted when a session begins.
    pub editing_started: Signal<EditContext>,

    /// Signal emitted when a commit attempt is accepted.
    pub editing_committed: Signal<EditContext>,

    /// Signal emitted when a session ends without committing.
    pub editing_canceled: Signal<EditContext>,
}

impl<T, C: EditingComponent> ValidatingCellEditor<T, C> {
    /// Create an editor from a strategy and settings.
    pub fn with_strategy(strategy: EditStrategy<T>, config: EditorConfig) -> Self {
        Self {
            strategy,
            config,
            listeners: ListenerRegistry::default(),
            session: None,
            value: None,
            affinity: ThreadAffinity::current(),
            editing_started: Signal::new(),
            editing_committed: Signal::new(),
            editing_canceled: Signal::new(),
        }
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Start editing a cell.
    ///
    /// The editor takes ownership of `component` for the session and returns
    /// it for display. The border is reset to normal whatever the previous
    /// session's outcome was. A session that is still open is replaced as if
    /// canceled, and its component is dropped.
    pub fn begin_edit(&mut self, mut component: C, initial: &CellValue, context: EditContext) -> &mut C {
        self.affinity.debug_assert_same_thread();

        if let Some(previous) = self.session.take() {
            tracing::trace!(
                target: targets::SESSION,
                row = previous.context.row,
                column = previous.context.column,
                "replacing open edit session"
            );
            if previous.state == SessionState::Editing {
                self.editing_canceled.emit(previous.context);
            }
        }

        component.set_border(BorderState::Normal);
        component.set_alignment(self.config.alignment());
        component.set_text(&initial.display_text());

        tracing::trace!(target: targets::SESSION, row = context.row, column = context.column, "edit session started");
        self.editing_started.emit(context);

        let session = self.session.insert(EditSession {
            component,
            context,
            state: SessionState::Editing,
            raw_text: None,
            validity: Validity::Unknown,
            last_rejection: None,
        });
        &mut session.component
    }

    /// Try to commit the component's current text.
    ///
    /// Returns [`CommitOutcome::Rejected`] when the text fails to parse or the
    /// value fails the rule; in that case the border shows the error indicator
    /// and every registered listener is notified exactly once, in
    /// registration order. A panicking listener does not prevent the others
    /// from being notified.
    ///
    /// # Errors
    ///
    /// [`EditorError::NotEditing`] without an open session and
    /// [`EditorError::AlreadyCommitted`] after an accepted attempt. Neither
    /// touches the border or the listeners.
    #[tracing::instrument(skip_all, target = "horizon_cell_editor::session", level = "trace")]
    pub fn attempt_commit(&mut self) -> Result<CommitOutcome> {
        self.affinity.debug_assert_same_thread();

        let session = self.session.as_mut().ok_or(EditorError::NotEditing)?;
        if session.state == SessionState::Committed {
            return Err(EditorError::AlreadyCommitted);
        }

        let raw = session.component.text();
        let blank = raw.trim().is_empty();
        let result = match (blank, self.config.blank_input) {
            (true, BlankPolicy::Clear) => Ok(None),
            (true, BlankPolicy::Reject) => Err(Rejection::Parse(ParseError::Empty)),
            _ => match self.strategy.parse(&raw) {
                Ok(value) if self.strategy.validate(&value) => Ok(Some(value)),
                Ok(_) => Err(Rejection::Validation),
                Err(err) => Err(Rejection::Parse(err)),
            },
        };
        session.raw_text = Some(raw);
        let context = session.context;

        match result {
            Ok(value) => {
                session.state = SessionState::Committed;
                session.validity = Validity::Valid;
                session.last_rejection = None;
                session.component.set_border(BorderState::Normal);

                let outcome = if value.is_some() {
                    CommitOutcome::Accepted
                } else {
                    CommitOutcome::Cleared
                };
                self.value = value;

                tracing::debug!(
                    target: targets::VALIDATION,
                    row = context.row,
                    column = context.column,
                    cleared = matches!(outcome, CommitOutcome::Cleared),
                    "commit accepted"
                );
                self.editing_committed.emit(context);
                Ok(outcome)
            }
            Err(rejection) => {
                session.validity = Validity::Invalid;
                session.last_rejection = Some(rejection.clone());
                session.component.set_border(BorderState::Error);

                let report = self.listeners.notify();
                tracing::debug!(
                    target: targets::VALIDATION,
                    row = context.row,
                    column = context.column,
                    reason = %rejection,
                    listeners = report.invoked,
                    "commit rejected"
                );
                if !report.is_clean() {
                    tracing::warn!(
                        target: targets::VALIDATION,
                        failed = report.panicked,
                        "validation error listeners panicked"
                    );
                }
                Ok(CommitOutcome::Rejected(rejection))
            }
        }
    }

    /// Abandon the open session and hand the component back.
    ///
    /// Neither the parser nor the rule runs, no listener is notified and the
    /// last committed value is left as it was. Returns `None` if no session
    /// was open.
    pub fn cancel(&mut self) -> Option<C> {
        self.affinity.debug_assert_same_thread();

        let session = self.session.take()?;
        tracing::trace!(
            target: targets::SESSION,
            row = session.context.row,
            column = session.context.column,
            "edit session canceled"
        );
        if session.state == SessionState::Editing {
            self.editing_canceled.emit(session.context);
        }
        Some(session.component)
    }

    /// End a committed session and hand the component back.
    ///
    /// # Errors
    ///
    /// [`EditorError::NotEditing`] without an open session and
    /// [`EditorError::NotCommitted`] while the session is still editing.
    pub fn finish_edit(&mut self) -> Result<C> {
        self.affinity.debug_assert_same_thread();

        match self.session.as_ref().map(|session| session.state) {
            None => Err(EditorError::NotEditing),
            Some(SessionState::Editing) => Err(EditorError::NotCommitted),
            Some(SessionState::Committed) => {
                let session = self.session.take().ok_or(EditorError::NotEditing)?;
                tracing::trace!(target: targets::SESSION, "edit session finished");
                Ok(session.component)
            }
        }
    }

    // =========================================================================
    // Committed value
    // =========================================================================

    /// The last committed value.
    ///
    /// `None` before the first accepted commit and after a
    /// [`CommitOutcome::Cleared`] commit. Rejected attempts and cancellations
    /// leave it unchanged.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The last committed value as cell data, for writing back to the model.
    pub fn cell_value(&self) -> CellValue
    where
        T: Clone + Into<CellValue>,
    {
        self.value.clone().into()
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register a validation failure listener.
    ///
    /// Listeners are notified in registration order. Registering the same
    /// handle twice notifies it twice.
    pub fn add_validation_error_listener(
        &mut self,
        listener: Arc<dyn ValidationErrorListener>,
    ) -> ConnectionId {
        self.affinity.debug_assert_same_thread();
        self.listeners.add(listener)
    }

    /// Register a closure as a validation failure listener.
    pub fn on_validation_failed<F>(&mut self, listener: F) -> ConnectionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.add_validation_error_listener(Arc::new(listener))
    }

    /// Remove the oldest registration of `listener`.
    ///
    /// Returns `false` (and does nothing) if it is not registered.
    pub fn remove_validation_error_listener(
        &mut self,
        listener: &Arc<dyn ValidationErrorListener>,
    ) -> bool {
        self.affinity.debug_assert_same_thread();
        self.listeners.remove(listener)
    }

    /// Remove the registration identified by `id`.
    pub fn remove_validation_error_listener_by_id(&mut self, id: ConnectionId) -> bool {
        self.affinity.debug_assert_same_thread();
        self.listeners.remove_by_id(id)
    }

    /// Number of listener registrations.
    pub fn validation_error_listener_count(&self) -> usize {
        self.listeners.len()
    }

    // =========================================================================
    // Alignment and settings
    // =========================================================================

    /// Whether this editor right-aligns its text as a numeric editor.
    pub fn is_numeric(&self) -> bool {
        self.config.numeric
    }

    /// Switch between numeric (right) and text alignment.
    ///
    /// Applied to the open session's component immediately.
    pub fn set_numeric(&mut self, numeric: bool) {
        self.affinity.debug_assert_same_thread();
        self.config.numeric = numeric;
        self.apply_alignment();
    }

    /// Alignment used when the editor is not numeric.
    pub fn set_text_alignment(&mut self, alignment: Alignment) {
        self.affinity.debug_assert_same_thread();
        self.config.text_alignment = alignment;
        self.apply_alignment();
    }

    /// The alignment applied to components.
    pub fn alignment(&self) -> Alignment {
        self.config.alignment()
    }

    /// Blank input handling.
    pub fn blank_policy(&self) -> BlankPolicy {
        self.config.blank_input
    }

    /// Change blank input handling. Takes effect at the next commit attempt.
    pub fn set_blank_policy(&mut self, policy: BlankPolicy) {
        self.config.blank_input = policy;
    }

    /// The editor's current settings.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The parse/validate strategy.
    pub fn strategy(&self) -> &EditStrategy<T> {
        &self.strategy
    }

    fn apply_alignment(&mut self) {
        let alignment = self.config.alignment();
        if let Some(session) = self.session.as_mut() {
            session.component.set_alignment(alignment);
        }
    }

    // =========================================================================
    // Session inspection
    // =========================================================================

    /// Returns `true` while a session is open and not yet committed.
    pub fn is_editing(&self) -> bool {
        self.session_state() == Some(SessionState::Editing)
    }

    /// State of the open session, if any.
    pub fn session_state(&self) -> Option<SessionState> {
        self.session.as_ref().map(|session| session.state)
    }

    /// Outcome of the open session's latest attempt.
    pub fn validity(&self) -> Validity {
        self.session
            .as_ref()
            .map_or(Validity::Unknown, |session| session.validity)
    }

    /// Why the open session's latest attempt was rejected.
    pub fn last_rejection(&self) -> Option<&Rejection> {
        self.session.as_ref()?.last_rejection.as_ref()
    }

    /// Text read by the open session's latest attempt.
    pub fn last_attempted_text(&self) -> Option<&str> {
        self.session.as_ref()?.raw_text.as_deref()
    }

    /// The cell being edited.
    pub fn context(&self) -> Option<EditContext> {
        self.session.as_ref().map(|session| session.context)
    }

    /// The open session's component.
    pub fn component(&self) -> Option<&C> {
        self.session.as_ref().map(|session| &session.component)
    }

    /// The open session's component, for simulating user input.
    pub fn component_mut(&mut self) -> Option<&mut C> {
        self.session.as_mut().map(|session| &mut session.component)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ValidatingCellEditor<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatingCellEditor")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("session", &self.session.as_ref().map(|s| (s.context, s.state)))
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{DoubleParser, IntegerParser, TextParser};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn even_editor() -> ValidatingCellEditor<i64> {
        ValidatingCellEditor::with_strategy(
            EditStrategy::new(IntegerParser, |n: &i64| n % 2 == 0),
            EditorConfig::numeric(),
        )
    }

    fn type_and_commit<T>(editor: &mut ValidatingCellEditor<T>, text: &str) -> CommitOutcome {
        editor
            .component_mut()
            .expect("session open")
            .set_text(text);
        editor.attempt_commit().expect("session editing")
    }

    #[test]
    fn test_begin_edit_initializes_component() {
        let mut editor = even_editor();
        let mut field = TextField::with_text("stale");
        field.set_border(BorderState::Error);

        let field = editor.begin_edit(field, &CellValue::Int(12), EditContext::new(1, 2));
        assert_eq!(field.text(), "12");
        assert_eq!(field.border(), BorderState::Normal);
        assert_eq!(field.alignment(), Alignment::Right);

        assert!(editor.is_editing());
        assert_eq!(editor.validity(), Validity::Unknown);
        assert_eq!(editor.context(), Some(EditContext::new(1, 2)));
        assert_eq!(editor.last_attempted_text(), None);
    }

    #[test]
    fn test_rejected_then_accepted() {
        let mut editor = even_editor();
        editor.begin_edit(TextField::new(), &CellValue::Empty, EditContext::default());

        let outcome = type_and_commit(&mut editor, "5");
        assert_eq!(outcome, CommitOutcome::Rejected(Rejection::Validation));
        assert_eq!(editor.validity(), Validity::Invalid);
        assert_eq!(editor.session_state(), Some(SessionState::Editing));
        assert!(editor.component().unwrap().border().is_error());
        assert_eq!(editor.value(), None);

        assert_eq!(type_and_commit(&mut editor, "6"), CommitOutcome::Accepted);
        assert_eq!(editor.validity(), Validity::Valid);
        assert_eq!(editor.session_state(), Some(SessionState::Committed));
        assert_eq!(editor.component().unwrap().border(), BorderState::Normal);
        assert_eq!(editor.value(), Some(&6));
        assert_eq!(editor.last_attempted_text(), Some("6"));
        assert_eq!(editor.cell_value(), CellValue::Int(6));
    }

    #[test]
    fn test_parse_failure_records_rejection() {
        let mut editor = even_editor();
        editor.begin_edit(TextField::new(), &CellValue::Empty, EditContext::default());

        let outcome = type_and_commit(&mut editor, "4.0");
        assert!(matches!(
            outcome.rejection(),
            Some(Rejection::Parse(ParseError::Invalid { .. }))
        ));
        assert_eq!(editor.last_rejection(), outcome.rejection());
    }

    #[test]
    fn test_rule_not_consulted_when_parse_fails() {
        let rule_calls = Arc::new(AtomicUsize::new(0));
        let rule_calls_clone = rule_calls.clone();
        let mut editor: ValidatingCellEditor<f64> = ValidatingCellEditor::with_strategy(
            EditStrategy::new(DoubleParser, move |_: &f64| {
                rule_calls_clone.fetch_add(1, Ordering::SeqCst);
                true
            }),
            EditorConfig::numeric(),
        );
        editor.begin_edit(TextField::new(), &CellValue::Empty, EditContext::default());

        assert!(type_and_commit(&mut editor, "abc").is_rejected());
        assert_eq!(rule_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_protocol_errors() {
        let mut editor = even_editor();
        assert_eq!(editor.attempt_commit(), Err(EditorError::NotEditing));
        assert!(matches!(editor.finish_edit(), Err(EditorError::NotEditing)));
        assert!(editor.cancel().is_none());

        editor.begin_edit(TextField::new(), &CellValue::Int(2), EditContext::default());
        assert!(matches!(editor.finish_edit(), Err(EditorError::NotCommitted)));
        assert_eq!(editor.attempt_commit(), Ok(CommitOutcome::Accepted));
        assert_eq!(editor.attempt_commit(), Err(EditorError::AlreadyCommitted));

        let field = editor.finish_edit().unwrap();
        assert_eq!(field.text(), "2");
        assert_eq!(editor.session_state(), None);
    }

    #[test]
    fn test_protocol_errors_do_not_notify() {
        let mut editor = even_editor();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        editor.on_validation_failed(move || {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        let _ = editor.attempt_commit();
        editor.begin_edit(TextField::new(), &CellValue::Int(2), EditContext::default());
        editor.attempt_commit().unwrap();
        let _ = editor.attempt_commit();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(editor.component().unwrap().border(), BorderState::Normal);
    }

    #[test]
    fn test_cancel_keeps_committed_value() {
        let mut editor = even_editor();
        editor.begin_edit(TextField::new(), &CellValue::Empty, EditContext::new(0, 0));
        type_and_commit(&mut editor, "8");
        editor.finish_edit().unwrap();

        editor.begin_edit(TextField::new(), &CellValue::Int(8), EditContext::new(1, 0));
        editor.component_mut().unwrap().set_text("10");
        let field = editor.cancel().expect("component returned");
        assert_eq!(field.text(), "10");
        assert_eq!(editor.value(), Some(&8));
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_begin_edit_replaces_open_session() {
        let mut editor = even_editor();
        let canceled = Arc::new(AtomicUsize::new(0));
        let canceled_clone = canceled.clone();
        editor.editing_canceled.connect(move |_| {
            canceled_clone.fetch_add(1, Ordering::SeqCst);
        });

        editor.begin_edit(TextField::new(), &CellValue::Empty, EditContext::new(0, 0));
        type_and_commit(&mut editor, "3");
        editor.begin_edit(TextField::new(), &CellValue::Int(4), EditContext::new(5, 0));

        assert_eq!(canceled.load(Ordering::SeqCst), 1);
        assert_eq!(editor.context(), Some(EditContext::new(5, 0)));
        assert_eq!(editor.validity(), Validity::Unknown);
        assert_eq!(editor.component().unwrap().border(), BorderState::Normal);
    }

    #[test]
    fn test_lifecycle_signals() {
        let mut editor = even_editor();
        let events = Arc::new(parking_lot::Mutex::new(Vec::new()));

        for (name, signal) in [
            ("started", &editor.editing_started),
            ("committed", &editor.editing_committed),
            ("canceled", &editor.editing_canceled),
        ] {
            let events = events.clone();
            signal.connect(move |ctx: &EditContext| events.lock().push((name, ctx.row)));
        }

        editor.begin_edit(TextField::new(), &CellValue::Empty, EditContext::new(0, 0));
        type_and_commit(&mut editor, "1");
        type_and_commit(&mut editor, "2");
        editor.finish_edit().unwrap();
        editor.begin_edit(TextField::new(), &CellValue::Empty, EditContext::new(1, 0));
        editor.cancel();

        assert_eq!(
            *events.lock(),
            vec![("started", 0), ("committed", 0), ("started", 1), ("canceled", 1)]
        );
    }

    #[test]
    fn test_set_numeric_applies_to_open_session() {
        let mut editor: ValidatingCellEditor<String> = ValidatingCellEditor::with_strategy(
            EditStrategy::new(TextParser, crate::rules::accept_all()),
            EditorConfig::default(),
        );
        assert_eq!(editor.alignment(), Alignment::Leading);

        editor.begin_edit(TextField::new(), &CellValue::Empty, EditContext::default());
        editor.set_numeric(true);
        assert_eq!(editor.component().unwrap().alignment(), Alignment::Right);

        editor.set_text_alignment(Alignment::Center);
        assert_eq!(editor.component().unwrap().alignment(), Alignment::Right);

        editor.set_numeric(false);
        assert_eq!(editor.component().unwrap().alignment(), Alignment::Center);
    }

    #[test]
    fn test_set_numeric_without_session() {
        let mut editor = even_editor();
        editor.set_numeric(false);
        assert!(!editor.is_numeric());

        let field = editor.begin_edit(TextField::new(), &CellValue::Empty, EditContext::default());
        assert_eq!(field.alignment(), Alignment::Leading);
    }
}
