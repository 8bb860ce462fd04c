//! Validation failure observers.

use std::sync::Arc;

use horizon_cell_editor_core::{ConnectionId, EmitReport, Signal};

/// Notified when a commit attempt is rejected.
///
/// The callback carries no payload. Listeners that need details query the
/// editor (for example [`ValidatingCellEditor::last_rejection`](crate::ValidatingCellEditor::last_rejection)).
pub trait ValidationErrorListener: Send + Sync {
    /// Called once per rejected commit attempt.
    fn validation_failed(&self);
}

impl<F> ValidationErrorListener for F
where
    F: Fn() + Send + Sync,
{
    fn validation_failed(&self) {
        self()
    }
}

/// Ordered listener registrations of one editor.
///
/// The same handle may be registered more than once; each registration is
/// notified separately. The registry holds a clone of each handle but does not
/// otherwise manage the listener's lifetime.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    failed: Signal<()>,
    handles: Vec<(ConnectionId, Arc<dyn ValidationErrorListener>)>,
}

impl ListenerRegistry {
    pub(crate) fn add(&mut self, listener: Arc<dyn ValidationErrorListener>) -> ConnectionId {
        let target = Arc::clone(&listener);
        let id = self.failed.connect(move |_| target.validation_failed());
        self.handles.push((id, listener));
        id
    }

    /// Removes the oldest registration of `listener`.
    pub(crate) fn remove(&mut self, listener: &Arc<dyn ValidationErrorListener>) -> bool {
        let position = self
            .handles
            .iter()
            .position(|(_, handle)| std::ptr::addr_eq(Arc::as_ptr(handle), Arc::as_ptr(listener)));
        match position {
            Some(index) => {
                let (id, _) = self.handles.remove(index);
                self.failed.disconnect(id)
            }
            None => false,
        }
    }

    pub(crate) fn remove_by_id(&mut self, id: ConnectionId) -> bool {
        let before = self.handles.len();
        self.handles.retain(|(existing, _)| *existing != id);
        before != self.handles.len() && self.failed.disconnect(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }

    pub(crate) fn notify(&self) -> EmitReport {
        self.failed.emit(())
    }
}
