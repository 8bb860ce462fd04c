//! Signal/slot system for Horizon cell editors.
//!
//! This module provides a type-safe, Qt-inspired signal/slot mechanism used by
//! editors to notify observers. Signals are emitted when something happens
//! (a validation failure, a committed edit), and connected slots (callbacks)
//! are invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - An observable notification point
//! - [`ConnectionId`] - Handle for removing one connection
//! - [`EmitReport`] - What happened during one emission
//!
//! # Delivery Guarantees
//!
//! - Slots run synchronously on the emitting thread, in the order they were
//!   connected. Reusing a freed connection slot never reorders delivery.
//! - Each slot runs at most once per emission. A slot disconnected by an
//!   earlier slot of the same emission is skipped.
//! - A panicking slot is contained: the panic is logged, counted in the
//!   [`EmitReport`], and the remaining slots still run. This relies on
//!   unwinding; builds with `panic = "abort"` cannot contain slot panics.
//!
//! # Example
//!
//! ```
//! use horizon_cell_editor_core::Signal;
//!
//! let committed = Signal::<(usize, usize)>::new();
//! let id = committed.connect(|(row, column)| {
//!     println!("cell ({row}, {column}) committed");
//! });
//!
//! let report = committed.emit((3, 1));
//! assert_eq!(report.invoked, 1);
//!
//! assert!(committed.disconnect(id));
//! assert_eq!(committed.emit((3, 1)).invoked, 0);
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// Identifies one connection on one signal.
    ///
    /// Pass it to [`Signal::disconnect`]. Ids of removed connections are never
    /// handed out again by the same signal.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Connection storage. `order` holds every live key exactly once, oldest first.
struct Connections<Args> {
    slots: SlotMap<ConnectionId, Slot<Args>>,
    order: Vec<ConnectionId>,
}

/// The outcome of a single [`Signal::emit`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitReport {
    /// Number of slots that were invoked, including ones that panicked.
    pub invoked: usize,
    /// Number of invoked slots that panicked.
    pub panicked: usize,
}

impl EmitReport {
    /// Returns `true` if every invoked slot returned normally.
    pub fn is_clean(&self) -> bool {
        self.panicked == 0
    }
}

/// An ordered list of callbacks notified together.
///
/// Slots receive `&Args`; use `()` when there is nothing to pass and a tuple
/// for several values.
///
/// # Thread Safety
///
/// `Signal<Args>` is `Send + Sync`. Slots always run on the thread that calls
/// [`emit`](Self::emit); there is no queued delivery.
pub struct Signal<Args> {
    connections: Mutex<Connections<Args>>,
    blocked: AtomicBool,
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
static_assertions::assert_impl_all!(Signal<String>: Send, Sync);

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Creates a signal with nothing connected.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(Connections {
                slots: SlotMap::with_key(),
                order: Vec::new(),
            }),
            blocked: AtomicBool::new(false),
        }
    }

    /// Appends `slot` after every existing connection.
    ///
    /// Connecting equal closures twice yields two independent connections.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut connections = self.connections.lock();
        let id = connections.slots.insert(Arc::new(slot));
        connections.order.push(id);
        id
    }

    /// Removes one connection. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let mut connections = self.connections.lock();
        if connections.slots.remove(id).is_none() {
            return false;
        }
        connections.order.retain(|&existing| existing != id);
        true
    }

    /// Removes every connection.
    pub fn disconnect_all(&self) {
        let mut connections = self.connections.lock();
        connections.slots.clear();
        connections.order.clear();
    }

    /// Returns `true` if `id` refers to a live connection.
    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.connections.lock().slots.contains_key(id)
    }

    /// Number of live connections.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().slots.len()
    }

    /// While blocked, [`emit`](Self::emit) delivers nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Returns `true` while blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// The connection list is snapshotted and the lock released before any
    /// slot runs, so slots may connect or disconnect freely. Slots connected
    /// during the emission are not invoked by it.
    #[tracing::instrument(skip_all, target = "horizon_cell_editor_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) -> EmitReport {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return EmitReport::default();
        }

        let snapshot: Vec<(ConnectionId, Slot<Args>)> = {
            let connections = self.connections.lock();
            connections
                .order
                .iter()
                .filter_map(|&id| connections.slots.get(id).map(|slot| (id, slot.clone())))
                .collect()
        };
        tracing::trace!(target: targets::SIGNAL, connection_count = snapshot.len(), "emitting signal");

        let mut report = EmitReport::default();
        for (id, slot) in snapshot {
            if !self.is_connected(id) {
                continue;
            }
            report.invoked += 1;
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| slot(&args))) {
                report.panicked += 1;
                tracing::warn!(
                    target: targets::SIGNAL,
                    panic = panic_message(payload.as_ref()),
                    "slot panicked during emit, continuing with remaining slots"
                );
            }
        }
        report
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "<non-string panic payload>"
    }
}
