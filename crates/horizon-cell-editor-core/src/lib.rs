//! Core systems for Horizon cell editors.
//!
//! This crate provides the plumbing the cell editing layer is built on:
//!
//! - **Signal/Slot System**: Ordered observer notification where one failing
//!   slot cannot stop the others from running
//! - **Thread Affinity**: Checks that UI-bound objects stay on their thread
//! - **Logging**: `tracing` target names for filtering editor diagnostics
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_cell_editor_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! let report = value_changed.emit(42);
//! assert_eq!(report.invoked, 1);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;
pub mod thread_check;

pub use signal::{ConnectionId, EmitReport, Signal};
pub use thread_check::ThreadAffinity;
