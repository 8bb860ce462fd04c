//! Logging facilities for Horizon cell editors.
//!
//! Horizon cell editors use the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_cell_editor=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_cell_editor_core::signal";
    /// Thread affinity checks.
    pub const THREAD: &str = "horizon_cell_editor_core::thread";
    /// Edit session lifecycle (begin, commit, cancel).
    pub const SESSION: &str = "horizon_cell_editor::session";
    /// Parse and validation outcomes.
    pub const VALIDATION: &str = "horizon_cell_editor::validation";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_cell_editor::config";
}
