//! UI thread ownership checks.
//!
//! Cell editors belong to the UI thread: every call into an editor must be
//! made on the thread that created it. Hosts with multi-threaded dispatch must
//! marshal calls onto that thread themselves; [`ThreadAffinity`] only detects
//! violations.
//!
//! ```
//! use horizon_cell_editor_core::thread_check::ThreadAffinity;
//!
//! struct Counter {
//!     affinity: ThreadAffinity,
//!     value: std::cell::Cell<i32>,
//! }
//!
//! impl Counter {
//!     fn bump(&self) {
//!         self.affinity.debug_assert_same_thread();
//!         self.value.set(self.value.get() + 1);
//!     }
//! }
//!
//! let counter = Counter {
//!     affinity: ThreadAffinity::current(),
//!     value: std::cell::Cell::new(0),
//! };
//! counter.bump();
//! ```

use std::thread::{self, ThreadId};

use crate::logging::targets;

const DEFAULT_VIOLATION: &str = "cell editor used off its UI thread";

/// The owning thread of an editor or component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    owner: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Bind to the calling thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            owner: thread::current().id(),
        }
    }

    /// The owning thread.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.owner
    }

    /// Returns `true` when called on the owning thread.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Panic unless called on the owning thread, in every build profile.
    #[inline]
    pub fn assert_same_thread(&self) {
        self.assert_same_thread_with_msg(DEFAULT_VIOLATION)
    }

    /// Like [`assert_same_thread`](Self::assert_same_thread), with `msg` at
    /// the head of the panic message.
    pub fn assert_same_thread_with_msg(&self, msg: &str) {
        if !self.is_same_thread() {
            self.panic_wrong_thread(msg);
        }
    }

    /// [`assert_same_thread`](Self::assert_same_thread) in debug builds only.
    #[inline]
    pub fn debug_assert_same_thread(&self) {
        #[cfg(debug_assertions)]
        self.assert_same_thread();
    }

    #[cold]
    #[inline(never)]
    fn panic_wrong_thread(&self, msg: &str) -> ! {
        let caller = thread::current();
        let caller_name = caller.name().unwrap_or("<unnamed>");

        tracing::error!(
            target: targets::THREAD,
            owner = ?self.owner,
            caller = ?caller.id(),
            caller_name,
            "{msg}"
        );
        panic!(
            "{msg}: owned by {:?}, called from \"{caller_name}\" ({:?}); \
             marshal the call onto the owning UI thread",
            self.owner,
            caller.id()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_thread_passes_checks() {
        let affinity = ThreadAffinity::default();
        assert_eq!(affinity.thread_id(), thread::current().id());
        assert!(affinity.is_same_thread());
        affinity.assert_same_thread();
        affinity.debug_assert_same_thread();
    }

    #[test]
    fn test_other_thread_panics_with_message() {
        let affinity = ThreadAffinity::current();

        let payload = thread::Builder::new()
            .name("worker".into())
            .spawn(move || affinity.assert_same_thread_with_msg("commit from worker"))
            .expect("spawn worker")
            .join()
            .expect_err("worker should panic");
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_default();
        assert!(message.starts_with("commit from worker"), "{message}");
        assert!(message.contains("\"worker\""), "{message}");
    }

    #[test]
    fn test_copies_share_owner() {
        let affinity = ThreadAffinity::current();
        let copy = affinity;
        assert_eq!(affinity, copy);
        assert_ne!(
            thread::spawn(ThreadAffinity::current).join().unwrap(),
            affinity
        );
    }
}
