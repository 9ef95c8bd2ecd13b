//! Shared dirty-flag handle.
//!
//! The session hands a clone of its tracker to every inspector the spawner
//! creates, so a value edit at any depth can mark the session dirty. The
//! flag is only ever cleared by the session itself (revert, save).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    changed: Arc<AtomicBool>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session dirty. Idempotent: returns `true` only on the
    /// false -> true transition.
    pub fn mark(&self) -> bool {
        !self.changed.swap(true, Ordering::SeqCst)
    }

    pub fn is_changed(&self) -> bool {
        self.changed.load(Ordering::SeqCst)
    }

    pub(crate) fn reset(&self) {
        self.changed.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_idempotent() {
        let tracker = ChangeTracker::new();
        assert!(!tracker.is_changed());

        assert!(tracker.mark());
        assert!(tracker.is_changed());

        // Subsequent marks are no-ops.
        assert!(!tracker.mark());
        assert!(!tracker.mark());
        assert!(tracker.is_changed());
    }

    #[test]
    fn test_clones_share_state() {
        let tracker = ChangeTracker::new();
        let handle = tracker.clone();

        handle.mark();
        assert!(tracker.is_changed());

        tracker.reset();
        assert!(!handle.is_changed());
    }
}
