//! Cooperative cancellation for magic searches.
//!
//! The search loop polls a [`StopFlag`] between candidate magics. Raising the
//! flag from any thread makes every search sharing it return
//! [`MagicError::Cancelled`](crate::MagicError::Cancelled) at its next check.
//! A [`StopFlag::child`] also reports stopped once its parent is.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shareable stop signal. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopFlag {
    flag: Arc<AtomicBool>,
    parent: Option<Arc<StopFlag>>,
}

impl StopFlag {
    /// Create a new stop flag (initially not stopped).
    #[must_use]
    pub fn new() -> Self {
        StopFlag::default()
    }

    /// A flag that can be stopped on its own without touching `self`, and
    /// is also stopped whenever `self` is.
    #[must_use]
    pub fn child(&self) -> Self {
        StopFlag {
            flag: Arc::new(AtomicBool::new(false)),
            parent: Some(Arc::new(self.clone())),
        }
    }

    /// Check if this flag or any ancestor is set.
    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
            || self.parent.as_deref().is_some_and(StopFlag::is_stopped)
    }

    /// Ask every search sharing this flag to stop.
    #[inline]
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Clear this flag so the searches can be run again. Ancestors are left
    /// as they are.
    #[inline]
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

impl From<Arc<AtomicBool>> for StopFlag {
    fn from(flag: Arc<AtomicBool>) -> Self {
        StopFlag { flag, parent: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_flag_lifecycle() {
        let flag = StopFlag::new();
        assert!(!flag.is_stopped());

        flag.stop();
        assert!(flag.is_stopped());

        flag.reset();
        assert!(!flag.is_stopped());
    }

    #[test]
    fn test_stop_flag_shared_across_threads() {
        let flag = StopFlag::new();
        let remote = flag.clone();
        std::thread::spawn(move || remote.stop()).join().unwrap();
        assert!(flag.is_stopped());
    }

    #[test]
    fn test_child_follows_parent() {
        let parent = StopFlag::new();
        let child = parent.child();
        assert!(!child.is_stopped());

        parent.stop();
        assert!(child.is_stopped());
        parent.reset();
        assert!(!child.is_stopped());
    }

    #[test]
    fn test_child_stop_does_not_reach_parent() {
        let parent = StopFlag::new();
        let child = parent.child();
        let grandchild = child.child();

        child.stop();
        assert!(child.is_stopped());
        assert!(grandchild.is_stopped());
        assert!(!parent.is_stopped());
    }

    #[test]
    fn test_from_existing_atomic() {
        let raw = Arc::new(AtomicBool::new(true));
        let flag = StopFlag::from(Arc::clone(&raw));
        assert!(flag.is_stopped());
        raw.store(false, Ordering::Relaxed);
        assert!(!flag.is_stopped());
    }
}
