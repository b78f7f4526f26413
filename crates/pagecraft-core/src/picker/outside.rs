//! Scoped subscription to "pointer pressed outside the picker" signals.

use std::cell::Cell;
use std::rc::Rc;

/// Host-side source of outside-press signals.
///
/// The host only needs to hit-test pointer presses against open pickers while
/// [`OutsideClickSignal::is_active`] is true. Clones share the same count.
#[derive(Debug, Clone, Default)]
pub struct OutsideClickSignal {
    listeners: Rc<Cell<usize>>,
}

impl OutsideClickSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a subscription; it is released when the guard is dropped.
    pub fn subscribe(&self) -> OutsideClickGuard {
        self.listeners.set(self.listeners.get() + 1);
        OutsideClickGuard {
            listeners: Rc::clone(&self.listeners),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.get()
    }

    pub fn is_active(&self) -> bool {
        self.listener_count() > 0
    }
}

/// A live subscription to outside-press signals.
#[derive(Debug)]
pub struct OutsideClickGuard {
    listeners: Rc<Cell<usize>>,
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        self.listeners.set(self.listeners.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let signal = OutsideClickSignal::new();
        assert!(!signal.is_active());

        let a = signal.subscribe();
        let b = signal.clone().subscribe();
        assert_eq!(signal.listener_count(), 2);

        drop(a);
        assert_eq!(signal.listener_count(), 1);
        drop(b);
        assert!(!signal.is_active());
    }
}
