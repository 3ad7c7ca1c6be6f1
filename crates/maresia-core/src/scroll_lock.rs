//! Body scroll lock shared by the mobile menu and the lightbox.
//!
//! Each holder locks independently; `overflow: hidden` stays on the body while
//! any holder is active, and the value that was there before the first lock
//! is restored when the last one releases.

/// Components that can freeze page scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockHolder {
    MobileMenu,
    Lightbox,
}

/// What the caller must write to `document.body.style.overflow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverflowChange {
    /// Set `overflow: hidden`
    Lock,
    /// Restore the saved value (empty string removes the inline property)
    Restore(String),
    /// Nothing to do
    Unchanged,
}

#[derive(Debug, Default)]
pub struct ScrollLock {
    holders: Vec<LockHolder>,
    saved_overflow: Option<String>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    /// `current_overflow` is the body's inline overflow before this call.
    pub fn acquire(&mut self, holder: LockHolder, current_overflow: &str) -> OverflowChange {
        if self.holders.contains(&holder) {
            return OverflowChange::Unchanged;
        }
        let first = self.holders.is_empty();
        self.holders.push(holder);
        if first {
            self.saved_overflow = Some(current_overflow.to_string());
            OverflowChange::Lock
        } else {
            OverflowChange::Unchanged
        }
    }

    pub fn release(&mut self, holder: LockHolder) -> OverflowChange {
        let Some(pos) = self.holders.iter().position(|h| *h == holder) else {
            return OverflowChange::Unchanged;
        };
        self.holders.remove(pos);
        if self.holders.is_empty() {
            OverflowChange::Restore(self.saved_overflow.take().unwrap_or_default())
        } else {
            OverflowChange::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_then_release_restores_previous_value() {
        let mut lock = ScrollLock::new();
        assert_eq!(lock.acquire(LockHolder::MobileMenu, "auto"), OverflowChange::Lock);
        assert!(lock.is_locked());
        assert_eq!(
            lock.release(LockHolder::MobileMenu),
            OverflowChange::Restore("auto".to_string())
        );
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_overlapping_holders_keep_lock() {
        let mut lock = ScrollLock::new();
        assert_eq!(lock.acquire(LockHolder::MobileMenu, ""), OverflowChange::Lock);
        assert_eq!(lock.acquire(LockHolder::Lightbox, "hidden"), OverflowChange::Unchanged);

        assert_eq!(lock.release(LockHolder::MobileMenu), OverflowChange::Unchanged);
        assert!(lock.is_locked());
        assert_eq!(lock.release(LockHolder::Lightbox), OverflowChange::Restore(String::new()));
    }

    #[test]
    fn test_release_without_acquire_is_noop() {
        let mut lock = ScrollLock::new();
        assert_eq!(lock.release(LockHolder::Lightbox), OverflowChange::Unchanged);
    }

    #[test]
    fn test_double_acquire_is_idempotent() {
        let mut lock = ScrollLock::new();
        lock.acquire(LockHolder::Lightbox, "scroll");
        assert_eq!(lock.acquire(LockHolder::Lightbox, "hidden"), OverflowChange::Unchanged);
        assert_eq!(
            lock.release(LockHolder::Lightbox),
            OverflowChange::Restore("scroll".to_string())
        );
    }
}
