//! One-shot visibility tracking.
//!
//! Mirrors what an `IntersectionObserver` callback does when every target is
//! unobserved after its first intersection: each key fires once, ever.

use std::collections::HashSet;
use std::hash::Hash;

/// Observation options shared with the browser observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserveOptions {
    /// Fade-in trigger: 10% visible, bottom edge pulled in by 50px.
    pub fn fade_in() -> Self {
        Self {
            threshold: 0.1,
            root_margin: format!("0px 0px -{FADE_IN_BOTTOM_INSET}px 0px"),
        }
    }

    /// Lazy images start loading `margin_px` before entering the viewport.
    pub fn lazy(margin_px: u32) -> Self {
        Self { threshold: 0.0, root_margin: format!("{margin_px}px") }
    }

    /// Whether an element showing `ratio` of its area counts as intersecting.
    pub fn triggers(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Pixels trimmed off the viewport bottom before a fade-in can fire.
pub const FADE_IN_BOTTOM_INSET: f64 = 50.0;

/// Elements that receive the fade-in class once scrolled into view.
pub const FADE_IN_SELECTOR: &str = ".cardapio-item, .galeria-item, .depoimento-item, .sobre-item";
pub const FADE_IN_CLASS: &str = "fade-in";

#[derive(Debug)]
pub struct OneShotSet<K> {
    pending: HashSet<K>,
}

impl<K: Eq + Hash + Clone> OneShotSet<K> {
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self { pending: keys.into_iter().collect() }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    /// Process one observer batch. Returns the keys that fire now; they are
    /// no longer watched afterwards.
    pub fn on_entries(&mut self, entries: impl IntoIterator<Item = (K, bool)>) -> Vec<K> {
        entries
            .into_iter()
            .filter(|(_, intersecting)| *intersecting)
            .filter_map(|(key, _)| self.pending.remove(&key).then_some(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_key() {
        let mut set = OneShotSet::new([0usize, 1, 2]);
        assert_eq!(set.on_entries([(0, true), (1, false)]), vec![0]);
        assert_eq!(set.on_entries([(0, true), (1, true)]), vec![1]);
        assert_eq!(set.on_entries([(0, true), (1, true)]), Vec::<usize>::new());
        assert_eq!(set.pending(), 1);
        assert!(set.is_watching(&2));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut set = OneShotSet::new(["hero"]);
        assert!(set.on_entries([("footer", true)]).is_empty());
        assert_eq!(set.pending(), 1);
    }

    #[test]
    fn test_scroll_back_does_not_retrigger() {
        let mut set = OneShotSet::new([7u32]);
        assert_eq!(set.on_entries([(7, true)]), vec![7]);
        assert!(set.on_entries([(7, false)]).is_empty());
        assert!(set.on_entries([(7, true)]).is_empty());
    }

    #[test]
    fn test_options() {
        assert_eq!(ObserveOptions::lazy(50).root_margin, "50px");
        assert_eq!(ObserveOptions::fade_in().threshold, 0.1);
        assert_eq!(ObserveOptions::fade_in().root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_fade_in_triggers_on_partial_overlap() {
        let options = ObserveOptions::fade_in();
        assert!(!options.triggers(0.0));
        assert!(!options.triggers(0.05));
        assert!(options.triggers(0.1));
        assert!(options.triggers(0.3));
        assert!(ObserveOptions::lazy(0).triggers(0.01));
        assert!(!ObserveOptions::lazy(0).triggers(0.0));
    }
}
