//! Load state of a deferred image.

pub const LAZY_SELECTOR: &str = "img[loading=\"lazy\"]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    /// Marker class on the `<img>`; none before loading starts.
    pub fn class(self) -> Option<&'static str> {
        match self {
            LoadState::Unloaded => None,
            LoadState::Loading => Some("loading"),
            LoadState::Loaded => Some("loaded"),
            LoadState::Failed => Some("error"),
        }
    }

    pub fn is_settled(self) -> bool {
        matches!(self, LoadState::Loaded | LoadState::Failed)
    }
}

/// A class swap the browser layer has to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassChange {
    pub remove: Option<&'static str>,
    pub add: &'static str,
}

#[derive(Debug, Default)]
pub struct LazyImage {
    state: LoadState,
}

impl LazyImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Unloaded -> Loading. `None` if loading already started.
    pub fn start(&mut self) -> Option<ClassChange> {
        self.transition(LoadState::Unloaded, LoadState::Loading)
    }

    /// Loading -> Loaded, only if not already settled.
    pub fn finish(&mut self) -> Option<ClassChange> {
        self.transition(LoadState::Loading, LoadState::Loaded)
    }

    /// Loading -> Failed, only if not already settled.
    pub fn fail(&mut self) -> Option<ClassChange> {
        self.transition(LoadState::Loading, LoadState::Failed)
    }

    fn transition(&mut self, from: LoadState, to: LoadState) -> Option<ClassChange> {
        if self.state != from {
            return None;
        }
        let remove = from.class();
        self.state = to;
        to.class().map(|add| ClassChange { remove, add })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_path() {
        let mut image = LazyImage::new();
        assert_eq!(image.start(), Some(ClassChange { remove: None, add: "loading" }));
        assert_eq!(image.finish(), Some(ClassChange { remove: Some("loading"), add: "loaded" }));
        assert_eq!(image.state(), LoadState::Loaded);
    }

    #[test]
    fn test_error_after_load_is_ignored() {
        let mut image = LazyImage::new();
        image.start();
        image.finish();
        assert_eq!(image.fail(), None);
        assert_eq!(image.state(), LoadState::Loaded);
    }

    #[test]
    fn test_load_after_error_is_ignored() {
        let mut image = LazyImage::new();
        image.start();
        assert_eq!(image.fail(), Some(ClassChange { remove: Some("loading"), add: "error" }));
        assert_eq!(image.finish(), None);
        assert!(image.state().is_settled());
    }

    #[test]
    fn test_settle_requires_start() {
        let mut image = LazyImage::new();
        assert_eq!(image.finish(), None);
        assert_eq!(image.fail(), None);
        assert_eq!(image.state(), LoadState::Unloaded);
    }

    #[test]
    fn test_start_is_one_shot() {
        let mut image = LazyImage::new();
        assert!(image.start().is_some());
        assert!(image.start().is_none());
    }
}
