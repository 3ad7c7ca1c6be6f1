//! Startup orchestration.
//!
//! Components are built in a fixed order inside one batch. The first
//! constructor that fails aborts the rest of the batch; components built
//! before it stay alive.

use std::fmt;

use crate::error::ComponentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Navigation,
    MenuFilter,
    GalleryFilter,
    Lightbox,
    WhatsApp,
    ScrollAnimations,
    LazyLoading,
    Newsletter,
    PerformanceOptimizer,
}

impl ComponentKind {
    pub const STARTUP_ORDER: [ComponentKind; 9] = [
        ComponentKind::Navigation,
        ComponentKind::MenuFilter,
        ComponentKind::GalleryFilter,
        ComponentKind::Lightbox,
        ComponentKind::WhatsApp,
        ComponentKind::ScrollAnimations,
        ComponentKind::LazyLoading,
        ComponentKind::Newsletter,
        ComponentKind::PerformanceOptimizer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Navigation => "Navigation",
            ComponentKind::MenuFilter => "MenuFilter",
            ComponentKind::GalleryFilter => "GalleryFilter",
            ComponentKind::Lightbox => "Lightbox",
            ComponentKind::WhatsApp => "WhatsAppIntegration",
            ComponentKind::ScrollAnimations => "ScrollAnimations",
            ComponentKind::LazyLoading => "LazyLoading",
            ComponentKind::Newsletter => "Newsletter",
            ComponentKind::PerformanceOptimizer => "PerformanceOptimizer",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
pub struct StartupReport<T> {
    pub built: Vec<(ComponentKind, T)>,
    pub failure: Option<(ComponentKind, ComponentError)>,
}

impl<T> StartupReport<T> {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Components the batch never reached because of an earlier failure.
    pub fn skipped(&self) -> Vec<ComponentKind> {
        let Some((failed, _)) = &self.failure else {
            return Vec::new();
        };
        ComponentKind::STARTUP_ORDER
            .iter()
            .skip_while(|k| **k != *failed)
            .skip(1)
            .copied()
            .collect()
    }
}

/// Runs `build` for every component in startup order, stopping at the first error.
pub fn start_components<T, F>(mut build: F) -> StartupReport<T>
where
    F: FnMut(ComponentKind) -> Result<T, ComponentError>,
{
    let mut built = Vec::with_capacity(ComponentKind::STARTUP_ORDER.len());
    for kind in ComponentKind::STARTUP_ORDER {
        match build(kind) {
            Ok(component) => {
                tracing::debug!(component = kind.name(), "component ready");
                built.push((kind, component));
            }
            Err(e) => {
                tracing::error!(component = kind.name(), error = %e, "component failed to start");
                return StartupReport { built, failure: Some((kind, e)) };
            }
        }
    }
    StartupReport { built, failure: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_components_built_in_order() {
        let report = start_components(|kind| Ok(kind.name()));
        assert!(report.is_complete());
        let names: Vec<&str> = report.built.iter().map(|(_, n)| *n).collect();
        assert_eq!(names.first(), Some(&"Navigation"));
        assert_eq!(names.last(), Some(&"PerformanceOptimizer"));
        assert_eq!(names.len(), 9);
        assert!(report.skipped().is_empty());
    }

    #[test]
    fn test_failure_aborts_rest_of_batch() {
        let mut attempted = Vec::new();
        let report = start_components(|kind| {
            attempted.push(kind);
            if kind == ComponentKind::Lightbox {
                Err(ComponentError::missing("Lightbox", "#lightbox-img"))
            } else {
                Ok(())
            }
        });

        assert!(!report.is_complete());
        assert_eq!(report.built.len(), 3);
        assert_eq!(attempted.last(), Some(&ComponentKind::Lightbox));
        assert_eq!(report.skipped().first(), Some(&ComponentKind::WhatsApp));
        assert_eq!(report.skipped().len(), 5);
    }

    #[test]
    fn test_display_uses_component_name() {
        assert_eq!(ComponentKind::WhatsApp.to_string(), "WhatsAppIntegration");
    }
}
