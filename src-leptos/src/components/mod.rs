//! Page components, one per interactive feature

mod filter;
mod lightbox;
mod navigation;
mod newsletter;
mod performance;
mod status;
mod visibility;
mod whatsapp;

pub use filter::CategoryFilter;
pub use lightbox::Lightbox;
pub use navigation::Navigation;
pub use newsletter::Newsletter;
pub use performance::PerformanceOptimizer;
pub use status::{Announcer, StatusSlot};
pub use visibility::{LazyLoading, ScrollAnimations};
pub use whatsapp::WhatsAppIntegration;
