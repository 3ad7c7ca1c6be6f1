//! Typed error definitions for the site components.
//!
//! Every error is:
//!
//! - **Serializable** so it can cross the wasm boundary as a `JsValue`
//! - **Displayable** for console logging
//! - **Matchable** so callers can branch on the failure kind

mod component;
mod config;
mod newsletter;

pub use component::ComponentError;
pub use config::ConfigError;
pub use newsletter::NewsletterError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for anything that can fail while the site boots or runs.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum SiteError {
    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Wraps a component wiring error
    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    /// Wraps a newsletter submission error
    #[error("Newsletter error: {0}")]
    Newsletter(#[from] NewsletterError),
}

/// Standard Result type using SiteError.
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = SiteError::Component(ComponentError::MissingElement {
            component: "Lightbox".to_string(),
            selector: "#lightbox-img".to_string(),
        });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Component"));
        assert!(json.contains("#lightbox-img"));

        let deserialized: SiteError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ValidationError {
            field: "whatsappNumber".to_string(),
            message: "needs at least 8 digits".to_string(),
        };

        let msg = format!("{}", SiteError::from(err));
        assert!(msg.contains("whatsappNumber"));
        assert!(msg.contains("8 digits"));
    }
}
