//! Site-wide configuration.
//!
//! The page may embed a JSON object overriding any subset of these values;
//! everything missing falls back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SiteError};
use crate::whatsapp::normalize_phone;

/// Hero image fetched ahead of the stylesheet.
pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=1920&h=1080&fit=crop";

/// Read-only configuration handed to every component at construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// WhatsApp number in any human format; non-digits are stripped
    pub whatsapp_number: String,
    /// Base animation delay in milliseconds. Parsed but not read by any
    /// component.
    pub animation_delay: u32,
    /// Pixels kept clear above a smooth-scroll target (fixed navbar height)
    pub scroll_offset: f64,
    /// Lazy-load root margin in pixels
    pub lazy_load_offset: u32,
    /// Per-item stagger when revealing filtered items (ms)
    pub stagger_step: u32,
    /// Delay before a hidden item is collapsed (ms)
    pub hide_delay: u32,
    /// Lifetime of a screen reader announcement (ms)
    pub announce_duration: u32,
    /// Lifetime of a newsletter status message (ms)
    pub message_duration: u32,
    /// Simulated newsletter network latency (ms)
    pub submission_delay: u32,
    /// Scroll position past which the navbar goes opaque (px)
    pub navbar_threshold: f64,
    /// Distance from the viewport top at which a section becomes current (px)
    pub active_link_threshold: f64,
    /// Minimum interval between scroll handler runs (ms)
    pub scroll_throttle: u32,
    /// Quiet period after which a trailing scroll update runs (ms)
    pub scroll_settle: u32,
    /// Images preloaded at startup
    pub critical_images: Vec<String>,
    /// Service worker script path
    pub service_worker: String,
}

impl SiteConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self {
            whatsapp_number: "5511999999999".to_string(),
            animation_delay: 100,
            scroll_offset: 80.0,
            lazy_load_offset: 50,
            stagger_step: 50,
            hide_delay: 300,
            announce_duration: 1000,
            message_duration: 5000,
            submission_delay: 1000,
            navbar_threshold: 100.0,
            active_link_threshold: 100.0,
            scroll_throttle: 10,
            scroll_settle: 150,
            critical_images: vec![HERO_IMAGE.to_string()],
            service_worker: "/sw.js".to_string(),
        }
    }

    /// Parse an embedded JSON override and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values a component cannot work around.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let digits = normalize_phone(&self.whatsapp_number);
        if digits.len() < 8 {
            return Err(ConfigError::invalid(
                "whatsappNumber",
                format!("needs at least 8 digits, got {}", digits.len()),
            ));
        }
        if self.message_duration == 0 {
            return Err(ConfigError::invalid("messageDuration", "must be greater than zero"));
        }
        if self.announce_duration == 0 {
            return Err(ConfigError::invalid("announceDuration", "must be greater than zero"));
        }
        if !self.scroll_offset.is_finite() || self.scroll_offset < 0.0 {
            return Err(ConfigError::invalid("scrollOffset", "must be a non-negative number"));
        }
        if !self.service_worker.starts_with('/') {
            return Err(ConfigError::invalid(
                "serviceWorker",
                format!("must be an absolute path, got {:?}", self.service_worker),
            ));
        }
        Ok(())
    }

    /// Config from the page's embedded JSON, if any. No script means defaults.
    pub fn from_embedded(json: Option<&str>) -> crate::Result<Self> {
        match json.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Self::from_json(json).map_err(SiteError::from),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.whatsapp_number, "5511999999999");
        assert_eq!(config.lazy_load_offset, 50);
        assert_eq!(config.critical_images, vec![HERO_IMAGE.to_string()]);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{"whatsappNumber": "+55 (21) 98888-7777", "hideDelay": 250}"#)
                .unwrap();
        assert_eq!(config.whatsapp_number, "+55 (21) 98888-7777");
        assert_eq!(config.hide_delay, 250);
        assert_eq!(config.stagger_step, 50);
        assert_eq!(config.service_worker, "/sw.js");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_short_number_rejected() {
        let err = SiteConfig::from_json(r#"{"whatsappNumber": "12-34"}"#).unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "whatsappNumber"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_relative_worker_path_rejected() {
        let err = SiteConfig::from_json(r#"{"serviceWorker": "sw.js"}"#).unwrap_err();
        assert!(err.to_string().contains("serviceWorker"));
    }

    #[test]
    fn test_embedded_config() {
        assert_eq!(SiteConfig::from_embedded(None).unwrap(), SiteConfig::default());
        assert_eq!(SiteConfig::from_embedded(Some("  \n ")).unwrap(), SiteConfig::default());
        let config = SiteConfig::from_embedded(Some(r#"{"scrollOffset": 64}"#)).unwrap();
        assert_eq!(config.scroll_offset, 64.0);
    }

    #[test]
    fn test_embedded_config_error_is_site_error() {
        let err = SiteConfig::from_embedded(Some("{ not json")).unwrap_err();
        assert!(matches!(err, SiteError::Config(ConfigError::ParseError { .. })));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
