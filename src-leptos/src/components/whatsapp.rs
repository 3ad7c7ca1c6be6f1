//! `.whatsapp-btn` click handling.

use maresia_core::whatsapp::{deep_link, message_for, AnalyticsEvent};
use maresia_core::{ComponentError, SiteConfig};

use crate::{analytics, dom};

const COMPONENT: &str = "WhatsAppIntegration";

#[derive(Clone)]
pub struct WhatsAppIntegration {
    number: String,
}

impl WhatsAppIntegration {
    pub fn new(config: &SiteConfig) -> Result<Self, ComponentError> {
        let this = Self { number: config.whatsapp_number.clone() };

        for button in dom::query_all(".whatsapp-btn") {
            let handler = this.clone();
            let target = button.clone();
            dom::listen(&button, "click", move |event| {
                event.prevent_default();
                // data-message may change after startup
                let data_message = target.get_attribute("data-message");
                if let Err(e) = handler.send(message_for(data_message.as_deref())) {
                    log::error!("{e}");
                }
            })?;
        }
        Ok(this)
    }

    /// Open the chat in a new browsing context with `message` prefilled.
    pub fn send(&self, message: &str) -> Result<(), ComponentError> {
        let url = deep_link(&self.number, message);
        dom::window()?
            .open_with_url_and_target(&url, "_blank")
            .map_err(|e| ComponentError::dom(COMPONENT, "window.open", dom::js_error(&e)))?;
        analytics::track(&AnalyticsEvent::whatsapp_click(message));
        Ok(())
    }
}
