//! Optional Google Analytics bridge.
//!
//! The page may or may not load `gtag.js`; every call checks for the global
//! first and degrades to a console log.

use maresia_core::whatsapp::AnalyticsEvent;
use wasm_bindgen::prelude::*;

use crate::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = gtag, catch)]
    fn gtag_event(command: &str, action: &str, params: JsValue) -> Result<(), JsValue>;
}

/// Report `event` to `gtag` when it is present on the page.
pub fn track(event: &AnalyticsEvent) {
    log::info!("{}: {}", event.action, event.event_label);

    let Some(window) = web_sys::window() else {
        return;
    };
    if !dom::has_global(&window, "gtag") {
        return;
    }

    let params = match serde_wasm_bindgen::to_value(event) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Failed to serialize analytics event: {}", e);
            return;
        }
    };
    if let Err(e) = gtag_event("event", event.action, params) {
        log::warn!("gtag call failed: {}", dom::js_error(&e));
    }
}
