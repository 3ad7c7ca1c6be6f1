//! Preload hints, service worker registration and passive scroll listeners.

use leptos::task::spawn_local;
use maresia_core::{ComponentError, SiteConfig};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlLinkElement;

use crate::dom;

const COMPONENT: &str = "PerformanceOptimizer";
const PASSIVE_EVENTS: [&str; 3] = ["scroll", "touchstart", "touchmove"];

pub struct PerformanceOptimizer;

impl PerformanceOptimizer {
    pub fn new(config: &SiteConfig) -> Result<Self, ComponentError> {
        Self::preload_critical_images(&config.critical_images)?;
        Self::setup_service_worker(&config.service_worker)?;
        Self::optimize_scroll_performance()?;
        Ok(Self)
    }

    fn preload_critical_images(sources: &[String]) -> Result<(), ComponentError> {
        let document = dom::document()?;
        let Some(head) = document.head() else {
            return Ok(());
        };
        for src in sources {
            let link = document
                .create_element("link")
                .ok()
                .and_then(dom::cast::<HtmlLinkElement>)
                .ok_or_else(|| ComponentError::dom(COMPONENT, "createElement", "link"))?;
            link.set_rel("preload");
            link.set_as("image");
            link.set_href(src);
            head.append_child(&link)
                .map_err(|e| ComponentError::dom(COMPONENT, "appendChild", dom::js_error(&e)))?;
        }
        Ok(())
    }

    fn setup_service_worker(script: &str) -> Result<(), ComponentError> {
        let window = dom::window()?;
        let navigator = window.navigator();
        if !dom::has_global(&navigator, "serviceWorker") {
            log::debug!("service workers unsupported");
            return Ok(());
        }

        let script = script.to_string();
        dom::listen(&window, "load", move |_| {
            let promise = navigator.service_worker().register(&script);
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(registration) => log::info!("SW registered: {registration:?}"),
                    Err(e) => log::warn!("SW registration failed: {}", dom::js_error(&e)),
                }
            });
        })
    }

    fn optimize_scroll_performance() -> Result<(), ComponentError> {
        let document = dom::document()?;
        for event in PASSIVE_EVENTS {
            dom::listen_passive(&document, event)?;
        }
        Ok(())
    }
}
