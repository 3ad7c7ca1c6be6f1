//! Thin, typed wrappers over the web-sys calls every component needs.
//!
//! Lookups never fail hard: a selector that matches nothing yields `None` or
//! an empty list and the caller decides whether that is an error.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use maresia_core::ComponentError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Result<Window, ComponentError> {
    web_sys::window().ok_or_else(|| ComponentError::missing("App", "window"))
}

pub fn document() -> Result<Document, ComponentError> {
    window()?.document().ok_or_else(|| ComponentError::missing("App", "document"))
}

pub fn body() -> Result<HtmlElement, ComponentError> {
    document()?.body().ok_or_else(|| ComponentError::missing("App", "body"))
}

/// Best-effort string for a thrown JS value.
pub fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// First element matching `selector` in the document.
pub fn query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok().flatten()
}

/// Every element matching `selector` in the document, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            log::warn!("invalid selector {selector}: {}", js_error(&e));
            Vec::new()
        }
    }
}

/// First descendant of `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Downcast to a concrete element type, `None` on mismatch.
pub fn cast<T: JsCast>(element: Element) -> Option<T> {
    element.dyn_into::<T>().ok()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("style {property}={value} rejected: {}", js_error(&e));
    }
}

pub fn style(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap_or_default()
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        log::warn!("attribute {name} rejected: {}", js_error(&e));
    }
}

pub fn add_class(element: &Element, class: &str) {
    drop(element.class_list().add_1(class));
}

pub fn remove_class(element: &Element, class: &str) {
    drop(element.class_list().remove_1(class));
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Attach `handler` for the page lifetime.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), ComponentError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| ComponentError::dom("App", "addEventListener", js_error(&e)))?;
    closure.forget();
    Ok(())
}

/// Attach a no-op passive listener, letting the browser scroll without
/// waiting on script.
pub fn listen_passive(target: &EventTarget, event: &str) -> Result<(), ComponentError> {
    let closure = Closure::<dyn FnMut(Event)>::new(|_: Event| {});
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| ComponentError::dom("PerformanceOptimizer", "addEventListener", js_error(&e)))?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        f();
    });
}

/// Milliseconds since navigation start.
pub fn now_ms() -> f64 {
    web_sys::window().and_then(|w| w.performance()).map(|p| p.now()).unwrap_or_default()
}

pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or_default()
}

/// Whether a global (e.g. `IntersectionObserver`) exists on `target`.
pub fn has_global(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Whether `element` is `node` or one of its ancestors.
pub fn contains_target(element: &Element, event: &Event) -> bool {
    let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    element.contains(target.as_ref())
}
