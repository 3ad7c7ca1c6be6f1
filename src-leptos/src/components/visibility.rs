//! One-shot visibility observers: scroll fade-in and lazy image loading.

use std::cell::RefCell;
use std::rc::Rc;

use maresia_core::lazy::{ClassChange, LazyImage, LAZY_SELECTOR};
use maresia_core::observer::{
    ObserveOptions, OneShotSet, FADE_IN_BOTTOM_INSET, FADE_IN_CLASS, FADE_IN_SELECTOR,
};
use maresia_core::{ComponentError, SiteConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use crate::{dom, utils};

fn supports_intersection_observer() -> bool {
    web_sys::window().is_some_and(|w| dom::has_global(&w, "IntersectionObserver"))
}

/// Call `on_visible` once per element, the first time it intersects.
fn observe_once(
    component: &str,
    elements: Vec<Element>,
    options: &ObserveOptions,
    on_visible: impl Fn(&Element) + 'static,
) -> Result<(), ComponentError> {
    let pending = RefCell::new(OneShotSet::new(0..elements.len()));
    let elements = Rc::new(elements);
    let targets = Rc::clone(&elements);

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch: Vec<(usize, bool)> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let index = targets.iter().position(|el| *el == target)?;
                    Some((index, entry.is_intersecting()))
                })
                .collect();
            let fired = pending.borrow_mut().on_entries(batch);
            for element in fired.into_iter().filter_map(|i| targets.get(i)) {
                observer.unobserve(element);
                on_visible(element);
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| ComponentError::dom(component, "IntersectionObserver", dom::js_error(&e)))?;
    callback.forget();

    for element in elements.iter() {
        observer.observe(element);
    }
    Ok(())
}

/// Adds `fade-in` to section items the first time they scroll into view.
pub struct ScrollAnimations;

impl ScrollAnimations {
    pub fn new(config: &SiteConfig) -> Result<Self, ComponentError> {
        let elements = dom::query_all(FADE_IN_SELECTOR);
        if elements.is_empty() {
            return Ok(Self);
        }
        if supports_intersection_observer() {
            observe_once("ScrollAnimations", elements, &ObserveOptions::fade_in(), |el| {
                dom::add_class(el, FADE_IN_CLASS);
            })?;
        } else {
            Self::fallback(elements, config.scroll_throttle)?;
        }
        Ok(Self)
    }

    /// Viewport polling on scroll for browsers without IntersectionObserver.
    fn fallback(elements: Vec<Element>, throttle_ms: u32) -> Result<(), ComponentError> {
        let pending = RefCell::new(OneShotSet::new(0..elements.len()));
        let options = ObserveOptions::fade_in();
        let reveal = move || {
            let batch: Vec<(usize, bool)> = elements
                .iter()
                .enumerate()
                .map(|(i, el)| {
                    let ratio = utils::visible_ratio(el, FADE_IN_BOTTOM_INSET);
                    (i, options.triggers(ratio))
                })
                .collect();
            for i in pending.borrow_mut().on_entries(batch) {
                if let Some(el) = elements.get(i) {
                    dom::add_class(el, FADE_IN_CLASS);
                }
            }
        };
        let mut handler = utils::throttle(throttle_ms, reveal);
        if let Ok(event) = web_sys::Event::new("scroll") {
            handler(event);
        }
        dom::listen(&dom::window()?.into(), "scroll", handler)
    }
}

/// Defers `img[loading=lazy]` work until the image nears the viewport.
pub struct LazyLoading {
    images: Rc<Vec<(HtmlImageElement, RefCell<LazyImage>)>>,
}

impl LazyLoading {
    pub fn new(config: &SiteConfig) -> Result<Self, ComponentError> {
        let images: Vec<(HtmlImageElement, RefCell<LazyImage>)> = dom::query_all(LAZY_SELECTOR)
            .into_iter()
            .filter_map(dom::cast::<HtmlImageElement>)
            .map(|img| (img, RefCell::new(LazyImage::new())))
            .collect();
        let this = Self { images: Rc::new(images) };

        if supports_intersection_observer() {
            let elements = this.images.iter().map(|(img, _)| Element::from(img.clone())).collect();
            let images = Rc::clone(&this.images);
            let options = ObserveOptions::lazy(config.lazy_load_offset);
            observe_once("LazyLoading", elements, &options, move |el| {
                let index = images.iter().position(|(img, _)| AsRef::<Element>::as_ref(img) == el);
                if let Some(index) = index {
                    Self::load_image(&images, index);
                }
            })?;
        } else {
            this.load_all_images();
        }
        Ok(this)
    }

    /// Synchronous path: start every image at once.
    pub fn load_all_images(&self) {
        for index in 0..self.images.len() {
            Self::load_image(&self.images, index);
        }
    }

    fn load_image(images: &Rc<Vec<(HtmlImageElement, RefCell<LazyImage>)>>, index: usize) {
        let Some((img, state)) = images.get(index) else {
            return;
        };
        let Some(change) = state.borrow_mut().start() else {
            return;
        };
        apply(img, change);

        for (event, succeeded) in [("load", true), ("error", false)] {
            let images = Rc::clone(images);
            let result = dom::listen(img, event, move |_| Self::settle(&images, index, succeeded));
            if let Err(e) = result {
                log::warn!("{e}");
            }
        }

        // a cached image may have finished before the listeners were attached
        if img.complete() {
            Self::settle(images, index, img.natural_width() > 0);
        }
    }

    fn settle(images: &[(HtmlImageElement, RefCell<LazyImage>)], index: usize, succeeded: bool) {
        let Some((img, state)) = images.get(index) else {
            return;
        };
        let change = if succeeded { state.borrow_mut().finish() } else { state.borrow_mut().fail() };
        if let Some(change) = change {
            apply(img, change);
        }
    }
}

fn apply(img: &HtmlImageElement, change: ClassChange) {
    if let Some(class) = change.remove {
        dom::remove_class(img, class);
    }
    dom::add_class(img, change.add);
}
