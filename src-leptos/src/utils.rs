//! Shared helpers: rate-limited handlers, smooth scrolling, visibility checks
//! and the body scroll lock.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use maresia_core::scroll_lock::{LockHolder, OverflowChange, ScrollLock};
use maresia_core::timing::{Debounce, Throttle};
use maresia_core::viewport::{self, Rect, Viewport};
use web_sys::{Element, Event, ScrollBehavior, ScrollToOptions};

use crate::dom;

/// Wrap `f` so it runs at most once per `limit_ms` (leading edge).
pub fn throttle(limit_ms: u32, mut f: impl FnMut() + 'static) -> impl FnMut(Event) + 'static {
    let mut gate = Throttle::new(limit_ms);
    move |_| {
        if gate.try_fire(dom::now_ms()) {
            f();
        }
    }
}

/// Wrap `f` so it runs once, `wait_ms` after the last call.
pub fn debounce(wait_ms: u32, f: impl Fn() + 'static) -> impl FnMut(Event) + 'static {
    let gate = Rc::new(RefCell::new(Debounce::<Timeout>::new(wait_ms)));
    let f = Rc::new(f);
    move |_| {
        let timer_gate = Rc::clone(&gate);
        let f = Rc::clone(&f);
        let replaced = gate.borrow_mut().schedule(|ticket| {
            Timeout::new(wait_ms, move || {
                if timer_gate.borrow().is_current(ticket) {
                    (*f)();
                }
            })
        });
        if let Some(previous) = replaced {
            drop(previous.cancel());
        }
    }
}

/// Smoothly scroll so the element with `id` sits `offset` px below the top.
/// Does nothing when the id is not on the page.
pub fn smooth_scroll(id: &str, offset: f64) {
    let Some(element) = dom::by_id(id) else {
        log::debug!("smooth scroll target #{id} not found");
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let top = viewport::scroll_target(
        element.get_bounding_client_rect().top(),
        window.page_y_offset().unwrap_or_default(),
        offset,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect { top: r.top(), left: r.left(), bottom: r.bottom(), right: r.right() }
}

fn viewport_size() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport { width, height })
}

/// Fraction of `element` currently on screen; see [`viewport::visible_ratio`].
pub fn visible_ratio(element: &Element, bottom_inset: f64) -> f64 {
    viewport_size().map_or(0.0, |vp| viewport::visible_ratio(rect_of(element), vp, bottom_inset))
}

/// `document.body.style.overflow`, shared by every component that freezes
/// page scrolling.
#[derive(Clone, Default)]
pub struct BodyScrollLock {
    state: Rc<RefCell<ScrollLock>>,
}

impl BodyScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, holder: LockHolder) {
        let Ok(body) = dom::body() else {
            return;
        };
        let current = dom::style(&body, "overflow");
        let change = self.state.borrow_mut().acquire(holder, &current);
        Self::apply(&body, change);
    }

    pub fn release(&self, holder: LockHolder) {
        let Ok(body) = dom::body() else {
            return;
        };
        let change = self.state.borrow_mut().release(holder);
        Self::apply(&body, change);
    }

    fn apply(body: &web_sys::HtmlElement, change: OverflowChange) {
        match change {
            OverflowChange::Lock => dom::set_style(body, "overflow", "hidden"),
            OverflowChange::Restore(previous) if previous.is_empty() => {
                drop(body.style().remove_property("overflow"));
            }
            OverflowChange::Restore(previous) => dom::set_style(body, "overflow", &previous),
            OverflowChange::Unchanged => {}
        }
    }
}
