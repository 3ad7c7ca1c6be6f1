//! Navbar: mobile menu toggle, scroll background and scroll-spy links.

use std::cell::RefCell;
use std::rc::Rc;

use maresia_core::navigation::{
    active_section, link_targets, MenuUpdate, NavbarStyle, NavigationState, SectionOffset,
};
use maresia_core::scroll_lock::LockHolder;
use maresia_core::viewport::fragment_target;
use maresia_core::{ComponentError, SiteConfig};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::dom;
use crate::utils::{self, BodyScrollLock};

const COMPONENT: &str = "Navigation";

pub struct Navigation {
    inner: Rc<Inner>,
}

struct Inner {
    navbar: HtmlElement,
    toggle: Option<Element>,
    menu: Option<Element>,
    links: Vec<Element>,
    sections: Vec<Element>,
    state: RefCell<NavigationState>,
    scroll_lock: BodyScrollLock,
    config: SiteConfig,
}

impl Navigation {
    /// `Ok(None)` when the page has no navbar at all.
    pub fn new(config: &SiteConfig, scroll_lock: BodyScrollLock) -> Result<Option<Self>, ComponentError> {
        let toggle = dom::query(".nav-toggle");
        let menu = dom::query(".nav-menu");
        let Some(navbar) = dom::query(".navbar").and_then(dom::cast::<HtmlElement>) else {
            if toggle.is_some() || menu.is_some() {
                return Err(ComponentError::missing(COMPONENT, ".navbar"));
            }
            return Ok(None);
        };
        if toggle.is_some() != menu.is_some() {
            let absent = if toggle.is_none() { ".nav-toggle" } else { ".nav-menu" };
            return Err(ComponentError::missing(COMPONENT, absent));
        }

        let inner = Rc::new(Inner {
            navbar,
            toggle,
            menu,
            links: dom::query_all(".nav-link"),
            sections: dom::query_all("section[id]"),
            state: RefCell::new(NavigationState::new()),
            scroll_lock,
            config: config.clone(),
        });

        inner.setup_event_listeners()?;
        inner.setup_scroll_effect()?;
        inner.setup_active_link()?;
        Ok(Some(Self { inner }))
    }

    pub fn toggle_mobile_menu(&self) {
        self.inner.toggle_mobile_menu();
    }

    pub fn close_mobile_menu(&self) {
        self.inner.close_mobile_menu();
    }
}

impl Inner {
    fn setup_event_listeners(self: &Rc<Self>) -> Result<(), ComponentError> {
        if let Some(toggle) = &self.toggle {
            let this = Rc::clone(self);
            dom::listen(toggle, "click", move |_| this.toggle_mobile_menu())?;
        }

        for link in &self.links {
            let this = Rc::clone(self);
            let href = link.get_attribute("href").unwrap_or_default();
            dom::listen(link, "click", move |event| {
                // external links keep their default navigation
                if let Some(id) = fragment_target(&href) {
                    event.prevent_default();
                    utils::smooth_scroll(id, this.config.scroll_offset);
                    this.close_mobile_menu();
                }
            })?;
        }

        let document = dom::document()?;

        let this = Rc::clone(self);
        dom::listen(&document, "click", move |event| {
            if !dom::contains_target(&this.navbar, &event) {
                this.close_mobile_menu();
            }
        })?;

        let this = Rc::clone(self);
        dom::listen(&document, "keydown", move |event| {
            if event.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
                this.close_mobile_menu();
            }
        })?;
        Ok(())
    }

    fn toggle_mobile_menu(&self) {
        let update = self.state.borrow_mut().toggle();
        self.apply_menu(&update);
    }

    fn close_mobile_menu(&self) {
        let update = self.state.borrow_mut().close();
        if let Some(update) = update {
            self.apply_menu(&update);
        }
    }

    fn apply_menu(&self, update: &MenuUpdate) {
        for element in self.menu.iter().chain(self.toggle.iter()) {
            if update.open {
                dom::add_class(element, "active");
            } else {
                dom::remove_class(element, "active");
            }
        }
        if let Some(toggle) = &self.toggle {
            dom::set_attr(toggle, "aria-expanded", update.aria_expanded);
            dom::set_attr(toggle, "aria-label", update.aria_label);
        }
        if update.open {
            self.scroll_lock.acquire(LockHolder::MobileMenu);
        } else {
            self.scroll_lock.release(LockHolder::MobileMenu);
        }
    }

    fn setup_scroll_effect(self: &Rc<Self>) -> Result<(), ComponentError> {
        let this = Rc::clone(self);
        let handler = utils::throttle(self.config.scroll_throttle, move || this.update_navbar());
        dom::listen(&dom::window()?.into(), "scroll", handler)
    }

    fn update_navbar(&self) {
        let style = NavbarStyle::for_scroll(dom::scroll_y(), self.config.navbar_threshold);
        dom::set_style(&self.navbar, "background", style.background);
        dom::set_style(&self.navbar, "box-shadow", style.box_shadow);
    }

    fn setup_active_link(self: &Rc<Self>) -> Result<(), ComponentError> {
        if self.links.is_empty() || self.sections.is_empty() {
            return Ok(());
        }
        let window = dom::window()?;

        let this = Rc::clone(self);
        let throttled = utils::throttle(self.config.scroll_throttle, move || this.update_active_link());
        dom::listen(&window, "scroll", throttled)?;

        // the throttle can drop the final scroll event; settle once scrolling stops
        let this = Rc::clone(self);
        let settled = utils::debounce(self.config.scroll_settle, move || this.update_active_link());
        dom::listen(&window, "scroll", settled)
    }

    fn update_active_link(&self) {
        let ids: Vec<String> =
            self.sections.iter().map(|s| s.get_attribute("id").unwrap_or_default()).collect();
        let offsets: Vec<SectionOffset<'_>> = self
            .sections
            .iter()
            .zip(&ids)
            .map(|(section, id)| SectionOffset {
                id: id.as_str(),
                top: section.get_bounding_client_rect().top(),
            })
            .collect();
        let current = active_section(&offsets, self.config.active_link_threshold);

        for link in &self.links {
            let href = link.get_attribute("href").unwrap_or_default();
            if link_targets(&href, current) {
                dom::add_class(link, "active");
            } else {
                dom::remove_class(link, "active");
            }
        }
    }
}
