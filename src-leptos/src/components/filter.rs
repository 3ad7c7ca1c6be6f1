//! Category filter buttons for the menu and the gallery.

use std::cell::RefCell;
use std::rc::Rc;

use maresia_core::filter::{FilterButton, FilterGroup, FilterKind, FilterPlan, FilterTiming};
use maresia_core::{ComponentError, SiteConfig};
use web_sys::{Element, HtmlElement};

use super::status::Announcer;
use crate::dom;

fn selectors(kind: FilterKind) -> (&'static str, &'static str) {
    match kind {
        FilterKind::Menu => (".cardapio .filter-btn", ".cardapio-item"),
        FilterKind::Gallery => (".galeria .filter-btn", ".galeria-item"),
    }
}

pub struct CategoryFilter {
    inner: Rc<Inner>,
}

struct Inner {
    kind: FilterKind,
    buttons: Vec<Element>,
    items: Vec<HtmlElement>,
    group: RefCell<FilterGroup>,
    announcer: Option<Announcer>,
}

impl CategoryFilter {
    pub fn new(
        kind: FilterKind,
        config: &SiteConfig,
        announcer: Option<Announcer>,
    ) -> Result<Self, ComponentError> {
        let (button_selector, item_selector) = selectors(kind);
        let buttons = dom::query_all(button_selector);
        let items: Vec<HtmlElement> =
            dom::query_all(item_selector).into_iter().filter_map(dom::cast).collect();

        let group = FilterGroup::new(
            kind,
            buttons
                .iter()
                .map(|b| FilterButton {
                    filter: b.get_attribute("data-filter").unwrap_or_default(),
                    label: b.text_content().unwrap_or_default(),
                })
                .collect(),
            items.iter().map(|i| i.get_attribute("data-category")).collect(),
            FilterTiming { stagger_step: config.stagger_step, hide_delay: config.hide_delay },
        )
        .with_active(buttons.iter().position(|b| dom::has_class(b, "active")));

        let inner = Rc::new(Inner {
            kind,
            buttons,
            items,
            group: RefCell::new(group),
            announcer: announcer.filter(|_| kind.is_accessible()),
        });

        for (index, button) in inner.buttons.iter().enumerate() {
            let this = Rc::clone(&inner);
            dom::listen(button, "click", move |_| this.select(index))?;
        }

        log::debug!(
            "{}: {} buttons, {} items",
            kind.component_name(),
            inner.buttons.len(),
            inner.items.len()
        );
        Ok(Self { inner })
    }

    /// Show only items of `category` (or everything for `all`).
    pub fn apply_filter(&self, category: &str) {
        let plan = self.inner.group.borrow_mut().apply_filter(category);
        match plan {
            Some(plan) => Inner::execute(&self.inner, plan),
            None => log::warn!("{}: no button for filter {category:?}", self.inner.kind.component_name()),
        }
    }
}

impl Inner {
    fn select(self: &Rc<Self>, index: usize) {
        let plan = self.group.borrow_mut().select(index);
        match plan {
            Ok(plan) => Self::execute(self, plan),
            Err(e) => log::warn!("{e}"),
        }
    }

    fn execute(this: &Rc<Self>, plan: FilterPlan) {
        let accessible = this.kind.is_accessible();

        for transition in &plan.items {
            let Some(item) = this.items.get(transition.index) else {
                continue;
            };
            let generation = plan.generation;
            let owner = Rc::clone(this);
            let item_handle = item.clone();

            if transition.visible {
                dom::set_style(item, "display", "block");
                if accessible {
                    dom::set_attr(item, "aria-hidden", "false");
                }
                dom::after(transition.delay_ms, move || {
                    if owner.group.borrow().is_current(generation) {
                        dom::set_style(&item_handle, "opacity", "1");
                        dom::set_style(&item_handle, "transform", owner.kind.shown_transform());
                    }
                });
            } else {
                dom::set_style(item, "opacity", "0");
                dom::set_style(item, "transform", this.kind.hidden_transform());
                if accessible {
                    dom::set_attr(item, "aria-hidden", "true");
                }
                dom::after(transition.delay_ms, move || {
                    if owner.group.borrow().is_current(generation) {
                        dom::set_style(&item_handle, "display", "none");
                    }
                });
            }
        }

        for (index, button) in this.buttons.iter().enumerate() {
            let active = index == plan.active_button;
            if active {
                dom::add_class(button, "active");
            } else {
                dom::remove_class(button, "active");
            }
            if accessible {
                dom::set_attr(button, "aria-selected", if active { "true" } else { "false" });
            }
        }

        if let (Some(announcer), Some(text)) = (&this.announcer, plan.announcement) {
            announcer.announce(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_are_scoped_per_section() {
        assert_eq!(selectors(FilterKind::Menu), (".cardapio .filter-btn", ".cardapio-item"));
        assert_eq!(selectors(FilterKind::Gallery), (".galeria .filter-btn", ".galeria-item"));
    }
}
