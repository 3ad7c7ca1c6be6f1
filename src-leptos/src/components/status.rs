//! Transient text nodes rendered with Leptos: screen reader announcements and
//! the newsletter status line.

use std::cell::Cell;
use std::rc::Rc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use maresia_core::newsletter::StatusMessage;
use web_sys::HtmlElement;

use crate::dom;

#[component]
fn LiveRegion(messages: RwSignal<Vec<(u64, String)>>) -> impl IntoView {
    view! {
        <For
            each=move || messages.get()
            key=|entry| entry.0
            children=move |(_, text)| {
                view! {
                    <div aria-live="polite" aria-atomic="true" class="sr-only">
                        {text}
                    </div>
                }
            }
        />
    }
}

/// Posts polite live-region messages that disappear after a fixed time.
#[derive(Clone)]
pub struct Announcer {
    messages: RwSignal<Vec<(u64, String)>>,
    next_id: Rc<Cell<u64>>,
    duration_ms: u32,
}

impl Announcer {
    /// Mount the (initially empty) live region at the end of `<body>`.
    pub fn mount(duration_ms: u32) -> Option<Self> {
        let body = dom::body().ok()?;
        let messages = RwSignal::new(Vec::new());
        mount_to(body, move || view! { <LiveRegion messages=messages /> }).forget();
        Some(Self { messages, next_id: Rc::new(Cell::new(0)), duration_ms })
    }

    pub fn announce(&self, text: String) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.messages.update(|m| m.push((id, text)));

        let messages = self.messages;
        dom::after(self.duration_ms, move || {
            messages.update(|m| m.retain(|(entry, _)| *entry != id));
        });
    }
}

#[component]
fn StatusLine(status: RwSignal<Option<(u64, StatusMessage)>>) -> impl IntoView {
    move || {
        status.get().map(|(_, message)| {
            view! {
                <div class={message.kind.class()} role="status">
                    {message.text}
                </div>
            }
        })
    }
}

/// Single status line inside a form; a new message replaces the old one.
#[derive(Clone)]
pub struct StatusSlot {
    status: RwSignal<Option<(u64, StatusMessage)>>,
    next_id: Rc<Cell<u64>>,
    duration_ms: u32,
}

impl StatusSlot {
    pub fn mount(parent: HtmlElement, duration_ms: u32) -> Self {
        let status = RwSignal::new(None);
        mount_to(parent, move || view! { <StatusLine status=status /> }).forget();
        Self { status, next_id: Rc::new(Cell::new(0)), duration_ms }
    }

    pub fn show(&self, message: &StatusMessage) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.status.set(Some((id, message.clone())));

        // only clears if no newer message replaced this one
        let status = self.status;
        dom::after(self.duration_ms, move || {
            if status.get_untracked().is_some_and(|(current, _)| current == id) {
                status.set(None);
            }
        });
    }
}
