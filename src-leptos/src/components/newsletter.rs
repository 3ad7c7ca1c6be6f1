//! `.newsletter-form` signup with a simulated backend.

use std::rc::Rc;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use maresia_core::newsletter::{button_label, NewsletterController, NewsletterView, StatusMessage, Subscriber};
use maresia_core::{ComponentError, NewsletterError, SiteConfig};
use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement};

use super::status::StatusSlot;
use crate::dom;

const COMPONENT: &str = "Newsletter";

/// Stands in for a mailing-list API: waits, logs, succeeds.
pub struct SimulatedSubscriber {
    delay_ms: u32,
}

#[async_trait(?Send)]
impl Subscriber for SimulatedSubscriber {
    async fn subscribe(&self, email: &str) -> Result<(), NewsletterError> {
        TimeoutFuture::new(self.delay_ms).await;
        log::info!("Newsletter subscription: {email}");
        Ok(())
    }
}

pub struct FormView {
    input: HtmlInputElement,
    button: HtmlButtonElement,
    status: StatusSlot,
}

impl NewsletterView for FormView {
    fn set_pending(&self, pending: bool) {
        self.button.set_disabled(pending);
        self.button.set_text_content(Some(button_label(pending)));
    }

    fn show_message(&self, message: &StatusMessage) {
        self.status.show(message);
    }

    fn clear_input(&self) {
        self.input.set_value("");
    }
}

pub struct Newsletter {
    controller: Rc<NewsletterController<SimulatedSubscriber, FormView>>,
}

impl Newsletter {
    /// `Ok(None)` when the page has no newsletter form.
    pub fn new(config: &SiteConfig) -> Result<Option<Self>, ComponentError> {
        let Some(form) = dom::query(".newsletter-form") else {
            return Ok(None);
        };
        let input = dom::query_in(&form, "input[type=\"email\"]")
            .and_then(dom::cast::<HtmlInputElement>)
            .ok_or_else(|| ComponentError::missing(COMPONENT, "input[type=\"email\"]"))?;
        let button = dom::query_in(&form, "button")
            .and_then(dom::cast::<HtmlButtonElement>)
            .ok_or_else(|| ComponentError::missing(COMPONENT, "button"))?;
        let parent = dom::cast::<HtmlElement>(form.clone())
            .ok_or_else(|| ComponentError::missing(COMPONENT, ".newsletter-form"))?;

        let view = FormView {
            input: input.clone(),
            button,
            status: StatusSlot::mount(parent, config.message_duration),
        };
        let subscriber = SimulatedSubscriber { delay_ms: config.submission_delay };
        let controller = Rc::new(NewsletterController::new(subscriber, view));

        let handler = Rc::clone(&controller);
        dom::listen(&form, "submit", move |event| {
            event.prevent_default();
            let controller = Rc::clone(&handler);
            let email = input.value();
            spawn_local(async move {
                if let Err(e) = controller.submit(&email).await {
                    log::debug!("newsletter: {e}");
                }
            });
        })?;

        Ok(Some(Self { controller }))
    }

    pub fn is_pending(&self) -> bool {
        self.controller.is_pending()
    }
}
