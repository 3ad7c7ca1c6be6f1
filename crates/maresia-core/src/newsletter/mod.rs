//! Newsletter signup flow.
//!
//! [`NewsletterController`] drives validation, the pending state and the
//! status message through two seams: a [`Subscriber`] that performs the
//! signup and a [`NewsletterView`] that owns the form widgets.

#[cfg(test)]
mod tests;

use std::cell::Cell;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::error::NewsletterError;

pub const INVALID_EMAIL_TEXT: &str = "Por favor, insira um e-mail válido.";
pub const SUCCESS_TEXT: &str = "Obrigado! Você foi inscrito com sucesso.";
pub const FAILURE_TEXT: &str = "Erro ao inscrever. Tente novamente.";
pub const IDLE_LABEL: &str = "Inscrever";
pub const PENDING_LABEL: &str = "Inscrevendo...";

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Permissive syntax check: something, `@`, something, `.`, something.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

pub fn button_label(pending: bool) -> &'static str {
    if pending {
        PENDING_LABEL
    } else {
        IDLE_LABEL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "newsletter-message success",
            MessageKind::Error => "newsletter-message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: &'static str,
}

impl StatusMessage {
    pub const INVALID_EMAIL: Self = Self { kind: MessageKind::Error, text: INVALID_EMAIL_TEXT };
    pub const SUBSCRIBED: Self = Self { kind: MessageKind::Success, text: SUCCESS_TEXT };
    pub const FAILED: Self = Self { kind: MessageKind::Error, text: FAILURE_TEXT };
}

/// Performs the actual signup.
#[async_trait(?Send)]
pub trait Subscriber {
    async fn subscribe(&self, email: &str) -> Result<(), NewsletterError>;
}

/// Form widgets the controller writes to.
pub trait NewsletterView {
    /// Disable/enable the submit button and swap its label.
    fn set_pending(&self, pending: bool);
    /// Replace any visible status message with this one.
    fn show_message(&self, message: &StatusMessage);
    fn clear_input(&self);
}

pub struct NewsletterController<S, V> {
    subscriber: S,
    view: V,
    pending: Cell<bool>,
}

impl<S: Subscriber, V: NewsletterView> NewsletterController<S, V> {
    pub fn new(subscriber: S, view: V) -> Self {
        Self { subscriber, view, pending: Cell::new(false) }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handle a form submit with the raw input value.
    pub async fn submit(&self, raw_email: &str) -> Result<(), NewsletterError> {
        if self.pending.get() {
            return Err(NewsletterError::AlreadyPending);
        }

        let email = raw_email.trim();
        if !validate_email(email) {
            self.view.show_message(&StatusMessage::INVALID_EMAIL);
            return Err(NewsletterError::InvalidEmail { email: email.to_string() });
        }

        self.pending.set(true);
        self.view.set_pending(true);

        let result = self.subscriber.subscribe(email).await;
        match &result {
            Ok(()) => {
                self.view.show_message(&StatusMessage::SUBSCRIBED);
                self.view.clear_input();
            }
            Err(e) => {
                tracing::warn!(error = %e, "newsletter subscription failed");
                self.view.show_message(&StatusMessage::FAILED);
            }
        }

        self.pending.set(false);
        self.view.set_pending(false);
        result
    }
}
