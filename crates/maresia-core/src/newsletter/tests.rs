//! Tests for the newsletter signup flow

use super::*;
use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum ViewEvent {
    Pending(bool),
    Message(MessageKind),
    ClearInput,
}

/// Records every widget write; holds at most one visible message like the form does.
#[derive(Default)]
struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
    visible: RefCell<Option<StatusMessage>>,
    disabled: Cell<bool>,
}

impl NewsletterView for Rc<RecordingView> {
    fn set_pending(&self, pending: bool) {
        self.disabled.set(pending);
        self.events.borrow_mut().push(ViewEvent::Pending(pending));
    }

    fn show_message(&self, message: &StatusMessage) {
        *self.visible.borrow_mut() = Some(message.clone());
        self.events.borrow_mut().push(ViewEvent::Message(message.kind));
    }

    fn clear_input(&self) {
        self.events.borrow_mut().push(ViewEvent::ClearInput);
    }
}

/// Resolves immediately, remembering whether the button was disabled at the time.
struct ProbeSubscriber {
    view: Rc<RecordingView>,
    fail: bool,
    seen_disabled: Cell<Option<bool>>,
    calls: RefCell<Vec<String>>,
}

#[async_trait(?Send)]
impl Subscriber for Rc<ProbeSubscriber> {
    async fn subscribe(&self, email: &str) -> Result<(), NewsletterError> {
        self.seen_disabled.set(Some(self.view.disabled.get()));
        self.calls.borrow_mut().push(email.to_string());
        if self.fail {
            Err(NewsletterError::SubmissionFailed { message: "offline".to_string() })
        } else {
            Ok(())
        }
    }
}

fn setup(fail: bool) -> (NewsletterController<Rc<ProbeSubscriber>, Rc<RecordingView>>, Rc<ProbeSubscriber>) {
    let view = Rc::new(RecordingView::default());
    let subscriber = Rc::new(ProbeSubscriber {
        view: Rc::clone(&view),
        fail,
        seen_disabled: Cell::new(None),
        calls: RefCell::new(Vec::new()),
    });
    (NewsletterController::new(Rc::clone(&subscriber), view), subscriber)
}

#[test]
fn test_email_validation() {
    assert!(validate_email("user@example.com"));
    assert!(validate_email("a.b+c@sub.example.com.br"));
    assert!(!validate_email("not-an-email"));
    assert!(!validate_email("user@"));
    assert!(!validate_email("@example.com"));
    assert!(!validate_email("user@example"));
    assert!(!validate_email("us er@example.com"));
    assert!(!validate_email(""));
}

#[test]
fn test_successful_submission_sequence() {
    let (controller, subscriber) = setup(false);

    block_on(controller.submit("  user@example.com ")).expect("subscribes");

    assert_eq!(subscriber.seen_disabled.get(), Some(true));
    assert_eq!(subscriber.calls.borrow().as_slice(), ["user@example.com"]);
    assert_eq!(
        controller.view().events.borrow().as_slice(),
        [
            ViewEvent::Pending(true),
            ViewEvent::Message(MessageKind::Success),
            ViewEvent::ClearInput,
            ViewEvent::Pending(false),
        ]
    );
    assert!(!controller.view().disabled.get());
    assert!(!controller.is_pending());
    assert_eq!(controller.view().visible.borrow().as_ref(), Some(&StatusMessage::SUBSCRIBED));
}

#[test]
fn test_invalid_email_touches_nothing_but_message() {
    let (controller, subscriber) = setup(false);

    let err = block_on(controller.submit("user@")).unwrap_err();

    assert_eq!(err, NewsletterError::InvalidEmail { email: "user@".to_string() });
    assert!(subscriber.calls.borrow().is_empty());
    assert_eq!(
        controller.view().events.borrow().as_slice(),
        [ViewEvent::Message(MessageKind::Error)]
    );
}

#[test]
fn test_failed_submission_reenables_button() {
    let (controller, _subscriber) = setup(true);

    let err = block_on(controller.submit("user@example.com")).unwrap_err();

    assert!(matches!(err, NewsletterError::SubmissionFailed { .. }));
    let events = controller.view().events.borrow();
    assert_eq!(events.first(), Some(&ViewEvent::Pending(true)));
    assert_eq!(events.last(), Some(&ViewEvent::Pending(false)));
    assert!(!events.contains(&ViewEvent::ClearInput));
    assert_eq!(controller.view().visible.borrow().as_ref(), Some(&StatusMessage::FAILED));
}

#[test]
fn test_message_classes() {
    assert_eq!(MessageKind::Success.class(), "newsletter-message success");
    assert_eq!(MessageKind::Error.class(), "newsletter-message error");
    assert_eq!(button_label(true), "Inscrevendo...");
    assert_eq!(button_label(false), "Inscrever");
}

/// Subscriber that never resolves, to observe the pending guard.
struct Stalled;

#[async_trait(?Send)]
impl Subscriber for Stalled {
    async fn subscribe(&self, _email: &str) -> Result<(), NewsletterError> {
        futures::future::pending::<()>().await;
        Ok(())
    }
}

#[test]
fn test_second_submit_while_pending_is_rejected() {
    use futures::FutureExt;

    let controller = NewsletterController::new(Stalled, Rc::new(RecordingView::default()));
    let mut first = Box::pin(controller.submit("user@example.com"));
    assert!((&mut first).now_or_never().is_none());
    assert!(controller.is_pending());

    let second = block_on(controller.submit("other@example.com"));
    assert_eq!(second, Err(NewsletterError::AlreadyPending));
    assert_eq!(controller.view().events.borrow().as_slice(), [ViewEvent::Pending(true)]);
}
