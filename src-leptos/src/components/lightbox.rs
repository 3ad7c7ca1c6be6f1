//! Gallery lightbox overlay.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use maresia_core::lightbox::{GalleryImage, Lightbox as LightboxState};
use maresia_core::scroll_lock::LockHolder;
use maresia_core::{ComponentError, SiteConfig};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent};

use crate::dom;
use crate::utils::BodyScrollLock;

const COMPONENT: &str = "Lightbox";
const FADE_IN_DELAY_MS: u32 = 10;

pub struct Lightbox {
    inner: Rc<Inner>,
}

struct Inner {
    overlay: HtmlElement,
    image: HtmlImageElement,
    caption: Element,
    state: RefCell<LightboxState>,
    /// Bumped on every open/close so a pending close cannot hide a reopened box.
    epoch: Cell<u64>,
    hide_delay: u32,
    scroll_lock: BodyScrollLock,
}

impl Lightbox {
    /// `Ok(None)` when the page has no `#lightbox`.
    pub fn new(config: &SiteConfig, scroll_lock: BodyScrollLock) -> Result<Option<Self>, ComponentError> {
        let Some(overlay) = dom::by_id("lightbox").and_then(dom::cast::<HtmlElement>) else {
            return Ok(None);
        };
        let image = dom::by_id("lightbox-img")
            .and_then(dom::cast::<HtmlImageElement>)
            .ok_or_else(|| ComponentError::missing(COMPONENT, "#lightbox-img"))?;
        let caption = dom::by_id("lightbox-caption")
            .ok_or_else(|| ComponentError::missing(COMPONENT, "#lightbox-caption"))?;

        let items: Vec<(Element, GalleryImage)> = dom::query_all(".galeria-item")
            .into_iter()
            .filter_map(|item| {
                let img = dom::query_in(&item, "img").and_then(dom::cast::<HtmlImageElement>)?;
                Some((item, GalleryImage { src: img.src(), caption: img.alt() }))
            })
            .collect();

        let (elements, images): (Vec<Element>, Vec<GalleryImage>) = items.into_iter().unzip();

        let inner = Rc::new(Inner {
            overlay,
            image,
            caption,
            state: RefCell::new(LightboxState::new(images)),
            epoch: Cell::new(0),
            hide_delay: config.hide_delay,
            scroll_lock,
        });

        for (index, element) in elements.iter().enumerate() {
            let this = Rc::clone(&inner);
            dom::listen(element, "click", move |_| this.open(index))?;
        }
        inner.setup_close_listeners()?;
        Ok(Some(Self { inner }))
    }

    pub fn open(&self, index: usize) {
        self.inner.open(index);
    }

    pub fn close(&self) {
        self.inner.close();
    }

    pub fn next(&self) {
        self.inner.next();
    }

    pub fn previous(&self) {
        self.inner.previous();
    }
}

impl Inner {
    fn setup_close_listeners(self: &Rc<Self>) -> Result<(), ComponentError> {
        if let Some(close) = dom::query(".lightbox-close") {
            let this = Rc::clone(self);
            dom::listen(&close, "click", move |_| this.close())?;
        }

        let this = Rc::clone(self);
        dom::listen(&self.overlay, "click", move |event| {
            let overlay: &EventTarget = &this.overlay;
            if event.target().as_ref() == Some(overlay) {
                this.close();
            }
        })?;

        let this = Rc::clone(self);
        dom::listen(&dom::document()?.into(), "keydown", move |event| {
            if !this.state.borrow().is_open() {
                return;
            }
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            match key.as_str() {
                "Escape" => this.close(),
                "ArrowLeft" => this.previous(),
                "ArrowRight" => this.next(),
                _ => {}
            }
        })
    }

    fn show(&self, image: &GalleryImage) {
        self.image.set_src(&image.src);
        self.caption.set_text_content(Some(&image.caption));
    }

    fn open(self: &Rc<Self>, index: usize) {
        let image = match self.state.borrow_mut().open(index) {
            Ok(image) => image.clone(),
            Err(e) => {
                log::warn!("{e}");
                return;
            }
        };
        self.show(&image);
        let epoch = self.bump_epoch();

        dom::set_style(&self.overlay, "display", "block");
        dom::set_style(&self.overlay, "opacity", "0");
        self.scroll_lock.acquire(LockHolder::Lightbox);

        let this = Rc::clone(self);
        dom::after(FADE_IN_DELAY_MS, move || {
            if this.epoch.get() == epoch {
                dom::set_style(&this.overlay, "opacity", "1");
            }
        });
    }

    fn close(self: &Rc<Self>) {
        if !self.state.borrow_mut().close() {
            return;
        }
        let epoch = self.bump_epoch();
        dom::set_style(&self.overlay, "opacity", "0");

        let this = Rc::clone(self);
        dom::after(self.hide_delay, move || {
            if this.epoch.get() == epoch {
                dom::set_style(&this.overlay, "display", "none");
                this.scroll_lock.release(LockHolder::Lightbox);
            }
        });
    }

    fn next(&self) {
        let image = self.state.borrow_mut().next().cloned();
        if let Some(image) = image {
            self.show(&image);
        }
    }

    fn previous(&self) {
        let image = self.state.borrow_mut().previous().cloned();
        if let Some(image) = image {
            self.show(&image);
        }
    }

    fn bump_epoch(&self) -> u64 {
        let epoch = self.epoch.get().wrapping_add(1);
        self.epoch.set(epoch);
        epoch
    }
}
