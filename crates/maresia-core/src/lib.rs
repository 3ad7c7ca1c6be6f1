//! # Maresia Core
//!
//! Interaction rules for the Maresia restaurant site, free of any browser
//! dependency so they can be tested natively.
//!
//! - **`config`** - site configuration and its validation
//! - **`error`** - typed error hierarchy
//! - **`navigation`** / **`scroll_lock`** - mobile menu, navbar and scroll-spy
//! - **`filter`** - menu and gallery category filters
//! - **`lightbox`** - gallery viewer cursor
//! - **`whatsapp`** - deep links and analytics payloads
//! - **`observer`** / **`lazy`** - one-shot visibility and image load states
//! - **`newsletter`** - signup flow behind subscriber/view seams
//! - **`timing`** / **`viewport`** - throttle, debounce and geometry helpers
//! - **`startup`** - batch construction of every component
//!
//! ```text
//!            maresia-core (this crate)
//!                     │
//!                     ▼
//!            maresia-leptos (wasm)
//!         DOM queries, listeners, timers
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod lightbox;
pub mod navigation;
pub mod newsletter;
pub mod observer;
pub mod scroll_lock;
pub mod startup;
pub mod timing;
pub mod viewport;
pub mod whatsapp;

pub use config::SiteConfig;
pub use error::{ComponentError, ConfigError, NewsletterError, Result, SiteError};
