//! Maresia Restaurant - site interactivity
//!
//! Enhances the static page markup once the WASM bundle loads.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use async_trait as _;
use gloo_timers as _;
use js_sys as _;
use serde as _;
use serde_json as _;
use serde_wasm_bindgen as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

use leptos::task::Executor;
use maresia_core::SiteConfig;
use maresia_leptos::app::{load_config, App};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Maresia site v{VERSION} starting...");

    // Timers and status views are driven by the wasm-bindgen executor
    drop(Executor::init_wasm_bindgen());

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Using default config: {e}");
        SiteConfig::default()
    });
    if let Err(e) = App::start(config) {
        log::error!("Erro ao inicializar componentes: {e}");
    }
}
