//! Maresia Restaurant - Leptos/WASM site layer

pub mod analytics;
pub mod app;
pub mod components;
pub mod dom;
pub mod utils;
