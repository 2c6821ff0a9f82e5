//! Dioxus components and Leaflet bridge for the war losses dashboard.
//!
//! This crate provides:
//! - `js_bridge`: browser fetch plus Rust wrappers for the Leaflet map via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: the map card, the stats card and their building blocks

pub mod components;
pub mod js_bridge;
pub mod state;
