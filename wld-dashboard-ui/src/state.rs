//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use serde::Serialize;
use wld_feed::{FeedConfig, LossRecord, StatsSummary};
use wld_view::SelectionController;

/// Map defaults: Ukraine-wide view, OpenStreetMap tiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub tile_url: String,
    /// Must stay visible whenever tiles are shown.
    pub attribution: String,
    /// How long to let `flyTo` settle before opening the popup.
    pub popup_delay_ms: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: 48.3794,
            center_lon: 31.1656,
            zoom: 6,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            popup_delay_ms: 1000,
        }
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Feed host and country
    pub feed: Signal<FeedConfig>,
    pub map: Signal<MapSettings>,
    /// Loss records in feed order (None until loaded)
    pub losses: Signal<Option<Vec<LossRecord>>>,
    /// Error message if the losses fetch failed
    pub losses_error: Signal<Option<String>>,
    /// Stats summary (None until loaded)
    pub stats: Signal<Option<StatsSummary>>,
    /// Error message if the stats fetch failed
    pub stats_error: Signal<Option<String>>,
    /// Whether the recent-losses list is expanded
    pub show_recent: Signal<bool>,
    /// Which loss drives the map viewport
    pub selection: Signal<SelectionController>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            feed: Signal::new(FeedConfig::default()),
            map: Signal::new(MapSettings::default()),
            losses: Signal::new(None),
            losses_error: Signal::new(None),
            stats: Signal::new(None),
            stats_error: Signal::new(None),
            show_recent: Signal::new(false),
            selection: Signal::new(SelectionController::new()),
        }
    }
}
