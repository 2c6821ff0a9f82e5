//! Map of geolocated losses plus the recent-losses list.
//!
//! Clicking a list item focuses that loss: the map flies to it, the card
//! scrolls into view and, once the fly-to has settled, the marker's popup
//! opens. A newer click supersedes a popup that has not opened yet.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wld_feed::LossRecord;
use wld_view::present::{days_without_losses_label, marker_pins, recent_toggle_label};
use wld_view::{build_markers, derive_view};

use super::{CardHeader, ErrorDisplay, LoadingSpinner, MapContainer, RecentLossesList};
use crate::js_bridge;
use crate::state::AppState;

/// Leaflet container DOM element ID.
pub const MAP_ID: &str = "losses-map";

/// Card body scrolled into view on selection.
pub const MAP_CARD_ID: &str = "losses-map-card";

#[component]
pub fn LossesMapCard() -> Element {
    let mut state = use_context::<AppState>();

    // Draw or refresh markers whenever the losses or the selection change
    use_effect(move || {
        let losses = state.losses.read();
        let Some(losses) = &*losses else {
            return;
        };
        let selection = state.selection.read();
        let pins = marker_pins(&build_markers(losses), &selection);
        let pins_json = match serde_json::to_string(&pins) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize markers: {}", e);
                return;
            }
        };
        js_bridge::init_map_scripts();
        js_bridge::render_loss_map(MAP_ID, &state.map.read(), &pins_json);
    });

    let on_select = move |record: LossRecord| {
        let Some(request) = state.selection.write().select(&record) else {
            log::debug!("loss {} has no usable coordinates", record.id);
            return;
        };
        if let Some(target) = state.selection.read().viewport_target() {
            js_bridge::fly_to(MAP_ID, &target);
        }
        js_bridge::scroll_into_view(MAP_CARD_ID);

        let delay_ms = state.map.read().popup_delay_ms;
        spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            if state.selection.read().is_current(&request) {
                js_bridge::open_popup(MAP_ID, &request.id);
            } else {
                log::debug!("dropping superseded popup #{}", request.generation);
            }
        });
    };

    let on_toggle = move |_| {
        let showing = (state.show_recent)();
        state.show_recent.set(!showing);
    };

    if let Some(err) = (state.losses_error)() {
        return rsx! {
            div {
                class: "card",
                CardHeader { title: "Russian Losses".to_string() }
                ErrorDisplay { what: "war losses".to_string(), message: err }
            }
        };
    }

    let (recent, days_label) = {
        let losses = state.losses.read();
        let Some(losses) = &*losses else {
            return rsx! { LoadingSpinner {} };
        };
        let now = chrono::Local::now().naive_local();
        let view = derive_view(losses, &now);
        let recent: Vec<LossRecord> = view.recent_losses.iter().map(|r| (*r).clone()).collect();
        (recent, days_without_losses_label(view.days_without_losses))
    };
    let showing = (state.show_recent)();
    let toggle_label = recent_toggle_label(showing);

    rsx! {
        div {
            class: "card",
            CardHeader {
                title: "Russian Losses".to_string(),
                subtitle: days_label,
                note: "Strictly showing reported losses. Majority of losses will be unreported.".to_string(),
            }
            div {
                class: "card-body",
                id: MAP_CARD_ID,
                MapContainer { id: MAP_ID.to_string() }
                button {
                    class: "toggle-button",
                    style: "margin: 8px 0;",
                    onclick: on_toggle,
                    "{toggle_label}"
                }
                if showing {
                    RecentLossesList {
                        records: recent,
                        on_select: on_select,
                    }
                }
            }
        }
    }
}
