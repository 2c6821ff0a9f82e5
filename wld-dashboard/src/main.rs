//! Russian Damage Statistics Dashboard
//!
//! Single page with two independent cards:
//! - a Leaflet map of geolocated losses with a toggleable list of the last
//!   week's losses and a days-without-reported-losses counter
//! - a statistics card with counts by status and by equipment type
//!
//! Data flow:
//! 1. On mount, the losses and stats feeds are fetched concurrently, each in
//!    its own task. Neither waits for the other.
//! 2. Each result lands in its own `AppState` signal; the matching card
//!    re-renders from loading placeholder to content (or to an error box).
//! 3. Nothing is refetched for the rest of the session.

use dioxus::prelude::*;
use wld_dashboard_ui::components::{LossesMapCard, StatsCard};
use wld_dashboard_ui::js_bridge;
use wld_dashboard_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch both feeds once on mount
    use_effect(move || {
        let feed = state.feed.peek().clone();

        let losses_feed = feed.clone();
        spawn(async move {
            match js_bridge::fetch_losses(&losses_feed).await {
                Ok(losses) => {
                    log::info!("Loaded {} losses", losses.len());
                    state.losses.set(Some(losses));
                }
                Err(e) => {
                    log::error!("Error fetching war losses: {}", e);
                    state.losses_error.set(Some(e.to_string()));
                }
            }
        });

        spawn(async move {
            match js_bridge::fetch_stats(&feed).await {
                Ok(stats) => {
                    log::info!("Loaded stats for {} equipment types", stats.counts_by_type.len());
                    state.stats.set(Some(stats));
                }
                Err(e) => {
                    log::error!("Error fetching war stats: {}", e);
                    state.stats_error.set(Some(e.to_string()));
                }
            }
        });
    });

    rsx! {
        div {
            class: "App",
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            header {
                class: "App-header",
                h1 { "Russian Damage Statistics Dashboard" }
            }
            LossesMapCard {}
            StatsCard {}
        }
    }
}
