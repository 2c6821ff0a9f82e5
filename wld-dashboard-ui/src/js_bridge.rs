//! Browser-side plumbing: feed fetching and typed wrappers around JS interop.
//!
//! The Leaflet glue lives in `assets/js/loss-map.js`. It is evaluated as
//! globals (no ES modules) once Leaflet has loaded and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, ScrollBehavior, ScrollIntoViewOptions};
use wld_feed::error::ensure_success;
use wld_feed::{FeedConfig, FeedError, LossId, LossRecord, LossesResponse, StatsSummary};
use wld_view::ViewportTarget;

use crate::state::MapSettings;

// Embed the map glue at compile time
static LOSS_MAP_JS: &str = include_str!("../assets/js/loss-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WLD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the map glue with a wait-for-Leaflet polling loop.
///
/// The glue defines `initLossMap(...)` and friends via `function`
/// declarations. They are evaluated at global scope via an indirect `eval()`
/// once `L` exists, then promoted to `window.*` explicitly.
pub fn init_map_scripts() {
    let store_js = format!("window.__wldMapScripts = {};", js_string(LOSS_MAP_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__wldMapInitStarted) return;
            window.__wldMapInitStarted = true;
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__wldMapScripts);
                    delete window.__wldMapScripts;
                    if (typeof initLossMap !== 'undefined') window.initLossMap = initLossMap;
                    if (typeof setLossMarkers !== 'undefined') window.setLossMarkers = setLossMarkers;
                    if (typeof flyToLoss !== 'undefined') window.flyToLoss = flyToLoss;
                    if (typeof openLossPopup !== 'undefined') window.openLossPopup = openLossPopup;
                    window.__wldMapReady = true;
                    console.log('WLD map initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Create the map (first call only) and sync its markers.
///
/// Draws immediately when Leaflet and the container are ready. Otherwise the
/// latest arguments are parked and a single poll, shared by all callers,
/// draws them once everything is ready.
pub fn render_loss_map(container_id: &str, settings: &MapSettings, pins_json: &str) {
    let config_json = match serde_json::to_string(settings) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize map settings: {}", e);
            return;
        }
    };
    call_js(&render_script(container_id, &config_json, pins_json));
}

fn render_script(container_id: &str, config_json: &str, pins_json: &str) -> String {
    let id = js_string(container_id);
    let config = js_string(config_json);
    let pins = js_string(pins_json);
    format!(
        r#"
        (function() {{
            window.__wldPendingRender = {{ id: {id}, config: {config}, pins: {pins} }};
            function drawPending() {{
                var job = window.__wldPendingRender;
                if (!job || !window.__wldMapReady ||
                    typeof window.initLossMap === 'undefined' ||
                    !document.getElementById(job.id)) {{
                    return false;
                }}
                window.__wldPendingRender = null;
                try {{
                    window.initLossMap(job.id, job.config);
                    window.setLossMarkers(job.id, job.pins);
                }} catch(e) {{ console.error('[WLD] render_loss_map error:', e); }}
                return true;
            }}
            if (drawPending() || window.__wldRenderPoll) return;
            window.__wldRenderPoll = setInterval(function() {{
                if (drawPending()) {{
                    clearInterval(window.__wldRenderPoll);
                    window.__wldRenderPoll = null;
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Animate the map to `target`.
pub fn fly_to(container_id: &str, target: &ViewportTarget) {
    call_js(&format!(
        "if (window.flyToLoss) window.flyToLoss('{}', {}, {}, {});",
        container_id, target.lat, target.lon, target.zoom
    ));
}

/// Open the popup of the marker for loss `id`. Unknown ids are ignored.
pub fn open_popup(container_id: &str, id: &LossId) {
    call_js(&format!(
        "if (window.openLossPopup) window.openLossPopup('{}', {});",
        container_id,
        js_string(&id.to_string())
    ));
}

/// Smooth-scroll an element into view. Missing elements are ignored.
pub fn scroll_into_view(element_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn js_error(url: &str, value: JsValue) -> FeedError {
    FeedError::Network {
        url: url.to_string(),
        reason: value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    }
}

/// GET `url` with the browser's `fetch`, returning the body text.
pub async fn fetch_text(url: &str) -> Result<String, FeedError> {
    let window = web_sys::window().ok_or_else(|| FeedError::Network {
        url: url.to_string(),
        reason: "no window".to_string(),
    })?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error(url, e))?;
    let response: Response = response.dyn_into().map_err(|e| js_error(url, e))?;
    ensure_success(url, response.status())?;
    let text = JsFuture::from(response.text().map_err(|e| js_error(url, e))?)
        .await
        .map_err(|e| js_error(url, e))?;
    text.as_string().ok_or_else(|| FeedError::Network {
        url: url.to_string(),
        reason: "response body is not text".to_string(),
    })
}

/// Fetch and decode the losses feed.
pub async fn fetch_losses(config: &FeedConfig) -> Result<Vec<LossRecord>, FeedError> {
    let body = fetch_text(&config.losses_url()).await?;
    Ok(LossesResponse::from_json(&body)?.losses)
}

/// Fetch and decode the stats feed.
pub async fn fetch_stats(config: &FeedConfig) -> Result<StatsSummary, FeedError> {
    let body = fetch_text(&config.stats_url()).await?;
    StatsSummary::from_json(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_script_shares_one_poll() {
        let script = render_script("losses-map", "{}", "[]");
        assert!(script.contains(r#"id: "losses-map""#));
        assert!(script.contains("if (drawPending() || window.__wldRenderPoll) return;"));
        assert_eq!(script.matches("setInterval(").count(), 1);
        assert!(script.contains("clearInterval(window.__wldRenderPoll);"));
    }

    #[test]
    fn test_render_script_quotes_payloads() {
        let script = render_script("m'ap", r#"{"zoom":6}"#, r#"[{"id":"1"}]"#);
        assert!(script.contains(r#"id: "m'ap""#));
        assert!(script.contains(r#"config: "{\"zoom\":6}""#));
        assert!(script.contains(r#"pins: "[{\"id\":\"1\"}]""#));
    }
}
