//! Which loss, if any, currently drives the map viewport.
//!
//! Two states: unselected (initial) and focused on one record. Focusing is
//! only possible for records with usable coordinates; anything else is a
//! silent no-op.

use serde::Serialize;
use wld_feed::{LossId, LossRecord};

use crate::geo::{parse_geo, GeoPoint};

/// Neighbourhood-level zoom used when flying to a focused loss.
pub const FOCUS_ZOOM: u8 = 10;

/// Marker opacity for the focused loss.
pub const FOCUSED_OPACITY: f64 = 1.0;

/// Marker opacity for every other loss.
pub const UNFOCUSED_OPACITY: f64 = 0.5;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct ViewportTarget {
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
}

/// Ask the map to open the popup of marker `id` once the fly-to has settled.
///
/// Only honour it while [`SelectionController::is_current`] says so; a later
/// selection supersedes it.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct PopupRequest {
    pub generation: u64,
    pub id: LossId,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, PartialEq, Clone)]
struct Focus {
    record: LossRecord,
    point: GeoPoint,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct SelectionController {
    focus: Option<Focus>,
    generation: u64,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus `record`. Returns the popup request to schedule, or `None`
    /// (state untouched) when the record has no usable `geo`.
    pub fn select(&mut self, record: &LossRecord) -> Option<PopupRequest> {
        let point = parse_geo(record.geo_str()?)?;
        self.generation += 1;
        self.focus = Some(Focus {
            record: record.clone(),
            point,
        });
        Some(PopupRequest {
            generation: self.generation,
            id: record.id.clone(),
            lat: point.lat,
            lon: point.lon,
        })
    }

    /// Back to unselected. Pending popup requests become stale.
    pub fn clear(&mut self) {
        if self.focus.take().is_some() {
            self.generation += 1;
        }
    }

    pub fn selected(&self) -> Option<&LossRecord> {
        self.focus.as_ref().map(|f| &f.record)
    }

    pub fn is_focused(&self, id: &LossId) -> bool {
        self.focus.as_ref().is_some_and(|f| &f.record.id == id)
    }

    pub fn marker_opacity(&self, id: &LossId) -> f64 {
        if self.is_focused(id) {
            FOCUSED_OPACITY
        } else {
            UNFOCUSED_OPACITY
        }
    }

    pub fn viewport_target(&self) -> Option<ViewportTarget> {
        self.focus.as_ref().map(|f| ViewportTarget {
            lat: f.point.lat,
            lon: f.point.lon,
            zoom: FOCUS_ZOOM,
        })
    }

    /// True while no `select` or `clear` has happened since `request` was issued.
    pub fn is_current(&self, request: &PopupRequest) -> bool {
        self.focus.is_some() && request.generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn located(id: i64, geo: &str) -> LossRecord {
        LossRecord::new(id).with_geo(geo)
    }

    #[test]
    fn test_starts_unselected() {
        let selection = SelectionController::new();
        assert_eq!(selection.selected(), None);
        assert_eq!(selection.viewport_target(), None);
        assert_eq!(selection.generation(), 0);
    }

    #[test]
    fn test_select_without_geo_from_unselected_is_noop() {
        let mut selection = SelectionController::new();
        assert_eq!(selection.select(&LossRecord::new(1)), None);
        assert_eq!(selection.select(&located(2, "10,20,30")), None);
        assert_eq!(selection.select(&located(3, "")), None);
        assert_eq!(selection, SelectionController::new());
        assert_eq!(selection.viewport_target(), None);
    }

    #[test]
    fn test_select_without_geo_keeps_existing_focus() {
        let mut selection = SelectionController::new();
        let focused = located(1, "48.0,37.0");
        let request = selection.select(&focused).unwrap();
        let before = selection.clone();

        assert_eq!(selection.select(&LossRecord::new(2)), None);
        assert_eq!(selection, before);
        assert_eq!(selection.selected(), Some(&focused));
        assert!(selection.is_current(&request));
    }

    #[test]
    fn test_select_sets_viewport_target() {
        let mut selection = SelectionController::new();
        let request = selection.select(&located(7, "10,20")).unwrap();
        assert_eq!(request.id, LossId::Number(7));
        assert_eq!(request.lat, 10.0);
        assert_eq!(request.lon, 20.0);
        assert_eq!(
            selection.viewport_target(),
            Some(ViewportTarget { lat: 10.0, lon: 20.0, zoom: FOCUS_ZOOM })
        );
        assert!(selection.is_focused(&LossId::Number(7)));
        assert!(!selection.is_focused(&LossId::Number(8)));
    }

    #[test]
    fn test_overwrite_supersedes_pending_popup() {
        let mut selection = SelectionController::new();
        let first = selection.select(&located(1, "10,20")).unwrap();
        let second = selection.select(&located(2, "30,40")).unwrap();
        assert!(!selection.is_current(&first));
        assert!(selection.is_current(&second));
        assert_eq!(selection.selected().map(|r| r.id.to_string()), Some("2".into()));
        assert_eq!(selection.viewport_target().map(|t| t.lat), Some(30.0));
    }

    #[test]
    fn test_popup_request_names_record_sharing_coordinates() {
        let mut selection = SelectionController::new();
        let first = selection.select(&located(1, "48.5,37.5")).unwrap();
        let second = selection.select(&located(2, "48.5,37.5")).unwrap();
        assert_eq!((first.lat, first.lon), (second.lat, second.lon));
        assert_eq!(first.id, LossId::Number(1));
        assert_eq!(second.id, LossId::Number(2));
        assert!(selection.is_focused(&second.id));
    }

    #[test]
    fn test_reselecting_same_record_issues_fresh_request() {
        let mut selection = SelectionController::new();
        let record = located(1, "10,20");
        let first = selection.select(&record).unwrap();
        let again = selection.select(&record).unwrap();
        assert!(again.generation > first.generation);
        assert!(!selection.is_current(&first));
    }

    #[test]
    fn test_clear_returns_to_unselected_and_invalidates() {
        let mut selection = SelectionController::new();
        let request = selection.select(&located(1, "10,20")).unwrap();
        selection.clear();
        assert_eq!(selection.selected(), None);
        assert_eq!(selection.viewport_target(), None);
        assert!(!selection.is_current(&request));

        // Clearing twice is harmless.
        let generation = selection.generation();
        selection.clear();
        assert_eq!(selection.generation(), generation);
    }

    #[test]
    fn test_marker_opacity() {
        let mut selection = SelectionController::new();
        let id = LossId::Number(1);
        assert_eq!(selection.marker_opacity(&id), UNFOCUSED_OPACITY);
        selection.select(&located(1, "1,2"));
        assert_eq!(selection.marker_opacity(&id), FOCUSED_OPACITY);
        assert_eq!(selection.marker_opacity(&LossId::Number(2)), UNFOCUSED_OPACITY);
    }
}
