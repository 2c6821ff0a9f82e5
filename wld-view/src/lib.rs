//! View-model derivation and selection state for the war losses dashboard.
//!
//! Everything here is pure: no I/O, no clock. Callers pass `now` explicitly,
//! which keeps the derivations deterministic.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wld_feed::LossRecord;
//! use wld_view::{derive_view, SelectionController};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let records = vec![
//!     LossRecord::new(1).with_date("2024-01-01").with_geo("10,20"),
//!     LossRecord::new(2).with_date("2024-01-10"),
//! ];
//!
//! let view = derive_view(&records, &now);
//! assert_eq!(view.recent_losses.len(), 1);
//! assert_eq!(view.days_without_losses, Some(0));
//! assert_eq!(view.markers.len(), 1);
//!
//! let mut selection = SelectionController::new();
//! assert!(selection.select(&records[1]).is_none());
//! assert!(selection.select(&records[0]).is_some());
//! assert_eq!(selection.viewport_target().unwrap().zoom, 10);
//! ```

pub mod derive;
pub mod error;
pub mod geo;
pub mod present;
pub mod selection;

pub use derive::{
    build_markers, days_without_losses, derive_view, filter_recent, DerivedView, Marker,
    RECENT_WINDOW_DAYS,
};
pub use error::ViewError;
pub use geo::{parse_geo, GeoPoint};
pub use selection::{PopupRequest, SelectionController, ViewportTarget, FOCUS_ZOOM};
