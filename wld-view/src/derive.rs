//! Loss list → recent subset, days without losses, map markers.
//!
//! Malformed per-record `date` or `geo` values never fail a derivation; the
//! record is just left out of the view that needed the field.

use chrono::NaiveDateTime;
use log::{debug, warn};
use wld_feed::LossRecord;
use wld_utils::dates::days_since;

use crate::error::ViewError;
use crate::geo::{parse_geo, GeoPoint};

/// Trailing window, in calendar days, for "recent" losses. Inclusive.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// A record that can be drawn on the map.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Marker<'a> {
    pub record: &'a LossRecord,
    pub point: GeoPoint,
}

impl Marker<'_> {
    pub fn lat(&self) -> f64 {
        self.point.lat
    }

    pub fn lon(&self) -> f64 {
        self.point.lon
    }
}

/// Everything the map surface needs, computed in one pass over the list.
#[derive(Debug, PartialEq, Clone)]
pub struct DerivedView<'a> {
    pub recent_losses: Vec<&'a LossRecord>,
    /// `None` when no record has a parseable date.
    pub days_without_losses: Option<i64>,
    pub markers: Vec<Marker<'a>>,
}

/// Records dated within [`RECENT_WINDOW_DAYS`] of `now`, either side, in source order.
pub fn filter_recent<'a>(records: &'a [LossRecord], now: &NaiveDateTime) -> Vec<&'a LossRecord> {
    records
        .iter()
        .filter(|record| match record.parsed_date() {
            Some(date) => days_since(&date, now).abs() <= RECENT_WINDOW_DAYS,
            None => false,
        })
        .collect()
}

/// Calendar days between the latest dated loss and `now`, never negative.
pub fn days_without_losses(records: &[LossRecord], now: &NaiveDateTime) -> Result<i64, ViewError> {
    let latest = records
        .iter()
        .filter_map(LossRecord::parsed_date)
        .max()
        .ok_or(ViewError::EmptyInput)?;
    Ok(days_since(&latest, now).max(0))
}

/// Records with a well-formed "<lat>,<lon>" geo, paired with the parsed point.
pub fn build_markers(records: &[LossRecord]) -> Vec<Marker<'_>> {
    let markers: Vec<Marker<'_>> = records
        .iter()
        .filter_map(|record| {
            let point = parse_geo(record.geo_str()?)?;
            Some(Marker { record, point })
        })
        .collect();
    let malformed = records
        .iter()
        .filter(|r| r.geo_str().is_some())
        .count()
        - markers.len();
    if malformed > 0 {
        debug!("skipped {} losses with malformed geo", malformed);
    }
    markers
}

pub fn derive_view<'a>(records: &'a [LossRecord], now: &NaiveDateTime) -> DerivedView<'a> {
    let days_without_losses = match days_without_losses(records, now) {
        Ok(days) => Some(days),
        Err(e) => {
            if !records.is_empty() {
                warn!("{} ({} records)", e, records.len());
            }
            None
        }
    };
    DerivedView {
        recent_losses: filter_recent(records, now),
        days_without_losses,
        markers: build_markers(records),
    }
}
