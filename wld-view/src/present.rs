//! Display rows for the two dashboard surfaces.
//!
//! Kept free of any UI framework so the CLI and the web app print the same
//! labels.

use serde::Serialize;
use wld_feed::{LossRecord, StatsSummary};

use crate::derive::Marker;
use crate::selection::SelectionController;

/// Popup body for one marker.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct PopupContent {
    pub title: String,
    /// (label, value) pairs, rendered one per line.
    pub lines: Vec<(String, String)>,
}

impl PopupContent {
    pub fn from_record(record: &LossRecord) -> Self {
        let line = |label: &str, value: &str| (label.to_string(), value.to_string());
        Self {
            title: record.kind.clone(),
            lines: vec![
                line("Model", &record.model),
                line("Status", &record.status),
                line("Lost by", &record.lost_by),
                line("Date", &record.date_label()),
                line("Location", &record.nearest_location),
                line("Tags", &record.tags),
            ],
        }
    }
}

/// One entry of the recent-losses list.
#[derive(Debug, PartialEq, Clone)]
pub struct ListItem {
    pub headline: String,
    pub subline: String,
}

impl ListItem {
    pub fn from_record(record: &LossRecord) -> Self {
        Self {
            headline: format!("{} - {} ({})", record.kind, record.model, record.status),
            subline: format!("{} - {}", record.date_label(), record.nearest_location),
        }
    }
}

/// What the map bridge needs to draw one marker.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MarkerPin {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub opacity: f64,
    pub popup: PopupContent,
}

impl MarkerPin {
    pub fn new(marker: &Marker<'_>, selection: &SelectionController) -> Self {
        Self {
            id: marker.record.id.to_string(),
            lat: marker.lat(),
            lon: marker.lon(),
            opacity: selection.marker_opacity(&marker.record.id),
            popup: PopupContent::from_record(marker.record),
        }
    }
}

pub fn marker_pins(markers: &[Marker<'_>], selection: &SelectionController) -> Vec<MarkerPin> {
    markers.iter().map(|m| MarkerPin::new(m, selection)).collect()
}

/// Header line of the map card.
pub fn days_without_losses_label(days: Option<i64>) -> String {
    match days {
        Some(days) => format!("Days without reported losses: {}.", days),
        None => "Days without reported losses: unknown.".to_string(),
    }
}

/// Label of the recent-losses toggle button.
pub fn recent_toggle_label(showing: bool) -> &'static str {
    if showing {
        "Hide Recent Losses"
    } else {
        "Show Recent Losses"
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StatusRow {
    pub status: String,
    pub count: u64,
}

impl StatusRow {
    pub fn label(&self) -> String {
        format!("{}: {}", self.status, self.count)
    }
}

/// Column headers of the counts-by-type table.
pub const TYPE_TABLE_HEADERS: [&str; 5] = ["Type", "Losses", "New Losses", "Damaged", "New Damaged"];

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TypeRow {
    pub type_name: String,
    pub losses: u64,
    pub losses_new: u64,
    pub damaged: u64,
    pub damaged_new: u64,
}

impl TypeRow {
    /// Cells in [`TYPE_TABLE_HEADERS`] order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.type_name.clone(),
            self.losses.to_string(),
            self.losses_new.to_string(),
            self.damaged.to_string(),
            self.damaged_new.to_string(),
        ]
    }
}

/// Status list in feed order.
pub fn status_rows(stats: &StatsSummary) -> Vec<StatusRow> {
    stats
        .counts_by_status
        .iter()
        .map(|s| StatusRow {
            status: s.status.clone(),
            count: s.count,
        })
        .collect()
}

/// Type table in feed order; duplicates are shown as they come.
pub fn type_rows(stats: &StatsSummary) -> Vec<TypeRow> {
    stats
        .counts_by_type
        .iter()
        .map(|t| TypeRow {
            type_name: t.type_name.clone(),
            losses: t.counts.losses,
            losses_new: t.counts.losses_new,
            damaged: t.counts.damaged,
            damaged_new: t.counts.damaged_new,
        })
        .collect()
}
