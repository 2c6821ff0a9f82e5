use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::FeedError;

/// One `status: count` entry.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

/// `counts_by_status` in the order the feed listed the keys.
///
/// Decoded by hand because a `HashMap` would lose that order.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct StatusCounts(pub Vec<StatusCount>);

impl StatusCounts {
    pub fn iter(&self) -> impl Iterator<Item = &StatusCount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, status: &str) -> Option<u64> {
        self.0.iter().find(|s| s.status == status).map(|s| s.count)
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|s| s.count).sum()
    }
}

struct StatusCountsVisitor;

impl<'de> Visitor<'de> for StatusCountsVisitor {
    type Value = StatusCounts;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of status label to count")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<StatusCount> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((status, count)) = access.next_entry::<String, u64>()? {
            // A repeated key overwrites in place, like a JS object would.
            match entries.iter_mut().find(|e| e.status == status) {
                Some(existing) => existing.count = count,
                None => entries.push(StatusCount { status, count }),
            }
        }
        Ok(StatusCounts(entries))
    }
}

impl<'de> Deserialize<'de> for StatusCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StatusCountsVisitor)
    }
}

impl Serialize for StatusCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.status, &entry.count)?;
        }
        map.end()
    }
}

/// Per-type counters. Missing members count as zero.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Counts {
    #[serde(default)]
    pub losses: u64,
    #[serde(default)]
    pub losses_new: u64,
    #[serde(default)]
    pub damaged: u64,
    #[serde(default)]
    pub damaged_new: u64,
}

/// One row of `counts_by_type`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct TypeCounts {
    pub type_name: String,
    #[serde(default)]
    pub counts: Counts,
}

/// Body of `GET /api/stats/<country>/`.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub counts_by_status: StatusCounts,
    #[serde(default)]
    pub counts_by_type: Vec<TypeCounts>,
}

impl StatsSummary {
    pub fn from_json(body: &str) -> Result<Self, FeedError> {
        let summary: StatsSummary = serde_json::from_str(body)?;
        log::debug!(
            "decoded stats: {} statuses, {} types",
            summary.counts_by_status.len(),
            summary.counts_by_type.len()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS_JSON: &str = r#"{
        "counts_by_status": {
            "Destroyed": 11950,
            "Abandoned": 1042,
            "Captured": 1533,
            "Damaged": 2380
        },
        "counts_by_type": [
            {
                "type_name": "Tanks",
                "counts": {"losses": 3200, "losses_new": 4, "damaged": 410, "damaged_new": 1}
            },
            {
                "type_name": "Artillery",
                "counts": {"losses": 1700, "damaged": 230}
            }
        ]
    }"#;

    #[test]
    fn test_decode_stats_preserves_status_order() {
        let summary = StatsSummary::from_json(STATS_JSON).unwrap();
        let labels: Vec<&str> = summary
            .counts_by_status
            .iter()
            .map(|s| s.status.as_str())
            .collect();
        // Not alphabetical: source order.
        assert_eq!(labels, vec!["Destroyed", "Abandoned", "Captured", "Damaged"]);
        assert_eq!(summary.counts_by_status.get("Captured"), Some(1533));
        assert_eq!(summary.counts_by_status.total(), 11950 + 1042 + 1533 + 2380);
    }

    #[test]
    fn test_decode_type_counts_defaults() {
        let summary = StatsSummary::from_json(STATS_JSON).unwrap();
        assert_eq!(summary.counts_by_type.len(), 2);
        assert_eq!(summary.counts_by_type[0].type_name, "Tanks");
        assert_eq!(summary.counts_by_type[0].counts.losses_new, 4);
        let artillery = &summary.counts_by_type[1].counts;
        assert_eq!(artillery.losses, 1700);
        assert_eq!(artillery.losses_new, 0);
        assert_eq!(artillery.damaged_new, 0);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let body = r#"{"counts_by_status": {"Destroyed": -1}, "counts_by_type": []}"#;
        assert!(matches!(StatsSummary::from_json(body), Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_status_counts_serialize_in_order() {
        let counts = StatusCounts(vec![
            StatusCount { status: "Z".to_string(), count: 1 },
            StatusCount { status: "A".to_string(), count: 2 },
        ]);
        assert_eq!(serde_json::to_string(&counts).unwrap(), r#"{"Z":1,"A":2}"#);
    }

    #[test]
    fn test_duplicate_status_keeps_first_position() {
        let body = r#"{"counts_by_status": {"A": 1, "B": 2, "A": 3}}"#;
        let summary = StatsSummary::from_json(body).unwrap();
        assert_eq!(
            summary.counts_by_status.0,
            vec![
                StatusCount { status: "A".to_string(), count: 3 },
                StatusCount { status: "B".to_string(), count: 2 },
            ]
        );
    }
}
