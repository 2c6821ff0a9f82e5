use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::FeedError;

/// Record identifier. The feed sends integers, some mirrors send strings.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LossId {
    Number(i64),
    Text(String),
}

impl fmt::Display for LossId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossId::Number(n) => write!(f, "{}", n),
            LossId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for LossId {
    fn from(n: i64) -> Self {
        LossId::Number(n)
    }
}

impl From<&str> for LossId {
    fn from(s: &str) -> Self {
        LossId::Text(s.to_string())
    }
}

/// A single reported equipment loss.
///
/// Free-text fields are opaque; `null` or missing values decode to an empty
/// string so that rendering never has to care.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LossRecord {
    pub id: LossId,
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lost_by: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: String,
    /// Raw date as sent by the feed; see [`LossRecord::parsed_date`].
    #[serde(default, deserialize_with = "string_or_none")]
    pub date: Option<String>,
    /// "<lat>,<lon>", absent when the loss was never geolocated.
    #[serde(default, deserialize_with = "string_or_none")]
    pub geo: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nearest_location: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep strings, drop any other JSON type so one odd record cannot reject
/// the whole feed.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(other) => {
            log::debug!("ignoring non-string field value {}", other);
            Ok(None)
        }
        None => Ok(None),
    }
}

impl LossRecord {
    /// A record with only an id; the remaining fields are empty.
    pub fn new(id: impl Into<LossId>) -> Self {
        Self {
            id: id.into(),
            kind: String::new(),
            model: String::new(),
            status: String::new(),
            lost_by: String::new(),
            tags: String::new(),
            date: None,
            geo: None,
            nearest_location: String::new(),
        }
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn with_geo(mut self, geo: &str) -> Self {
        self.geo = Some(geo.to_string());
        self
    }

    /// Calendar date of the loss, `None` when missing or unparseable.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| wld_utils::dates::parse_date(d).ok())
    }

    /// The raw `geo` string when present and not blank.
    pub fn geo_str(&self) -> Option<&str> {
        self.geo.as_deref().map(str::trim).filter(|g| !g.is_empty())
    }

    /// Display form of the date, the raw string when it does not parse.
    pub fn date_label(&self) -> String {
        match (self.parsed_date(), self.date.as_deref()) {
            (Some(date), _) => wld_utils::dates::format_date(&date),
            (None, Some(raw)) => raw.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Body of `GET /api/losses/<country>/`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LossesResponse {
    #[serde(default)]
    pub losses: Vec<LossRecord>,
}

impl LossesResponse {
    /// Decode a losses payload. Order is kept exactly as the feed sent it.
    pub fn from_json(body: &str) -> Result<Self, FeedError> {
        let response: LossesResponse = serde_json::from_str(body)?;
        log::debug!("decoded {} loss records", response.losses.len());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed sample of https://ukr.warspotting.net/api/losses/russia/
    const LOSSES_JSON: &str = r#"{
        "losses": [
            {
                "id": 31004,
                "type": "Tanks",
                "model": "T-72B3 obr. 2016",
                "status": "Destroyed",
                "lost_by": "Russia",
                "date": "2024-01-06",
                "nearest_location": "Avdiivka",
                "geo": "48.1427,37.7512",
                "unit": null,
                "tags": "ATGM",
                "photos": ["a.jpg"]
            },
            {
                "id": "31003",
                "type": "Infantry fighting vehicles",
                "model": "BMP-2",
                "status": "Damaged",
                "lost_by": "Russia",
                "date": "2024-01-05",
                "nearest_location": null,
                "geo": null,
                "tags": null
            },
            {
                "id": 31002,
                "type": "Trucks",
                "model": "Ural-4320",
                "status": "Abandoned",
                "lost_by": "Russia"
            }
        ]
    }"#;

    #[test]
    fn test_decode_losses_keeps_order_and_tolerates_nulls() {
        let response = LossesResponse::from_json(LOSSES_JSON).unwrap();
        let ids: Vec<String> = response.losses.iter().map(|l| l.id.to_string()).collect();
        assert_eq!(ids, vec!["31004", "31003", "31002"]);

        let first = &response.losses[0];
        assert_eq!(first.id, LossId::Number(31004));
        assert_eq!(first.kind, "Tanks");
        assert_eq!(first.geo_str(), Some("48.1427,37.7512"));
        assert_eq!(first.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 6));

        let second = &response.losses[1];
        assert_eq!(second.id, LossId::Text("31003".to_string()));
        assert_eq!(second.nearest_location, "");
        assert_eq!(second.tags, "");
        assert_eq!(second.geo_str(), None);

        let third = &response.losses[2];
        assert_eq!(third.date, None);
        assert_eq!(third.parsed_date(), None);
        assert_eq!(third.date_label(), "");
    }

    #[test]
    fn test_wrong_typed_date_or_geo_drops_only_that_field() {
        let body = r#"{"losses": [
            {"id": 1, "type": "Tanks", "date": "2024-01-02", "geo": [48.1, 37.7]},
            {"id": 2, "type": "Trucks", "date": 20240102, "geo": "47.0,35.0"},
            {"id": 3, "type": "Artillery", "date": "2024-01-03", "geo": "46.5,32.6"}
        ]}"#;
        let response = LossesResponse::from_json(body).unwrap();
        assert_eq!(response.losses.len(), 3);

        let array_geo = &response.losses[0];
        assert_eq!(array_geo.geo, None);
        assert_eq!(array_geo.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 2));

        let numeric_date = &response.losses[1];
        assert_eq!(numeric_date.date, None);
        assert_eq!(numeric_date.geo_str(), Some("47.0,35.0"));

        let valid = &response.losses[2];
        assert_eq!(valid.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 3));
        assert_eq!(valid.geo_str(), Some("46.5,32.6"));
    }

    #[test]
    fn test_malformed_payload_is_parse_error() {
        assert!(matches!(
            LossesResponse::from_json("<html>502</html>"),
            Err(FeedError::Parse(_))
        ));
        assert!(matches!(
            LossesResponse::from_json(r#"{"losses": [{"type": "Tanks"}]}"#),
            Err(FeedError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_losses_key_is_empty() {
        let response = LossesResponse::from_json("{}").unwrap();
        assert!(response.losses.is_empty());
    }

    #[test]
    fn test_blank_geo_and_bad_date() {
        let record = LossRecord::new(7).with_geo("   ").with_date("soon");
        assert_eq!(record.geo_str(), None);
        assert_eq!(record.parsed_date(), None);
        assert_eq!(record.date_label(), "soon");
    }
}
