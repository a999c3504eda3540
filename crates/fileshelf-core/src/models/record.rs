use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One uploaded file as returned by `GET /files/all`.
///
/// `created_date` is kept as the raw wire string and parsed on demand: a
/// record with a malformed timestamp must still be searchable by text, it is
/// only ineligible for bounded date windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_path: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub created_date: String,
    // The portal backend serializes the owning account under `user`.
    #[serde(alias = "user")]
    pub owner: RecordOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOwner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl RecordOwner {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl FileRecord {
    /// The record's creation instant truncated to a calendar day, or `None`
    /// when the field is absent or unparseable.
    #[must_use]
    pub fn created_day(&self) -> Option<NaiveDate> {
        parse_created_day(&self.created_date)
    }
}

/// Accepts RFC 3339 (the backend's normal output), a naive datetime without
/// offset, or a bare date. Anything else is treated as absent.
fn parse_created_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
