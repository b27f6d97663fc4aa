//! Detections: objects recognised in a camera's frames by the backend.
//!
//! Records are rendered, never stored: each poll rebuilds the table from
//! the latest response.

use serde::{Deserialize, Deserializer, Serialize};

/// How many detection records the table shows, newest first as served.
pub const MAX_DETECTION_RECORDS: usize = 10;

/// One recognised object inside a detection record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    pub class_name: String,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
}

/// One polling result: the objects seen at a given date and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub detection_date: String,
    pub detection_time: String,
    /// Missing and `null` both mean no objects.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub detections: Vec<DetectedObject>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DetectedObject>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<DetectedObject>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The shapes the detections endpoint has been seen to return.
///
/// Normalized into a plain `Vec` by [`DetectionsPayload::into_records`]
/// before any rendering logic looks at it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DetectionsPayload {
    Many(Vec<DetectionRecord>),
    One(DetectionRecord),
}

impl DetectionsPayload {
    /// Flatten the payload into a sequence of records, preserving server order.
    #[must_use]
    pub fn into_records(self) -> Vec<DetectionRecord> {
        match self {
            Self::Many(records) => records,
            Self::One(record) => vec![record],
        }
    }
}

/// Normalize an optional payload (`null` bodies decode to `None`).
#[must_use]
pub fn normalize(payload: Option<DetectionsPayload>) -> Vec<DetectionRecord> {
    payload.map(DetectionsPayload::into_records).unwrap_or_default()
}

/// Decode a raw detections response body.
///
/// An empty body means no records, like `null`.
///
/// # Errors
///
/// Returns the `serde_json` error when the body is neither blank nor one of
/// the [`DetectionsPayload`] shapes.
pub fn parse_body(body: &str) -> Result<Vec<DetectionRecord>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Option<DetectionsPayload>>(body).map(normalize)
}

/// A single table row: one detected object with its record's date and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRow {
    pub date: String,
    pub time: String,
    pub class_name: String,
    /// Confidence as a percentage with one decimal, e.g. `"87.3%"`.
    pub confidence: String,
}

/// Format a `[0, 1]` confidence as a one-decimal percentage.
#[must_use]
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Take the first [`MAX_DETECTION_RECORDS`] records and emit one row per
/// detected object. Records without objects contribute no rows.
#[must_use]
pub fn flatten(records: &[DetectionRecord]) -> Vec<DetectionRow> {
    records
        .iter()
        .take(MAX_DETECTION_RECORDS)
        .flat_map(|record| {
            record.detections.iter().map(|object| DetectionRow {
                date: record.detection_date.clone(),
                time: record.detection_time.clone(),
                class_name: object.class_name.clone(),
                confidence: format_confidence(object.confidence),
            })
        })
        .collect()
}
