//! Metric record - the one persisted entity.

use crate::Time;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One logged metric event.
///
/// Records are immutable once appended to the log; append order is the
/// canonical order, which in practice tracks timestamp order but is not
/// guaranteed to (clock skew, hand-edited files).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricRecord {
    /// When the event was logged (wall-clock at construction).
    pub timestamp: Time,

    /// Free-form type tag grouping related events (e.g. "build_time").
    #[serde(rename = "type")]
    pub kind: String,

    /// The measured value.
    pub value: f64,

    /// Arbitrary extra fields, flattened into the record object.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl MetricRecord {
    /// Create a record stamped with the current time.
    ///
    /// Metadata keys that collide with the built-in fields overwrite them
    /// when the value has the right shape (an RFC 3339 string for
    /// `timestamp`, a string for `type`, a number for `value`). Colliding
    /// values of the wrong shape are dropped so the serialized line never
    /// carries duplicate keys.
    pub fn new(kind: impl Into<String>, value: f64, metadata: Map<String, Value>) -> Self {
        let mut record = Self {
            timestamp: chrono::Utc::now(),
            kind: kind.into(),
            value,
            metadata: Map::new(),
        };

        for (key, val) in metadata {
            match key.as_str() {
                "timestamp" => {
                    if let Some(ts) = val
                        .as_str()
                        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
                    {
                        record.timestamp = ts.with_timezone(&chrono::Utc);
                    }
                }
                "type" => {
                    if let Some(kind) = val.as_str() {
                        record.kind = kind.to_string();
                    }
                }
                "value" => {
                    if let Some(v) = val.as_f64() {
                        record.value = v;
                    }
                }
                _ => {
                    record.metadata.insert(key, val);
                }
            }
        }

        record
    }
}

/// Human-facing name for a metric kind: underscore-separated tokens become
/// capitalized, space-separated words ("build_time" -> "Build Time").
pub fn display_name(kind: &str) -> String {
    kind.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
