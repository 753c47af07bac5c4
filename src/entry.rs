//! History entry record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::EntryId;

/// One committed calculation. Immutable once created by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Monotonic identifier.
    pub id: EntryId,
    /// Expression label, e.g. `7 + 5` or `√(16)`.
    pub expression: String,
    /// Numeric result; non-finite values are stored as numeral strings.
    #[serde(with = "result_value")]
    pub result: f64,
    /// Commit time, serialized as RFC 3339.
    pub timestamp: DateTime<Utc>,
}

/// JSON has no infinities or NaN. Finite results are plain numbers, the rest
/// are written as `"Infinity"`, `"-Infinity"` or `"NaN"`. On read, `null`
/// (what a browser writes for those values) becomes NaN.
mod result_value {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::format::numeral_text;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&numeral_text(*value))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Option::<Stored>::deserialize(deserializer)? {
            Some(Stored::Number(v)) => Ok(v),
            Some(Stored::Text(text)) => text
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid result {text:?}"))),
            None => Ok(f64::NAN),
        }
    }
}
