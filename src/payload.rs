//! The JSON payload boundary.
//!
//! The host hands over a single JSON document of the shape
//!
//! ```json
//! { "time": ["2020-01-01", ...],
//!   "series": { "CPI": [1.0, 2.0, ...], ... },
//!   "indicators": ["CPI", ...] }
//! ```
//!
//! `indicators` is optional; when absent or empty, all `series` keys are
//! plotted in mapping order. Validation happens here, once: timestamps are
//! resolved up front so the rendering layer never deals with raw strings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::time::parse_timestamp;
use crate::error::ChartError;

/// One entry of the `time` sequence: either a date/datetime string or a
/// numeric epoch value (seconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeStamp {
    Epoch(f64),
    Text(String),
}

/// The decoded chart payload. Parsed once at startup, immutable thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartPayload {
    /// Shared x sequence for all traces.
    #[serde(default)]
    pub time: Vec<TimeStamp>,
    /// Named value sequences; each should match `time` in length (shorter
    /// sequences are truncated, missing ones become empty traces).
    #[serde(default)]
    pub series: IndexMap<String, Vec<f64>>,
    /// Subset and order of series to plot. `None` or `[]` means all keys of
    /// `series` in mapping order.
    #[serde(default)]
    pub indicators: Option<Vec<String>>,
}

impl ChartPayload {
    /// Decode a payload from its JSON text form.
    pub fn decode(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The resolved indicator list: `indicators` if present and non-empty,
    /// else all series keys in mapping order.
    pub fn indicator_names(&self) -> Vec<String> {
        match &self.indicators {
            Some(names) if !names.is_empty() => names.clone(),
            _ => self.series.keys().cloned().collect(),
        }
    }

    /// Resolve the `time` sequence to epoch seconds.
    pub fn resolve_time(&self) -> Result<Vec<f64>, ChartError> {
        self.time.iter().map(parse_timestamp).collect()
    }
}
