//! Host bridge: the process-wide payload field and re-runnable entry point.
//!
//! The original host injects a JSON-encoded payload into an ambient global
//! before invoking initialization. This module reproduces that contract as a
//! thin adapter: [`set_payload`] stores the JSON text, [`render_fred_chart`]
//! reads it, decodes it and opens the chart. The core API
//! ([`crate::run_fred_chart`]) takes the payload explicitly and knows nothing
//! about the global.

use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::app::run::run_fred_chart;
use crate::config::FredChartConfig;
use crate::error::ChartError;
use crate::payload::ChartPayload;

static HOST_PAYLOAD: Lazy<RwLock<Option<String>>> = Lazy::new(|| RwLock::new(None));

/// Store the JSON payload for the next [`render_fred_chart`] call.
/// Overwrites any previous value; read at initialization time only.
pub fn set_payload<S: Into<String>>(json: S) {
    let mut slot = HOST_PAYLOAD.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(json.into());
}

/// Whether the host has provided a payload.
pub fn payload_is_set() -> bool {
    HOST_PAYLOAD
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .is_some()
}

/// (Re)run chart initialization from the process-wide payload field,
/// surfacing any failure to the caller.
pub fn try_render_fred_chart() -> Result<(), ChartError> {
    let json = HOST_PAYLOAD
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
        .ok_or(ChartError::MissingPayload)?;
    let payload = ChartPayload::decode(&json)?;
    run_fred_chart(&payload, FredChartConfig::default())
}

/// (Re)run chart initialization from the process-wide payload field.
///
/// All failures (missing field, malformed payload, window creation) are
/// logged to stderr and swallowed; nothing propagates to the host.
pub fn render_fred_chart() {
    if let Err(e) = try_render_fred_chart() {
        eprintln!("fredchart: chart initialization aborted: {e}");
    }
}
