//! Error type for payload decoding and chart startup.
//!
//! All of these are non-fatal to the host: the entry points in [`crate::host`]
//! log them to stderr and return instead of panicking.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The process-wide payload field was never set by the host.
    #[error("no chart payload has been provided by the host")]
    MissingPayload,

    /// The payload field is present but is not valid JSON for [`crate::ChartPayload`].
    #[error("chart payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// A `time` entry could not be resolved to a timestamp.
    #[error("unparseable timestamp in payload: {0:?}")]
    InvalidTimestamp(String),

    /// The native chart window could not be created.
    #[error("failed to open chart window: {0}")]
    Window(#[from] eframe::Error),
}
