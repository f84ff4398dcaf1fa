//! Timestamp parsing and x-axis tick formatting.
//!
//! All timestamps are epoch seconds in UTC. Payload date strings carry no
//! timezone, so they are interpreted as UTC and formatted as UTC; this keeps
//! the axis labels identical to the payload's own date strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::ChartError;
use crate::payload::TimeStamp;

pub const SECS_PER_DAY: f64 = 86_400.0;

/// Visible spans below this gain a time-of-day part in `Auto` tick format.
pub const AUTO_TIME_SPAN_SECS: f64 = 3.0 * SECS_PER_DAY;

/// Resolve one payload time entry to epoch seconds.
///
/// Accepted string forms, tried in order: RFC 3339, `%Y-%m-%dT%H:%M:%S`,
/// `%Y-%m-%d %H:%M:%S`, `%Y-%m-%d`.
pub fn parse_timestamp(ts: &TimeStamp) -> Result<f64, ChartError> {
    match ts {
        TimeStamp::Epoch(secs) => Ok(*secs),
        TimeStamp::Text(text) => parse_timestamp_str(text)
            .ok_or_else(|| ChartError::InvalidTimestamp(text.clone())),
    }
}

fn parse_timestamp_str(text: &str) -> Option<f64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp() as f64);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(ndt.and_utc().timestamp() as f64);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp() as f64);
    }
    None
}

/// Format an x value (epoch seconds) as a date tick label.
pub fn format_date(x: f64) -> String {
    to_utc(x).format("%Y-%m-%d").to_string()
}

/// Format an x value (epoch seconds) as a date+time tick label.
pub fn format_date_time(x: f64) -> String {
    to_utc(x).format("%Y-%m-%d %H:%M").to_string()
}

/// Format an x value picking the resolution from the visible span.
pub fn format_auto(x: f64, span_secs: f64) -> String {
    if span_secs.is_finite() && span_secs > 0.0 && span_secs < AUTO_TIME_SPAN_SECS {
        format_date_time(x)
    } else {
        format_date(x)
    }
}

fn to_utc(x: f64) -> DateTime<chrono::Utc> {
    let secs = x.floor() as i64;
    let nsecs = ((x - secs as f64) * 1e9) as u32;
    DateTime::from_timestamp(secs, nsecs)
        .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap_or_default())
}
