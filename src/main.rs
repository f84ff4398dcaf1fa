//! Demo host shim for the dual-pane chart.
//!
//! Reads a payload JSON document from the first CLI argument (a file path) or
//! the `FRED_CHART_PAYLOAD` environment variable, falling back to a built-in
//! sample of monthly indicator series.

use chrono::{Datelike, NaiveDate};
use serde_json::json;

fn main() {
    let payload_json = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("fredchart: failed to read payload file {path:?}: {e}");
                return;
            }
        },
        None => match std::env::var("FRED_CHART_PAYLOAD") {
            Ok(text) => text,
            Err(_) => sample_payload(),
        },
    };

    fredchart::set_payload(payload_json);
    fredchart::render_fred_chart();
}

/// Monthly sample series from 2015 through 2024.
fn sample_payload() -> String {
    let mut time = Vec::new();
    let mut cpi = Vec::new();
    let mut unemployment = Vec::new();
    let mut fed_funds = Vec::new();

    let mut date = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or_default();
    let mut i = 0f64;
    while date.year() < 2025 {
        time.push(date.format("%Y-%m-%d").to_string());
        cpi.push(236.0 + i * 0.65 + (i * 0.4).sin() * 1.8);
        unemployment.push(5.0 + (i * 0.13).sin() * 1.6 + (i * 0.031).cos());
        fed_funds.push((0.25 + i * 0.035 + (i * 0.09).sin()).max(0.05));

        let (y, m) = if date.month() == 12 {
            (date.year() + 1, 1)
        } else {
            (date.year(), date.month() + 1)
        };
        date = NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(date);
        i += 1.0;
    }

    json!({
        "time": time,
        "series": {
            "CPI": cpi,
            "Unemployment": unemployment,
            "Fed Funds Rate": fed_funds,
        },
        "indicators": ["CPI", "Unemployment", "Fed Funds Rate"],
    })
    .to_string()
}
