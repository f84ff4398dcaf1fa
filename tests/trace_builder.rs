use chrono::NaiveDate;
use fredchart::{build_traces, ChartPayload};

fn day_secs(y: i32, m: u32, d: u32) -> f64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp() as f64
}

#[test]
fn domain_is_first_and_last_timestamp() {
    let payload = ChartPayload::decode(
        r#"{"time": ["2020-01-01", "2020-01-02", "2020-01-03"], "series": {}}"#,
    )
    .unwrap();
    let (_, domain) = build_traces(&payload).unwrap();
    assert_eq!(domain, Some((day_secs(2020, 1, 1), day_secs(2020, 1, 3))));
}

#[test]
fn empty_time_yields_no_domain_and_empty_traces() {
    let payload =
        ChartPayload::decode(r#"{"time": [], "series": {"CPI": [1.0, 2.0]}}"#).unwrap();
    let (traces, domain) = build_traces(&payload).unwrap();
    assert_eq!(domain, None);
    assert_eq!(traces.len(), 1);
    assert!(traces[0].points.is_empty());
}

#[test]
fn omitted_indicators_follow_series_key_order() {
    let payload = ChartPayload::decode(
        r#"{"time": ["2021-06-01"], "series": {"GDP": [1.0], "CPI": [2.0], "M2": [3.0]}}"#,
    )
    .unwrap();
    let (traces, _) = build_traces(&payload).unwrap();
    let names: Vec<&str> = traces.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["GDP", "CPI", "M2"]);
}

#[test]
fn explicit_indicators_set_count_and_order_with_missing_series_empty() {
    let payload = ChartPayload::decode(
        r#"{"time": ["2021-06-01", "2021-07-01"],
            "series": {"CPI": [1.0, 2.0]},
            "indicators": ["Nope", "CPI"]}"#,
    )
    .unwrap();
    let (traces, _) = build_traces(&payload).unwrap();
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0].name, "Nope");
    assert!(traces[0].points.is_empty());
    assert_eq!(traces[1].name, "CPI");
    assert_eq!(traces[1].points.len(), 2);
}

#[test]
fn short_series_produce_truncated_traces() {
    let payload = ChartPayload::decode(
        r#"{"time": ["2021-06-01", "2021-07-01", "2021-08-01"], "series": {"CPI": [1.5]}}"#,
    )
    .unwrap();
    let (traces, _) = build_traces(&payload).unwrap();
    assert_eq!(traces[0].points, vec![[day_secs(2021, 6, 1), 1.5]]);
}

#[test]
fn cpi_scenario_one_trace_full_domain() {
    let payload = ChartPayload::decode(
        r#"{"time": ["2020-01-01", "2020-01-02", "2020-01-03"], "series": {"CPI": [1, 2, 3]}}"#,
    )
    .unwrap();
    let (traces, domain) = build_traces(&payload).unwrap();
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0].name, "CPI");
    let ys: Vec<f64> = traces[0].points.iter().map(|p| p[1]).collect();
    assert_eq!(ys, vec![1.0, 2.0, 3.0]);
    assert_eq!(domain, Some((day_secs(2020, 1, 1), day_secs(2020, 1, 3))));
}

#[test]
fn traces_default_to_fixed_line_weight() {
    let payload = ChartPayload::decode(
        r#"{"time": ["2020-01-01"], "series": {"CPI": [1.0]}}"#,
    )
    .unwrap();
    let (traces, _) = build_traces(&payload).unwrap();
    assert_eq!(traces[0].look.width, 2.4);
    assert!(traces[0].look.color.is_none());
}
