use chrono::NaiveDate;
use fredchart::XDateFormat;

const DAY: f64 = 86_400.0;

fn day_secs(y: i32, m: u32, d: u32) -> f64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp() as f64
}

#[test]
fn auto_uses_date_only_for_wide_spans() {
    let x = day_secs(2020, 1, 1);
    assert_eq!(XDateFormat::Auto.format_value(x, 30.0 * DAY), "2020-01-01");
}

#[test]
fn auto_adds_time_below_three_days() {
    let x = day_secs(2020, 1, 1) + 6.5 * 3600.0;
    assert_eq!(XDateFormat::Auto.format_value(x, 2.0 * DAY), "2020-01-01 06:30");
}

#[test]
fn explicit_formats_ignore_span() {
    let x = day_secs(2021, 12, 31) + 23.0 * 3600.0;
    assert_eq!(XDateFormat::Date.format_value(x, 1.0), "2021-12-31");
    assert_eq!(
        XDateFormat::DateTime.format_value(x, 365.0 * DAY),
        "2021-12-31 23:00"
    );
}
