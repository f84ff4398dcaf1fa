use chrono::NaiveDate;
use fredchart::{Pane, RangeChange, RangeSync, RangeUpdate};

fn day_secs(y: i32, m: u32, d: u32) -> f64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp() as f64
}

#[test]
fn initial_state_is_full_domain_on_both_panes() {
    let sync = RangeSync::new((0.0, 100.0));
    assert_eq!(sync.main_range(), (0.0, 100.0));
    assert_eq!(sync.slider_window(), (0.0, 100.0));
}

#[test]
fn main_change_moves_only_the_slider_window() {
    let mut sync = RangeSync::new((0.0, 100.0));
    let update = sync.on_main_change(RangeChange::new(10.0, 20.0));
    assert_eq!(
        update,
        Some(RangeUpdate {
            pane: Pane::Mini,
            range: (10.0, 20.0)
        })
    );
    assert_eq!(sync.slider_window(), (10.0, 20.0));
    // The main range reflects the user's own change, untouched by propagation.
    assert_eq!(sync.main_range(), (10.0, 20.0));
}

#[test]
fn mini_change_moves_the_main_range() {
    let mut sync = RangeSync::new((0.0, 100.0));
    let update = sync.on_mini_change(RangeChange::new(40.0, 60.0));
    assert_eq!(
        update,
        Some(RangeUpdate {
            pane: Pane::Main,
            range: (40.0, 60.0)
        })
    );
    assert_eq!(sync.main_range(), (40.0, 60.0));
}

#[test]
fn notification_missing_either_bound_is_ignored() {
    let mut sync = RangeSync::new((0.0, 100.0));
    let only_start = RangeChange {
        start: Some(10.0),
        end: None,
    };
    let only_end = RangeChange {
        start: None,
        end: Some(20.0),
    };
    assert_eq!(sync.on_main_change(only_start), None);
    assert_eq!(sync.on_main_change(only_end), None);
    assert_eq!(sync.on_mini_change(RangeChange::default()), None);
    assert_eq!(sync.main_range(), (0.0, 100.0));
    assert_eq!(sync.slider_window(), (0.0, 100.0));
}

#[test]
fn echo_of_a_propagated_range_does_not_cycle() {
    let mut sync = RangeSync::new((0.0, 100.0));
    let update = sync.on_main_change(RangeChange::new(10.0, 20.0)).unwrap();

    // The rendering layer fires a notification for our own relayout of the
    // mini pane; it must be swallowed, not bounced back to the main pane.
    let echo = RangeChange::new(update.range.0, update.range.1);
    assert_eq!(sync.on_mini_change(echo), None);
    assert_eq!(sync.main_range(), (10.0, 20.0));
    assert_eq!(sync.slider_window(), (10.0, 20.0));
}

#[test]
fn repeated_identical_user_ranges_are_no_ops() {
    let mut sync = RangeSync::new((0.0, 100.0));
    assert!(sync.on_main_change(RangeChange::new(10.0, 20.0)).is_some());
    assert_eq!(sync.on_main_change(RangeChange::new(10.0, 20.0)), None);
}

#[test]
fn drag_scenario_with_date_ranges() {
    let full = (day_secs(2020, 1, 1), day_secs(2020, 1, 3));
    let mut sync = RangeSync::new(full);

    // User drags the main chart to [2020-01-02, 2020-01-03].
    let zoomed = (day_secs(2020, 1, 2), day_secs(2020, 1, 3));
    let update = sync
        .on_main_change(RangeChange::new(zoomed.0, zoomed.1))
        .unwrap();
    assert_eq!(update.pane, Pane::Mini);
    assert_eq!(update.range, zoomed);
    assert_eq!(sync.slider_window(), zoomed);

    // User then drags the slider window back to the full domain.
    let update = sync.on_mini_change(RangeChange::new(full.0, full.1)).unwrap();
    assert_eq!(update.pane, Pane::Main);
    assert_eq!(sync.main_range(), full);
}
