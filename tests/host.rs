use fredchart::{try_render_fred_chart, ChartError};

// Both failure paths share the process-wide payload slot, so they are
// exercised in order within a single test.
#[test]
fn initialization_aborts_before_any_chart_creation() {
    // No payload set: abort with MissingPayload.
    let err = try_render_fred_chart().unwrap_err();
    assert!(matches!(err, ChartError::MissingPayload), "got: {err}");

    // Payload set but not valid JSON: abort with InvalidPayload,
    // still without opening a window.
    fredchart::set_payload("{{ definitely not json");
    let err = try_render_fred_chart().unwrap_err();
    assert!(matches!(err, ChartError::InvalidPayload(_)), "got: {err}");
}
