//! Native-window entry point.
//!
//! [`run_fred_chart`] is the explicit-argument API: the payload is passed in
//! directly rather than read from the process-wide field (see [`crate::host`]
//! for that thin adapter). The call blocks until the window is closed.

use crate::config::FredChartConfig;
use crate::error::ChartError;
use crate::payload::ChartPayload;

use super::FredChartApp;

/// Open the dual-pane chart in a native window and block until it is closed.
pub fn run_fred_chart(payload: &ChartPayload, mut cfg: FredChartConfig) -> Result<(), ChartError> {
    let mut opts = cfg.native_options.take().unwrap_or_default();

    // Default window sized to the two fixed pane heights plus chrome.
    if opts.viewport.inner_size.is_none() {
        let height = cfg.main_layout.height + cfg.mini_layout.height + 60.0;
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(960.0, height));
    }

    let title = cfg.title.clone();
    let app = FredChartApp::new(payload, cfg)?;
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}
