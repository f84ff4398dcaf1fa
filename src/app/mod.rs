//! The eframe application owning the two chart panes.
//!
//! Rendering is immediate-mode: each frame the mini pane (bottom panel) and
//! the main pane (central panel) are drawn from the shared trace set, and
//! user-driven range changes are relayed through [`RangeSync`]. Updates for
//! the main pane are queued and applied on the next frame via
//! `set_plot_bounds_x` (the relayout primitive); the mini pane's slider band
//! tracks the synchronizer state directly.

mod main_pane;
mod mini_pane;
pub mod run;

use crate::config::FredChartConfig;
use crate::data::traces::{build_traces, y_extent, Domain, Trace};
use crate::error::ChartError;
use crate::payload::ChartPayload;
use crate::sync::{Pane, RangeSync, RangeUpdate};

pub use mini_pane::SliderDrag;

pub struct FredChartApp {
    cfg: FredChartConfig,
    traces: Vec<Trace>,
    domain: Option<Domain>,
    /// `None` when the time sequence is empty; both panes then auto-range.
    sync: Option<RangeSync>,
    y_extent: Option<(f64, f64)>,
    /// Queued relayout for the main pane, applied on the next frame.
    pending_main: Option<(f64, f64)>,
    /// Fit the main pane's y-axis once on the first frame.
    fit_main_y: bool,
    mini_drag: Option<SliderDrag>,
}

impl FredChartApp {
    /// Build the app from a decoded payload. Traces are derived here, once;
    /// they are never recomputed on range changes.
    pub fn new(payload: &ChartPayload, cfg: FredChartConfig) -> Result<Self, ChartError> {
        let (traces, domain) = build_traces(payload)?;
        Ok(Self {
            cfg,
            y_extent: y_extent(&traces),
            domain,
            sync: domain.map(RangeSync::new),
            // Both panes start at the full domain.
            pending_main: domain,
            fit_main_y: true,
            mini_drag: None,
            traces,
        })
    }

    /// Queue a relayout returned by the synchronizer for the target pane.
    fn relay(&mut self, update: Option<RangeUpdate>) {
        if let Some(update) = update {
            match update.pane {
                Pane::Main => self.pending_main = Some(update.range),
                // The slider band is drawn from RangeSync state each frame,
                // so a mini-pane update needs no explicit application.
                Pane::Mini => {}
            }
        }
    }
}

impl eframe::App for FredChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mini_height = self.cfg.mini_layout.height;
        egui::TopBottomPanel::bottom("mini_pane")
            .exact_height(mini_height)
            .show(ctx, |ui| self.show_mini_pane(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.show_main_pane(ui));
    }
}
