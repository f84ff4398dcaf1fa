//! Main chart pane: legend, value-axis grid, pan/zoom with a date axis.

use egui::Vec2b;
use egui_plot::{Corner, Legend, Line, Plot};

use crate::sync::RangeChange;

use super::FredChartApp;

impl FredChartApp {
    pub(super) fn show_main_pane(&mut self, ui: &mut egui::Ui) {
        let layout = self.cfg.main_layout.clone();
        let fmt = self.cfg.x_date_format;

        let mut plot = Plot::new("main_chart")
            .allow_scroll(false)
            .allow_zoom(true)
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .show_grid(Vec2b::new(layout.show_x_grid, layout.show_y_grid))
            .show_background(!layout.transparent)
            .x_axis_formatter(move |mark, range| {
                fmt.format_value(mark.value, range.end() - range.start())
            });
        if layout.show_legend {
            plot = plot.legend(Legend::default().position(Corner::RightTop));
        }

        let pending = self.pending_main.take();
        let fit_y = std::mem::take(&mut self.fit_main_y);
        let y_ext = self.y_extent;
        let traces = &self.traces;

        let resp = plot.show(ui, |plot_ui| {
            if let Some((start, end)) = pending {
                plot_ui.set_plot_bounds_x(start..=end);
            }
            if fit_y {
                if let Some((ymin, ymax)) = y_ext {
                    let margin = ((ymax - ymin) * 0.05).max(f64::EPSILON);
                    plot_ui.set_plot_bounds_y(ymin - margin..=ymax + margin);
                }
            }
            for tr in traces {
                let mut line = Line::new(&tr.name, tr.points.clone()).width(tr.look.width);
                if let Some(color) = tr.look.color {
                    line = line.color(color);
                }
                plot_ui.line(line);
            }
        });

        // Report the resulting x-range to the synchronizer. The echo guard
        // filters out the bounds we just set ourselves, so only user-driven
        // pan/zoom propagates to the mini pane.
        let range_x = resp.transform.bounds().range_x();
        let change = RangeChange::new(*range_x.start(), *range_x.end());
        let update = match self.sync.as_mut() {
            Some(sync) => sync.on_main_change(change),
            None => None,
        };
        self.relay(update);
    }
}
