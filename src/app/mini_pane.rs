//! Mini/navigator pane: the full domain with a draggable range-slider window.
//!
//! The plot itself is locked (no pan, no zoom, fixed bounds); all pointer
//! interaction drives the slider window instead. Dragging inside the band
//! moves it, dragging an edge resizes it, dragging on the track selects a
//! fresh window.

use egui::Vec2b;
use egui_plot::{Line, Plot, Polygon, VLine};

use crate::sync::RangeChange;

use super::FredChartApp;

/// Active pointer interaction with the slider window.
#[derive(Debug, Clone, Copy)]
pub enum SliderDrag {
    /// Dragging the band; `grab` is the pointer offset from the window start.
    Move { grab: f64 },
    ResizeStart,
    ResizeEnd,
    /// Dragging on the track: select a new window from `anchor`.
    Select { anchor: f64 },
}

impl FredChartApp {
    pub(super) fn show_mini_pane(&mut self, ui: &mut egui::Ui) {
        let layout = self.cfg.mini_layout.clone();
        let fmt = self.cfg.x_date_format;
        let domain = self.domain;
        let window = self.sync.as_ref().map(|s| s.slider_window());
        let y_ext = self.y_extent;
        let traces = &self.traces;

        let plot = Plot::new("mini_chart")
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_double_click_reset(false)
            .show_axes(Vec2b::new(true, false))
            .show_grid(Vec2b::new(false, false))
            .show_background(!layout.transparent)
            .x_axis_formatter(move |mark, range| {
                fmt.format_value(mark.value, range.end() - range.start())
            });

        let resp = plot.show(ui, |plot_ui| {
            // The track always shows the full domain; only the band moves.
            if let Some((d0, d1)) = domain {
                if d1 > d0 {
                    plot_ui.set_plot_bounds_x(d0..=d1);
                }
            }
            if let Some((ymin, ymax)) = y_ext {
                let margin = ((ymax - ymin) * 0.1).max(f64::EPSILON);
                plot_ui.set_plot_bounds_y(ymin - margin..=ymax + margin);
            }

            for tr in traces {
                let mut line = Line::new(&tr.name, tr.points.clone()).width(layout.trace_width);
                if let Some(color) = tr.look.color {
                    line = line.color(color);
                }
                plot_ui.line(line);
            }

            if let Some((ws, we)) = window {
                let yr = plot_ui.plot_bounds().range_y();
                let (ymin, ymax) = (*yr.start(), *yr.end());
                let band = Polygon::new(
                    "slider_window",
                    vec![[ws, ymin], [we, ymin], [we, ymax], [ws, ymax]],
                )
                .fill_color(layout.window_fill);
                plot_ui.polygon(band);
                plot_ui.vline(VLine::new("slider_start", ws).color(layout.handle_color).width(2.0));
                plot_ui.vline(VLine::new("slider_end", we).color(layout.handle_color).width(2.0));
            }
        });

        let (Some((d0, d1)), Some((ws, we))) = (domain, window) else {
            return;
        };
        let (dmin, dmax) = (d0.min(d1), d0.max(d1));
        let response = &resp.response;
        let transform = resp.transform;

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let x = transform.value_from_position(pos).x;
                let tol = {
                    let shifted = pos + egui::vec2(layout.edge_grab_tolerance, 0.0);
                    (transform.value_from_position(shifted).x - x).abs()
                };
                self.mini_drag = Some(if (x - ws).abs() <= tol {
                    SliderDrag::ResizeStart
                } else if (x - we).abs() <= tol {
                    SliderDrag::ResizeEnd
                } else if x > ws && x < we {
                    SliderDrag::Move { grab: x - ws }
                } else {
                    SliderDrag::Select {
                        anchor: x.clamp(dmin, dmax),
                    }
                });
            }
        }

        if response.dragged() {
            let drag = self.mini_drag;
            if let (Some(drag), Some(pos)) = (drag, response.interact_pointer_pos()) {
                let x = transform.value_from_position(pos).x.clamp(dmin, dmax);
                let new_window = match drag {
                    SliderDrag::Move { grab } => {
                        let width = we - ws;
                        let hi = (dmax - width).max(dmin);
                        let start = (x - grab).clamp(dmin, hi);
                        (start, start + width)
                    }
                    SliderDrag::ResizeStart => (x.min(we), we),
                    SliderDrag::ResizeEnd => (ws, x.max(ws)),
                    SliderDrag::Select { anchor } => (anchor.min(x), anchor.max(x)),
                };
                // Degenerate windows keep the last valid extent.
                if new_window.1 > new_window.0 {
                    let change = RangeChange::new(new_window.0, new_window.1);
                    let update = match self.sync.as_mut() {
                        Some(sync) => sync.on_mini_change(change),
                        None => None,
                    };
                    self.relay(update);
                }
            }
        }

        if response.drag_stopped() {
            self.mini_drag = None;
        }
    }
}
