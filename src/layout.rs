//! Fixed visual configuration for the two panes.
//!
//! These mirror the two layout objects of the original component: the main
//! pane shows a legend and value-axis gridlines at full height, the mini pane
//! is a short, interaction-locked navigator carrying the range slider.

use egui::Color32;

/// Layout of the main chart pane.
#[derive(Debug, Clone)]
pub struct MainPaneLayout {
    /// Show the legend (upper-right corner of the plot area).
    pub show_legend: bool,
    /// Gridlines on the time axis.
    pub show_x_grid: bool,
    /// Gridlines on the value axis.
    pub show_y_grid: bool,
    /// Fixed pane height in points.
    pub height: f32,
    /// Render the plot background transparent.
    pub transparent: bool,
}

impl Default for MainPaneLayout {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_x_grid: false,
            show_y_grid: true,
            height: 400.0,
            transparent: true,
        }
    }
}

/// Layout of the mini/navigator pane.
#[derive(Debug, Clone)]
pub struct MiniPaneLayout {
    /// Fixed pane height in points.
    pub height: f32,
    /// Line width for navigator traces (thinner than the main pane).
    pub trace_width: f32,
    /// Fill of the slider window band.
    pub window_fill: Color32,
    /// Color of the window edge handles.
    pub handle_color: Color32,
    /// Pointer tolerance (points) for grabbing a window edge.
    pub edge_grab_tolerance: f32,
    /// Render the plot background transparent.
    pub transparent: bool,
}

impl Default for MiniPaneLayout {
    fn default() -> Self {
        Self {
            height: 80.0,
            trace_width: 1.0,
            window_fill: Color32::from_rgba_unmultiplied(120, 140, 180, 40),
            handle_color: Color32::from_rgb(120, 140, 180),
            edge_grab_tolerance: 6.0,
            transparent: true,
        }
    }
}
