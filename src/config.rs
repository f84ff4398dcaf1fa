//! Configuration for the dual-pane chart.

use crate::data::time;
use crate::layout::{MainPaneLayout, MiniPaneLayout};

/// X-axis tick label format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XDateFormat {
    /// Date only for wide spans, date + time below a three-day span.
    #[default]
    Auto,
    /// Always `YYYY-MM-DD`.
    Date,
    /// Always `YYYY-MM-DD HH:MM`.
    DateTime,
}

impl XDateFormat {
    /// Format an x value (epoch seconds); `span_secs` is the visible span.
    pub fn format_value(self, x: f64, span_secs: f64) -> String {
        match self {
            XDateFormat::Auto => time::format_auto(x, span_secs),
            XDateFormat::Date => time::format_date(x),
            XDateFormat::DateTime => time::format_date_time(x),
        }
    }
}

/// Top-level configuration for the chart window.
#[derive(Clone)]
pub struct FredChartConfig {
    /// Native window title.
    pub title: String,
    /// Main pane layout.
    pub main_layout: MainPaneLayout,
    /// Mini/navigator pane layout.
    pub mini_layout: MiniPaneLayout,
    /// X-axis tick label format.
    pub x_date_format: XDateFormat,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for FredChartConfig {
    fn default() -> Self {
        Self {
            title: "FRED Chart".to_string(),
            main_layout: MainPaneLayout::default(),
            mini_layout: MiniPaneLayout::default(),
            x_date_format: XDateFormat::Auto,
            native_options: None,
        }
    }
}
