//! fredchart crate root: re-exports and module wiring.
//!
//! This crate renders an interactive two-panel financial time-series chart
//! built on egui/eframe:
//! - a main chart with legend, pan/zoom and a date axis
//! - a miniature navigator chart showing the full domain with a draggable
//!   range-slider window
//!
//! The two panes' visible x-ranges are kept in sync by [`sync::RangeSync`],
//! a pure state machine that is testable without any UI.
//!
//! Modules:
//! - `payload`: the JSON payload boundary (time / series / indicators)
//! - `data`: timestamp handling and the trace builder
//! - `sync`: the dual-pane range synchronizer
//! - `layout`: fixed visual configuration for both panes
//! - `app`: the eframe application and pane rendering
//! - `host`: process-wide payload field and re-runnable entry point

pub mod config;
pub mod data;
pub mod error;
pub mod host;
pub mod layout;
pub mod payload;
pub mod sync;

pub mod app;

// Public re-exports for a compact external API
pub use app::run::run_fred_chart;
pub use config::{FredChartConfig, XDateFormat};
pub use data::traces::{build_traces, Domain, Trace, TraceLook};
pub use error::ChartError;
pub use host::{render_fred_chart, set_payload, try_render_fred_chart};
pub use payload::{ChartPayload, TimeStamp};
pub use sync::{Pane, RangeChange, RangeSync, RangeUpdate};
