//! Dual-pane range synchronizer.
//!
//! Owns the one genuinely stateful behaviour of the chart: mirroring a
//! zoom/pan range from one pane into the other. The main pane's visible
//! x-range and the mini pane's slider window always hold the same value;
//! a change reported by either pane is recorded and relayed to the *other*
//! pane as a [`RangeUpdate`].
//!
//! Feedback-cycle safety does not rely on the rendering layer suppressing
//! notifications for programmatic changes. A notification whose range equals
//! the pane's currently recorded range is treated as the echo of our own
//! relayout and swallowed, so a library that re-fires on API-driven changes
//! cannot produce an infinite update cycle.

use crate::data::traces::Domain;

/// Tolerance for treating two range bounds as equal (epoch seconds).
pub const RANGE_EPS: f64 = 1e-6;

/// Identifies one of the two chart panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Main,
    Mini,
}

/// A layout-change notification from one pane. Either bound may be absent
/// (reset/autoscale events carry no explicit range).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeChange {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl RangeChange {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Both bounds, or `None` if either is missing.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    }
}

/// A relayout instruction for one pane: set its visible x-range (main) or its
/// slider window (mini) to `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeUpdate {
    pub pane: Pane,
    pub range: (f64, f64),
}

/// Synchronization state for the two panes.
#[derive(Debug, Clone)]
pub struct RangeSync {
    main_range: (f64, f64),
    slider_window: (f64, f64),
}

impl RangeSync {
    /// Seed both panes with the full domain as their initial range.
    pub fn new(domain: Domain) -> Self {
        Self {
            main_range: domain,
            slider_window: domain,
        }
    }

    /// The main pane's current visible x-range.
    pub fn main_range(&self) -> (f64, f64) {
        self.main_range
    }

    /// The mini pane's current slider window (its selection, not the track).
    pub fn slider_window(&self) -> (f64, f64) {
        self.slider_window
    }

    /// Main → mini: a main-pane range change moves the mini slider window.
    pub fn on_main_change(&mut self, change: RangeChange) -> Option<RangeUpdate> {
        self.on_change(Pane::Main, change)
    }

    /// Mini → main: a slider-window change moves the main visible range.
    pub fn on_mini_change(&mut self, change: RangeChange) -> Option<RangeUpdate> {
        self.on_change(Pane::Mini, change)
    }

    fn on_change(&mut self, pane: Pane, change: RangeChange) -> Option<RangeUpdate> {
        let (start, end) = change.bounds()?;

        // Re-entrancy guard: the recorded range for a pane is exactly what we
        // last pushed into it (or what it last reported). An equal
        // notification is an echo, not a user action.
        let current = match pane {
            Pane::Main => self.main_range,
            Pane::Mini => self.slider_window,
        };
        if approx_eq(start, current.0) && approx_eq(end, current.1) {
            return None;
        }

        self.main_range = (start, end);
        self.slider_window = (start, end);

        let target = match pane {
            Pane::Main => Pane::Mini,
            Pane::Mini => Pane::Main,
        };
        Some(RangeUpdate {
            pane: target,
            range: (start, end),
        })
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= RANGE_EPS
}
