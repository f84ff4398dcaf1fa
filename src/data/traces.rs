//! Trace descriptors and the trace builder.
//!
//! A [`Trace`] is one renderable line series: name, resolved `[x, y]` points
//! and a visual style. Traces are derived once from the payload and handed to
//! both panes at creation; range changes never recompute them.

use egui::Color32;

use crate::error::ChartError;
use crate::payload::ChartPayload;

/// The full visible x-domain: (first, last) timestamp of the time sequence.
pub type Domain = (f64, f64);

/// Line style for one trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceLook {
    /// `None` lets the plot library pick an automatic color.
    pub color: Option<Color32>,
    pub width: f32,
}

impl Default for TraceLook {
    fn default() -> Self {
        Self {
            color: None,
            width: 2.4,
        }
    }
}

/// One renderable line series.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub look: TraceLook,
}

/// Build the trace set and the visible domain from a payload.
///
/// One trace per resolved indicator, in indicator order. An indicator with no
/// matching series entry yields an empty trace; a series shorter than `time`
/// yields a truncated one. The domain is `None` when `time` is empty, in which
/// case the panes fall back to the plot library's auto-ranging.
pub fn build_traces(payload: &ChartPayload) -> Result<(Vec<Trace>, Option<Domain>), ChartError> {
    let xs = payload.resolve_time()?;

    let traces = payload
        .indicator_names()
        .into_iter()
        .map(|name| {
            let points = match payload.series.get(&name) {
                Some(ys) => xs.iter().zip(ys.iter()).map(|(&x, &y)| [x, y]).collect(),
                None => Vec::new(),
            };
            Trace {
                name,
                points,
                look: TraceLook::default(),
            }
        })
        .collect();

    let domain = match (xs.first(), xs.last()) {
        (Some(&first), Some(&last)) => Some((first, last)),
        _ => None,
    };

    Ok((traces, domain))
}

/// The combined y extent over all trace points, with nothing drawn → `None`.
pub fn y_extent(traces: &[Trace]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for tr in traces {
        for p in &tr.points {
            if p[1] < min {
                min = p[1];
            }
            if p[1] > max {
                max = p[1];
            }
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}
