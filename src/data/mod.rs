//! Data handling: timestamp parsing/formatting and the trace builder.

pub mod time;
pub mod traces;
