//! Reporting Module
//!
//! Human-readable views over recorded timeline entries.

pub mod chart;

pub use chart::{measure_durations, render_chart};
