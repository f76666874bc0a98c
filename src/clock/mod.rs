//! Clock Module
//!
//! Time capture for the timeline. A clock produces two-part monotonic
//! readings (whole seconds plus nanoseconds) and wall-clock epoch
//! milliseconds; the timeline only ever consumes those two formats.
//!
//! # Components
//!
//! - [`ClockSample`]: a single two-part monotonic reading
//! - [`ClockSource`]: the trait timelines read time through
//! - [`MonotonicClock`]: process-anchored clock backed by `Instant`
//! - [`ManualClock`]: settable clock for deterministic timing

pub mod sample;
pub mod source;

pub use sample::{hr_millis, ClockSample, NANOS_PER_SEC};
pub use source::{ClockSource, ManualClock, MonotonicClock};
