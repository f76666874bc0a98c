//! Clock Sources
//!
//! The host time sources a timeline reads from: a monotonic high-resolution
//! clock for relative times and a wall clock for timestamp mode.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::Utc;
use once_cell::sync::Lazy;

use super::sample::ClockSample;

/// Origin of `MonotonicClock` readings, fixed on first use.
static PROCESS_ANCHOR: Lazy<Instant> = Lazy::new(Instant::now);

/// A source of monotonic and wall-clock time.
pub trait ClockSource {
    /// Returns the current monotonic reading.
    fn sample(&self) -> ClockSample;

    /// Returns the current wall-clock time in milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64;
}

impl<C: ClockSource + ?Sized> ClockSource for &C {
    fn sample(&self) -> ClockSample {
        (**self).sample()
    }

    fn epoch_millis(&self) -> i64 {
        (**self).epoch_millis()
    }
}

/// High-resolution monotonic clock.
///
/// Readings are the time elapsed since a process-wide anchor instant, so
/// samples from different `MonotonicClock` values are directly comparable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl MonotonicClock {
    /// Creates a clock, fixing the process anchor if this is the first use.
    pub fn new() -> Self {
        Lazy::force(&PROCESS_ANCHOR);
        Self
    }
}

impl ClockSource for MonotonicClock {
    fn sample(&self) -> ClockSample {
        ClockSample::from(PROCESS_ANCHOR.elapsed())
    }

    fn epoch_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can hand one clone to a
/// timeline and keep another to advance it.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use perf_timeline::clock::{ClockSource, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_millis(5));
/// assert_eq!(clock.sample().to_millis(), 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    state: Rc<Cell<(ClockSample, i64)>>,
}

impl ManualClock {
    /// Creates a clock reading zero on both the monotonic and wall clocks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock at the given monotonic reading and wall-clock time.
    pub fn starting_at(sample: ClockSample, epoch_millis: i64) -> Self {
        Self {
            state: Rc::new(Cell::new((sample, epoch_millis))),
        }
    }

    /// Sets the monotonic reading, leaving the wall clock untouched.
    pub fn set(&self, sample: ClockSample) {
        let (_, epoch) = self.state.get();
        self.state.set((sample, epoch));
    }

    /// Sets the wall-clock time.
    pub fn set_epoch_millis(&self, epoch_millis: i64) {
        let (sample, _) = self.state.get();
        self.state.set((sample, epoch_millis));
    }

    /// Moves both clocks forward by `by`.
    pub fn advance(&self, by: Duration) {
        let (sample, epoch) = self.state.get();
        let next = ClockSample::from(sample.as_duration() + by);
        self.state.set((next, epoch + by.as_millis() as i64));
    }
}

impl ClockSource for ManualClock {
    fn sample(&self) -> ClockSample {
        self.state.get().0
    }

    fn epoch_millis(&self) -> i64 {
        self.state.get().1
    }
}
