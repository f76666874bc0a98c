//! Clock Samples
//!
//! Converts two-part monotonic readings into floating-point milliseconds
//! relative to a reference point.

use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use super::source::ClockSource;

/// Nanoseconds in one second; the exclusive upper bound of `ClockSample::nanos`.
pub const NANOS_PER_SEC: u32 = 1_000_000_000;

/// A single monotonic clock reading.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockSample {
    /// Whole seconds since the clock's origin
    pub secs: u64,
    /// Sub-second remainder in nanoseconds
    pub nanos: u32,
}

impl ClockSample {
    /// Creates a sample without validating the nanosecond part.
    pub const fn new(secs: u64, nanos: u32) -> Self {
        Self { secs, nanos }
    }

    /// Returns true if the nanosecond remainder is below one second.
    pub fn is_valid(&self) -> bool {
        self.nanos < NANOS_PER_SEC
    }

    /// Returns the reading in milliseconds.
    pub fn to_millis(&self) -> f64 {
        self.secs as f64 * 1000.0 + f64::from(self.nanos) / 1e6
    }

    /// Returns the reading as a `Duration` since the clock's origin.
    ///
    /// An oversized nanosecond part carries into the seconds.
    pub fn as_duration(&self) -> Duration {
        Duration::new(self.secs, self.nanos)
    }
}

impl From<Duration> for ClockSample {
    fn from(duration: Duration) -> Self {
        Self::new(duration.as_secs(), duration.subsec_nanos())
    }
}

/// Converts a clock sample into milliseconds relative to `reference`.
///
/// An absent or malformed sample is replaced by a fresh reading from `clock`.
pub fn hr_millis<C: ClockSource + ?Sized>(sample: Option<ClockSample>, reference: f64, clock: &C) -> f64 {
    let sample = match sample {
        Some(sample) if sample.is_valid() => sample,
        Some(sample) => {
            warn!(
                "Malformed clock sample ({}s, {}ns), taking a fresh reading",
                sample.secs, sample.nanos
            );
            clock.sample()
        }
        None => clock.sample(),
    };

    sample.to_millis() - reference
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_to_millis() {
        let sample = ClockSample::new(2, 500_000_000);
        assert_eq!(sample.to_millis(), 2500.0);

        let sample = ClockSample::new(0, 1_250_000);
        assert_eq!(sample.to_millis(), 1.25);
    }

    #[test]
    fn test_from_duration() {
        let sample = ClockSample::from(Duration::from_millis(1500));
        assert_eq!(sample, ClockSample::new(1, 500_000_000));
        assert_eq!(sample.as_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_hr_millis_subtracts_reference() {
        let clock = ManualClock::new();
        let millis = hr_millis(Some(ClockSample::new(1, 0)), 250.0, &clock);
        assert_eq!(millis, 750.0);
    }

    #[test]
    fn test_hr_millis_absent_sample_reads_clock() {
        let clock = ManualClock::starting_at(ClockSample::new(4, 0), 0);
        assert_eq!(hr_millis(None, 1000.0, &clock), 3000.0);
    }

    #[test]
    fn test_hr_millis_malformed_sample_reads_clock() {
        let clock = ManualClock::starting_at(ClockSample::new(2, 500_000_000), 0);
        let bogus = ClockSample::new(9, 2_000_000_000);
        assert!(!bogus.is_valid());
        assert_eq!(hr_millis(Some(bogus), 0.0, &clock), 2500.0);
    }
}
