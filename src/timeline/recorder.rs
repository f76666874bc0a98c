//! Timeline Recorder
//!
//! Records named marks and measures against a monotonic clock and answers
//! queries over the recorded entries.

use log::{debug, trace, warn};

use crate::clock::{hr_millis, ClockSample, ClockSource, MonotonicClock};
use crate::error::Result;

use super::entry::{Entry, EntryDraft, EntryType};
use super::options::TimelineOptions;
use super::store::EntryStore;

/// An in-memory performance timeline.
///
/// All relative times are milliseconds since the reference origin: the
/// construction time by default, or the explicit `offset` when one is set.
///
/// # Example
///
/// ```rust
/// use perf_timeline::{EntryType, Timeline};
///
/// let mut timeline = Timeline::new();
/// timeline.mark("parse-start");
/// // ... parse something ...
/// timeline.mark("parse-end");
/// timeline.measure("parse", Some("parse-start"), Some("parse-end"));
///
/// let measures = timeline.get_entries_by_type(EntryType::Measure);
/// assert_eq!(measures.len(), 1);
/// assert!(measures[0].duration >= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Timeline<C: ClockSource = MonotonicClock> {
    clock: C,
    construction: ClockSample,
    offset: Option<f64>,
    timestamp: bool,
    entries: EntryStore,
}

impl Timeline {
    /// Creates a timeline with default options on the monotonic clock.
    pub fn new() -> Self {
        Self::with_options(TimelineOptions::default())
    }

    /// Creates a timeline with the given options on the monotonic clock.
    pub fn with_options(options: TimelineOptions) -> Self {
        Self::with_clock(options, MonotonicClock::new())
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> Timeline<C> {
    /// Creates a timeline reading time from `clock`.
    pub fn with_clock(options: TimelineOptions, clock: C) -> Self {
        if let Some(offset) = options.offset.filter(|o| !o.is_finite()) {
            warn!("Ignoring non-finite offset {}, using construction time", offset);
        }

        let construction = clock.sample();
        debug!(
            "Timeline created at {:.3}ms (offset: {:?}, timestamp: {})",
            construction.to_millis(),
            options.offset,
            options.timestamp
        );

        Self {
            clock,
            construction,
            offset: options.offset,
            timestamp: options.timestamp,
            entries: EntryStore::new(),
        }
    }

    /// Returns the reference every relative time is computed against.
    ///
    /// A finite explicit offset wins, zero included; otherwise the raw
    /// construction time in milliseconds.
    fn resolve_offset(&self) -> f64 {
        match self.offset {
            Some(offset) if offset.is_finite() => offset,
            _ => self.construction.to_millis(),
        }
    }

    /// Returns the relative time of construction.
    ///
    /// Zero unless an explicit offset is set.
    pub fn construction_time_millis(&self) -> f64 {
        hr_millis(Some(self.construction), self.resolve_offset(), &self.clock)
    }

    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    /// Replaces the explicit offset; applies to every later computation.
    pub fn set_offset(&mut self, offset: Option<f64>) {
        self.offset = offset;
    }

    pub fn timestamp_mode(&self) -> bool {
        self.timestamp
    }

    pub fn options(&self) -> TimelineOptions {
        TimelineOptions {
            offset: self.offset,
            timestamp: self.timestamp,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the current relative time in milliseconds.
    pub fn now(&self) -> f64 {
        hr_millis(Some(self.clock.sample()), self.resolve_offset(), &self.clock)
    }

    /// Records an entry, filling unset draft fields with defaults.
    ///
    /// The clock is sampled once when the call begins; that sample supplies
    /// the default start time.
    pub fn record(&mut self, draft: EntryDraft) -> &Entry {
        let sample = self.clock.sample();
        let EntryDraft {
            name,
            start_time,
            duration,
            entry_type,
        } = draft;

        let start_time =
            start_time.unwrap_or_else(|| hr_millis(Some(sample), self.resolve_offset(), &self.clock));

        let entry = Entry {
            name,
            start_time,
            duration: duration.unwrap_or(0.0),
            entry_type: entry_type.unwrap_or(EntryType::Mark),
            timestamp: self.timestamp.then(|| self.clock.epoch_millis()),
        };

        trace!(
            "Recorded {} '{}' at {:.3}ms ({:.3}ms)",
            entry.entry_type,
            entry.name,
            entry.start_time,
            entry.duration
        );

        let index = self.entries.insert(entry);
        &self.entries.as_slice()[index]
    }

    /// Records a zero-duration mark at the current relative time.
    pub fn mark(&mut self, name: impl Into<String>) -> &Entry {
        self.record(EntryDraft::new(name))
    }

    /// Records a measure between two named entries.
    ///
    /// The start is the most recent entry named `start_mark`, or the
    /// construction time if there is none. The end is the most recent entry
    /// named `end_mark`, or now if there is none. Without a start name the
    /// end is always now and `end_mark` is not looked up; an empty start
    /// name still matches entries named `""` but counts as absent for the end.
    ///
    /// A resolved end before the resolved start yields a negative duration.
    pub fn measure(
        &mut self,
        name: impl Into<String>,
        start_mark: Option<&str>,
        end_mark: Option<&str>,
    ) -> &Entry {
        let name = name.into();
        let has_start_name = start_mark.is_some_and(|s| !s.is_empty());
        let fallback_end = self.clock.sample();

        let start = match start_mark.and_then(|n| self.entries.last_named(n)) {
            Some(entry) => entry.start_time,
            None => {
                debug!(
                    "Measure '{}': no start entry {:?}, using construction time",
                    name, start_mark
                );
                self.construction_time_millis()
            }
        };

        let resolved_end = if has_start_name {
            end_mark
                .and_then(|n| self.entries.last_named(n))
                .map(|entry| entry.start_time)
        } else {
            if end_mark.is_some() {
                debug!("Measure '{}': no start name given, ignoring end {:?}", name, end_mark);
            }
            None
        };
        let end = resolved_end
            .unwrap_or_else(|| hr_millis(Some(fallback_end), self.resolve_offset(), &self.clock));

        self.record(
            EntryDraft::new(name)
                .with_start_time(start)
                .with_duration(end - start)
                .with_entry_type(EntryType::Measure),
        )
    }

    /// Returns a copy of every entry in start-time order.
    pub fn get_entries(&self) -> Vec<Entry> {
        self.entries.as_slice().to_vec()
    }

    /// Borrowed view of every entry in start-time order.
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    pub fn get_entries_by_name(&self, name: &str) -> Vec<Entry> {
        self.entries.iter_named(name).cloned().collect()
    }

    pub fn get_entries_by_type(&self, entry_type: EntryType) -> Vec<Entry> {
        self.entries.iter_typed(entry_type).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every mark.
    pub fn clear_marks(&mut self) {
        let removed = self.entries.remove_type(EntryType::Mark);
        debug!("Cleared {} marks", removed);
    }

    /// Removes every measure.
    pub fn clear_measures(&mut self) {
        let removed = self.entries.remove_type(EntryType::Measure);
        debug!("Cleared {} measures", removed);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        debug!("Cleared {} entries", self.entries.len());
        self.entries.clear();
    }

    /// Exports the entries as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.entries.as_slice())?)
    }
}
