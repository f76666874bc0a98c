//! perf-timeline - In-Process Performance Timeline
//!
//! Records named instants ("marks") and named intervals between them
//! ("measures") against a high-resolution monotonic clock, in the manner of
//! the browser performance-timeline API.
//!
//! # Architecture
//!
//! The library is organized into three main modules:
//!
//! - [`clock`]: Clock samples and the time sources a timeline reads
//! - [`timeline`]: Entries, ordered storage, options and the [`Timeline`]
//! - [`report`]: Text charts and duration summaries over entries
//!
//! # Example
//!
//! ```rust
//! use perf_timeline::{Timeline, TimelineOptions};
//!
//! let mut timeline = Timeline::with_options(TimelineOptions::new().with_timestamp(true));
//!
//! timeline.mark("fetch-start");
//! // ... do some work ...
//! timeline.mark("fetch-end");
//! timeline.measure("fetch", Some("fetch-start"), Some("fetch-end"));
//!
//! // Without a start mark, a measure spans from construction until now.
//! timeline.measure("uptime", None, None);
//!
//! for entry in timeline.entries() {
//!     println!("{} {} {:.3}ms", entry.entry_type, entry.name, entry.duration);
//! }
//! ```

pub mod clock;
pub mod error;
pub mod report;
pub mod timeline;

// Re-export commonly used types
pub use clock::{ClockSample, ClockSource, ManualClock, MonotonicClock};
pub use error::{Result, TimelineError};
pub use timeline::{Entry, EntryDraft, EntryType, Timeline, TimelineOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "perf-timeline";
