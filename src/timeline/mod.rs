//! Timeline Module
//!
//! Data structures and operations for recording marks and measures.
//!
//! # Structure
//!
//! - [`entry`]: Entry records and drafts
//! - [`store`]: Start-time ordered entry storage
//! - [`options`]: Construction options and loaders
//! - [`recorder`]: The [`Timeline`] itself

pub mod entry;
pub mod options;
pub mod recorder;
pub mod store;

pub use entry::{Entry, EntryDraft, EntryType};
pub use options::{parse_offset, TimelineOptions};
pub use recorder::Timeline;
pub use store::EntryStore;
