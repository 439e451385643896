//! Reference sinks for the issuecast dispatch protocol.
//!
//! These are deliberately small: `DumpSink` prints every notification,
//! `SummarySink` defers everything to one completion line, `NoopSink` does
//! nothing at all. Real destinations (chat, issue trackers, files) are
//! external plug-ins implementing the same contract.

#![forbid(unsafe_code)]

mod dump;
mod noop;
mod summary;

pub use dump::DumpSink;
pub use noop::NoopSink;
pub use summary::{SummaryCounts, SummarySink};
