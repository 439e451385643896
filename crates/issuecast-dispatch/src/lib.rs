//! The staged dispatch core: one classified report, one sink, one run.
//!
//! Input: a `ClassifiedReport` partitioned elsewhere.
//! Output: lifecycle calls on the sink in a fixed order, log lines prefixed
//! with the sink's resolved display name, and a typed error when a stage
//! fails.

#![forbid(unsafe_code)]

pub mod erased;
pub mod error;
pub mod log;
pub mod sink;

mod dispatch;

pub use dispatch::{EMPTY_REPORT_NOTICE, dispatch};
pub use erased::{BoxedSink, ErasedSink, boxed};
pub use error::{DispatchError, SinkError, Stage};
pub use log::{LogDestination, SinkLog, WriteLog};
pub use sink::{Prepared, Sink, display_name};

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;
