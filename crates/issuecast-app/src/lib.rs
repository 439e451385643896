//! Host-side composition for issuecast.
//!
//! This crate provides the layer the dispatch core deliberately leaves to
//! its caller: the ordered sink registry, the config-id -> sink catalog,
//! report-file loading, and the multi-sink orchestrator with its fault
//! policy. The CLI crate depends on this; it only handles argument parsing
//! and I/O.

#![forbid(unsafe_code)]

mod catalog;
mod orchestrate;
mod registry;
mod report_io;

pub use catalog::{build_registry, build_sink, known_sink_ids};
pub use orchestrate::{DispatchOutcome, FaultPolicy, dispatch_all};
pub use registry::SinkRegistry;
pub use report_io::{load_report, parse_report_json};
