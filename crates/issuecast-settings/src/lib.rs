//! User-facing sink-selection configuration.
//!
//! `issuecast.toml` names the sinks to notify per run. The model is
//! intentionally permissive so forward-compat is easy; resolution turns it
//! into the ordered list of active sink ids.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{SCHEMA_CONFIG_V1, SinkEntry, SinksConfigV1};
pub use resolve::{active_sink_ids, parse_config_toml};
