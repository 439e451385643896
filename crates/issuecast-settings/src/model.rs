use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema string of the `issuecast.toml` config file.
pub const SCHEMA_CONFIG_V1: &str = "issuecast.sinks.v1";

/// `issuecast.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. A missing file means "no sinks configured".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SinksConfigV1 {
    /// Optional schema string for tooling (`issuecast.sinks.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Map of sink id -> config. BTreeMap keeps registry order deterministic.
    #[serde(default)]
    pub sinks: BTreeMap<String, SinkEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SinkEntry {
    /// Listing a sink enables it; `enabled = false` keeps the entry while
    /// muting it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
