use crate::model::{SCHEMA_CONFIG_V1, SinksConfigV1};
use anyhow::Context;

pub fn parse_config_toml(text: &str) -> anyhow::Result<SinksConfigV1> {
    let cfg: SinksConfigV1 = toml::from_str(text).context("parse issuecast.toml")?;

    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unknown config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    Ok(cfg)
}

/// The ordered ids of sinks that should be notified this run.
///
/// Listing a sink enables it unless it carries `enabled = false`. Order is
/// the map's deterministic key order; dispatch correctness does not depend
/// on it, but log output should be reproducible.
pub fn active_sink_ids(cfg: &SinksConfigV1) -> Vec<String> {
    cfg.sinks
        .iter()
        .filter(|(_, entry)| entry.enabled.unwrap_or(true))
        .map(|(id, _)| id.clone())
        .collect()
}
