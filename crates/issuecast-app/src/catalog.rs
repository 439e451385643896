use crate::registry::SinkRegistry;
use issuecast_dispatch::BoxedSink;
use issuecast_settings::SinksConfigV1;
use issuecast_sinks::{DumpSink, NoopSink, SummarySink};

/// Config ids of the built-in reference sinks, in catalog order.
pub fn known_sink_ids() -> &'static [&'static str] {
    &["dump", "noop", "summary"]
}

/// Construct the sink registered under a config id.
pub fn build_sink(id: &str) -> anyhow::Result<BoxedSink> {
    match id {
        "dump" => Ok(issuecast_dispatch::boxed(DumpSink)),
        "noop" => Ok(issuecast_dispatch::boxed(NoopSink)),
        "summary" => Ok(issuecast_dispatch::boxed(SummarySink)),
        other => anyhow::bail!(
            "unknown sink id: {other} (known: {})",
            known_sink_ids().join(", ")
        ),
    }
}

/// Build the registry for one run from resolved configuration.
pub fn build_registry(cfg: &SinksConfigV1) -> anyhow::Result<SinkRegistry> {
    let mut registry = SinkRegistry::new();
    for id in issuecast_settings::active_sink_ids(cfg) {
        registry.register_boxed(build_sink(&id)?);
    }
    Ok(registry)
}
