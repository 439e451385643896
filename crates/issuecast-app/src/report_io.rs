use anyhow::Context;
use camino::Utf8Path;
use issuecast_types::{ClassifiedReport, ReportEnvelopeV1, SCHEMA_REPORT_V1};

/// Parse a classified report from its JSON envelope.
///
/// Files carrying the known schema string parse strictly; files with no
/// schema at all are tried as a bare envelope for forward/back compat. Any
/// other schema string is an error.
pub fn parse_report_json(text: &str) -> anyhow::Result<ClassifiedReport> {
    let envelope: ReportEnvelopeV1 =
        serde_json::from_str(text).context("parse report json")?;

    match envelope.schema.as_str() {
        SCHEMA_REPORT_V1 | "" => Ok(envelope.into_report()),
        other => anyhow::bail!("unknown report schema: {other} (expected {SCHEMA_REPORT_V1})"),
    }
}

pub fn load_report(path: &Utf8Path) -> anyhow::Result<ClassifiedReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report {path}"))?;
    parse_report_json(&text).with_context(|| format!("in report {path}"))
}
