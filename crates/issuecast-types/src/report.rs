use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issue::{Category, Issue};

/// Schema string of the on-disk classified report file.
pub const SCHEMA_REPORT_V1: &str = "issuecast.report.v1";

/// One run's findings partitioned against the reference run.
///
/// Constructed once per run before dispatch and immutable during it. Sequence
/// order within each category is the upstream tool's order and is preserved
/// all the way to the sinks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassifiedReport {
    #[serde(default)]
    pub new: Vec<Issue>,
    #[serde(default)]
    pub outstanding: Vec<Issue>,
    #[serde(default)]
    pub fixed: Vec<Issue>,
}

impl ClassifiedReport {
    pub fn issues(&self, category: Category) -> &[Issue] {
        match category {
            Category::New => &self.new,
            Category::Outstanding => &self.outstanding,
            Category::Fixed => &self.fixed,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.issues(category).len()
    }

    pub fn total(&self) -> usize {
        self.new.len() + self.outstanding.len() + self.fixed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Tool identity recorded in the report envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// `issuecast.report.v1` file format: schema marker, optional producing tool,
/// and the three issue sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelopeV1 {
    #[serde(default)]
    pub schema: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<ToolMeta>,

    #[serde(default)]
    pub new: Vec<Issue>,
    #[serde(default)]
    pub outstanding: Vec<Issue>,
    #[serde(default)]
    pub fixed: Vec<Issue>,
}

impl ReportEnvelopeV1 {
    pub fn into_report(self) -> ClassifiedReport {
        ClassifiedReport {
            new: self.new,
            outstanding: self.outstanding,
            fixed: self.fixed,
        }
    }
}
