use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::path::SourcePath;

/// One finding produced by an upstream scanner. Immutable; read-only here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    pub message: String,
    pub file_path: SourcePath,
    /// 1-based starting line; 0 when the tool reported no position.
    #[serde(default)]
    pub line_start: u32,
}

impl Issue {
    pub fn new<M: Into<String>, P: Into<SourcePath>>(message: M, file_path: P, line_start: u32) -> Self {
        Issue {
            message: message.into(),
            file_path: file_path.into(),
            line_start,
        }
    }
}

/// Issue partition relative to the reference run.
///
/// `ALL` is the fixed dispatch order: what is new and actionable first, then
/// what is still outstanding, then what was resolved.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    New,
    Outstanding,
    Fixed,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::New, Category::Outstanding, Category::Fixed];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::New => "new",
            Category::Outstanding => "outstanding",
            Category::Fixed => "fixed",
        }
    }

    /// Capitalized form used for log section headers.
    pub fn title(self) -> &'static str {
        match self {
            Category::New => "New",
            Category::Outstanding => "Outstanding",
            Category::Fixed => "Fixed",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
