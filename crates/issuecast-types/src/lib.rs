//! Stable DTOs used across the issuecast workspace.
//!
//! This crate is intentionally boring:
//! - the classified report handed to dispatch (new / outstanding / fixed)
//! - the category enumeration with its fixed dispatch order
//! - canonical source-path handling
//! - the on-disk report envelope and schema string

#![forbid(unsafe_code)]

pub mod issue;
pub mod path;
pub mod report;

pub use issue::{Category, Issue};
pub use path::SourcePath;
pub use report::{ClassifiedReport, ReportEnvelopeV1, SCHEMA_REPORT_V1, ToolMeta};
