use std::fmt;
use std::io;

use issuecast_types::Category;
use thiserror::Error;

/// Failure raised inside a sink's own lifecycle code.
///
/// Sinks are external plug-ins, so the payload is an opaque message plus an
/// optional source error. The dispatcher never inspects it beyond attaching
/// the stage and sink name.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SinkError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl SinkError {
    pub fn msg<M: Into<String>>(message: M) -> Self {
        SinkError {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source<M, E>(message: M, source: E) -> Self
    where
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        SinkError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(err: io::Error) -> Self {
        SinkError::with_source("log write failed", err)
    }
}

/// The lifecycle stage that was executing when a sink failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Prepare,
    CategoryBegin(Category),
    Issue(Category),
    Complete,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Prepare => f.write_str("prepare"),
            Stage::CategoryBegin(c) => write!(f, "category begin ({c})"),
            Stage::Issue(c) => write!(f, "issue notification ({c})"),
            Stage::Complete => f.write_str("complete"),
        }
    }
}

/// Errors surfaced by one dispatch call.
///
/// A sink failure is propagated as-is: no retry, no continuation to later
/// stages for this sink on this run. Whether other sinks still run is the
/// orchestrator's decision, not this crate's.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("sink `{sink}` failed during {stage}")]
    SinkFailed {
        sink: String,
        stage: Stage,
        #[source]
        source: SinkError,
    },

    #[error("run log write failed")]
    Log(#[source] io::Error),
}

impl DispatchError {
    pub(crate) fn failed(sink: &str, stage: Stage, source: SinkError) -> Self {
        DispatchError::SinkFailed {
            sink: sink.to_string(),
            stage,
            source,
        }
    }

    /// The display name of the failing sink, when the error came from one.
    pub fn sink_name(&self) -> Option<&str> {
        match self {
            DispatchError::SinkFailed { sink, .. } => Some(sink),
            DispatchError::Log(_) => None,
        }
    }
}
