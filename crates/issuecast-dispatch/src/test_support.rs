//! In-crate test doubles for the dispatch protocol.
//!
//! The workspace-public equivalents live in `issuecast-test-util`; these stay
//! here so the core crate's own tests need no dev-dependency cycle.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{SinkError, Stage};
use crate::log::{LogDestination, SinkLog};
use crate::sink::{Prepared, Sink};
use issuecast_types::{Category, ClassifiedReport, Issue};

/// Captures log lines in memory.
#[derive(Debug, Default)]
pub struct VecLog {
    pub lines: Vec<String>,
}

impl LogDestination for VecLog {
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// One recorded lifecycle call. `token` identifies the cache instance the
/// call observed, so tests can assert cache identity across a dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Prepare,
    CategoryBegin {
        category: Category,
        count: usize,
        token: u64,
    },
    Issue {
        category: Category,
        token: u64,
        message: String,
        file_path: String,
        line_start: u32,
    },
    Complete {
        token: u64,
    },
}

/// Records every lifecycle call it receives. The cache is a run token drawn
/// from a per-sink counter, so distinct dispatches are distinguishable.
pub struct ProbeSink {
    calls: Arc<Mutex<Vec<Call>>>,
    next_token: AtomicU64,
    symbol: Option<&'static str>,
    skip: bool,
}

impl ProbeSink {
    pub fn new() -> Self {
        ProbeSink {
            calls: Arc::new(Mutex::new(Vec::new())),
            next_token: AtomicU64::new(1),
            symbol: Some("probe"),
            skip: false,
        }
    }

    pub fn with_symbol(symbol: &'static str) -> Self {
        ProbeSink {
            symbol: Some(symbol),
            ..ProbeSink::new()
        }
    }

    /// A probe whose `prepare` opts out of the run.
    pub fn skipping() -> Self {
        ProbeSink {
            skip: true,
            ..ProbeSink::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("probe mutex poisoned").clone()
    }

    /// Shared handle to the call record, for tests that move the sink away.
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<Call>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("probe mutex poisoned").push(call);
    }
}

impl Sink for ProbeSink {
    type Cache = u64;

    fn symbol(&self) -> Option<&str> {
        self.symbol
    }

    fn prepare(&self, _log: &mut SinkLog<'_>) -> Result<Prepared<u64>, SinkError> {
        self.record(Call::Prepare);
        if self.skip {
            return Ok(Prepared::Skip);
        }
        Ok(Prepared::Active(self.next_token.fetch_add(1, Ordering::SeqCst)))
    }

    fn on_category_begin(
        &self,
        category: Category,
        count: usize,
        cache: &mut u64,
        _log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError> {
        self.record(Call::CategoryBegin {
            category,
            count,
            token: *cache,
        });
        Ok(())
    }

    fn on_issue(
        &self,
        category: Category,
        cache: &mut u64,
        message: &str,
        file_path: &str,
        line_start: u32,
        _log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError> {
        self.record(Call::Issue {
            category,
            token: *cache,
            message: message.to_string(),
            file_path: file_path.to_string(),
            line_start,
        });
        Ok(())
    }

    fn complete(&self, cache: u64, _log: &mut SinkLog<'_>) -> Result<(), SinkError> {
        self.record(Call::Complete { token: cache });
        Ok(())
    }
}

/// Fails at exactly one lifecycle stage; succeeds everywhere else.
/// No symbol on purpose, so errors carry the type-name fallback.
pub struct FailingSink {
    fail_at: Stage,
}

impl FailingSink {
    pub fn at(fail_at: Stage) -> Self {
        FailingSink { fail_at }
    }

    fn check(&self, stage: Stage) -> Result<(), SinkError> {
        if self.fail_at == stage {
            return Err(SinkError::msg(format!("injected failure at {stage}")));
        }
        Ok(())
    }
}

impl Sink for FailingSink {
    type Cache = ();

    fn prepare(&self, _log: &mut SinkLog<'_>) -> Result<Prepared<()>, SinkError> {
        self.check(Stage::Prepare)?;
        Ok(Prepared::Active(()))
    }

    fn on_category_begin(
        &self,
        category: Category,
        _count: usize,
        _cache: &mut (),
        _log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError> {
        self.check(Stage::CategoryBegin(category))
    }

    fn on_issue(
        &self,
        category: Category,
        _cache: &mut (),
        _message: &str,
        _file_path: &str,
        _line_start: u32,
        _log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError> {
        self.check(Stage::Issue(category))
    }

    fn complete(&self, _cache: (), _log: &mut SinkLog<'_>) -> Result<(), SinkError> {
        self.check(Stage::Complete)
    }
}

fn issues(specs: &[(&str, &str, u32)]) -> Vec<Issue> {
    specs
        .iter()
        .map(|(message, file_path, line_start)| Issue::new(*message, *file_path, *line_start))
        .collect()
}

pub fn report(
    new: &[(&str, &str, u32)],
    outstanding: &[(&str, &str, u32)],
    fixed: &[(&str, &str, u32)],
) -> ClassifiedReport {
    ClassifiedReport {
        new: issues(new),
        outstanding: issues(outstanding),
        fixed: issues(fixed),
    }
}

pub fn report_new(new: &[(&str, &str, u32)]) -> ClassifiedReport {
    report(new, &[], &[])
}
