//! Shared test doubles for the issuecast workspace.
//!
//! This crate exists because sink implementations and the host layers all
//! need the same doubles (an in-memory log, a call-recording sink, a failing
//! sink) in their integration tests; a `#[cfg(test)]` module inside
//! `issuecast-dispatch` would not be visible to them.

#![forbid(unsafe_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use issuecast_dispatch::{LogDestination, Prepared, Sink, SinkError, SinkLog, Stage};
use issuecast_types::{Category, ClassifiedReport, Issue};

/// Captures log lines in memory, in write order.
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
/// call observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkCall {
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

/// Records every lifecycle call it receives.
///
/// The cache is a run token drawn from a per-sink counter, so calls from
/// distinct dispatches are distinguishable. The shared call record makes
/// this double `Send + Sync`, fit for boxed-registry tests.
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
    next_token: AtomicU64,
    symbol: Option<&'static str>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink {
            calls: Arc::new(Mutex::new(Vec::new())),
            next_token: AtomicU64::new(1),
            symbol: Some("recording"),
        }
    }

    pub fn with_symbol(symbol: &'static str) -> Self {
        RecordingSink {
            symbol: Some(symbol),
            ..RecordingSink::new()
        }
    }

    /// A recorder with no declared symbol, for naming-fallback tests.
    pub fn anonymous() -> Self {
        RecordingSink {
            symbol: None,
            ..RecordingSink::new()
        }
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().expect("recording mutex poisoned").clone()
    }

    /// Shared handle to the call record, for tests that box the sink away.
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<SinkCall>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: SinkCall) {
        self.calls.lock().expect("recording mutex poisoned").push(call);
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        RecordingSink::new()
    }
}

impl Sink for RecordingSink {
    type Cache = u64;

    fn symbol(&self) -> Option<&str> {
        self.symbol
    }

    fn prepare(&self, _log: &mut SinkLog<'_>) -> Result<Prepared<u64>, SinkError> {
        self.record(SinkCall::Prepare);
        Ok(Prepared::Active(self.next_token.fetch_add(1, Ordering::SeqCst)))
    }

    fn on_category_begin(
        &self,
        category: Category,
        count: usize,
        cache: &mut u64,
        _log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError> {
        self.record(SinkCall::CategoryBegin {
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
        self.record(SinkCall::Issue {
            category,
            token: *cache,
            message: message.to_string(),
            file_path: file_path.to_string(),
            line_start,
        });
        Ok(())
    }

    fn complete(&self, cache: u64, _log: &mut SinkLog<'_>) -> Result<(), SinkError> {
        self.record(SinkCall::Complete { token: cache });
        Ok(())
    }
}

/// A sink whose `prepare` always opts out of the run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkippingSink;

impl Sink for SkippingSink {
    type Cache = ();

    fn symbol(&self) -> Option<&str> {
        Some("skipping")
    }

    fn prepare(&self, _log: &mut SinkLog<'_>) -> Result<Prepared<()>, SinkError> {
        Ok(Prepared::Skip)
    }

    fn on_issue(
        &self,
        _category: Category,
        _cache: &mut (),
        _message: &str,
        _file_path: &str,
        _line_start: u32,
        _log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Fails at exactly one lifecycle stage; succeeds everywhere else.
#[derive(Clone, Copy, Debug)]
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

    fn symbol(&self) -> Option<&str> {
        Some("failing")
    }

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

/// Build a report from `(message, file_path, line_start)` triples per category.
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
