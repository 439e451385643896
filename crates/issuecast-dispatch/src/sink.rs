use crate::error::SinkError;
use crate::log::SinkLog;
use issuecast_types::Category;

/// Result of [`Sink::prepare`]: either a fresh per-run cache or an opt-out.
///
/// `Skip` ends the dispatch for this sink on this run without any further
/// lifecycle calls. It is a configuration decision, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prepared<C> {
    Active(C),
    Skip,
}

impl<C> Prepared<C> {
    pub fn is_skip(&self) -> bool {
        matches!(self, Prepared::Skip)
    }
}

/// A pluggable output destination for classified issue reports.
///
/// The implementation itself must hold only immutable configuration: one sink
/// instance may serve concurrent runs, and everything mutable for a run lives
/// in the `Cache` value created by [`prepare`](Sink::prepare). The dispatcher
/// creates the cache once per run, threads it through every later call, and
/// hands ownership back to [`complete`](Sink::complete).
///
/// All methods are invoked only by the dispatcher, in the documented order;
/// a sink never calls its own lifecycle.
pub trait Sink {
    /// Per-run state, opaque to the dispatcher.
    type Cache;

    /// Symbolic short name used to prefix log lines.
    ///
    /// `None` falls back to the implementation type name.
    fn symbol(&self) -> Option<&str> {
        None
    }

    /// Called once per dispatch, only when the report is non-empty.
    fn prepare(&self, log: &mut SinkLog<'_>) -> Result<Prepared<Self::Cache>, SinkError>;

    /// Called once per non-empty category, before that category's issues,
    /// with the exact number of issues about to be delivered.
    fn on_category_begin(
        &self,
        _category: Category,
        _count: usize,
        _cache: &mut Self::Cache,
        _log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError> {
        Ok(())
    }

    /// Called once per issue, in the category's original sequence order.
    fn on_issue(
        &self,
        category: Category,
        cache: &mut Self::Cache,
        message: &str,
        file_path: &str,
        line_start: u32,
        log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError>;

    /// Called exactly once after all categories, unless `prepare` skipped.
    /// Consumes the cache: flushing and resource teardown happen here.
    fn complete(&self, _cache: Self::Cache, _log: &mut SinkLog<'_>) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Resolve the display name used to prefix every log line for one dispatch:
/// the sink's declared symbol, else its type name without path or generics.
pub fn display_name<S: Sink>(sink: &S) -> String {
    match sink.symbol() {
        Some(symbol) => symbol.to_string(),
        None => short_type_name(std::any::type_name::<S>()).to_string(),
    }
}

fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
