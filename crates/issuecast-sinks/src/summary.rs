use issuecast_dispatch::{Prepared, Sink, SinkError, SinkLog};
use issuecast_types::Category;

/// Per-run tally accumulated while notifications stream past.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    pub new: usize,
    pub outstanding: usize,
    pub fixed: usize,
}

/// Stays silent during the run and emits a single totals line on completion.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummarySink;

impl Sink for SummarySink {
    type Cache = SummaryCounts;

    fn symbol(&self) -> Option<&str> {
        Some("summary")
    }

    fn prepare(&self, _log: &mut SinkLog<'_>) -> Result<Prepared<SummaryCounts>, SinkError> {
        Ok(Prepared::Active(SummaryCounts::default()))
    }

    fn on_issue(
        &self,
        category: Category,
        cache: &mut SummaryCounts,
        _message: &str,
        _file_path: &str,
        _line_start: u32,
        _log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError> {
        match category {
            Category::New => cache.new += 1,
            Category::Outstanding => cache.outstanding += 1,
            Category::Fixed => cache.fixed += 1,
        }
        Ok(())
    }

    fn complete(&self, cache: SummaryCounts, log: &mut SinkLog<'_>) -> Result<(), SinkError> {
        log.linef(format_args!(
            "{} new, {} outstanding, {} fixed",
            cache.new, cache.outstanding, cache.fixed
        ))?;
        Ok(())
    }
}
