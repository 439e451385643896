use issuecast_dispatch::{Prepared, Sink, SinkError, SinkLog};
use issuecast_types::Category;

/// Prints a section header per category and one line per issue.
///
/// The line format is stable; CI jobs grep for it.
#[derive(Clone, Copy, Debug, Default)]
pub struct DumpSink;

impl Sink for DumpSink {
    type Cache = ();

    fn symbol(&self) -> Option<&str> {
        Some("dump")
    }

    fn prepare(&self, _log: &mut SinkLog<'_>) -> Result<Prepared<()>, SinkError> {
        Ok(Prepared::Active(()))
    }

    fn on_category_begin(
        &self,
        category: Category,
        count: usize,
        _cache: &mut (),
        log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError> {
        log.linef(format_args!("{} ({count})", category.title()))?;
        Ok(())
    }

    fn on_issue(
        &self,
        _category: Category,
        _cache: &mut (),
        message: &str,
        file_path: &str,
        line_start: u32,
        log: &mut SinkLog<'_>,
    ) -> Result<(), SinkError> {
        log.linef(format_args!("Issue '{message}','{file_path}','{line_start}'"))?;
        Ok(())
    }
}
