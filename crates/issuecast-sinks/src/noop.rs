use issuecast_dispatch::{Prepared, Sink, SinkError, SinkLog};
use issuecast_types::Category;

/// Accepts every notification and does nothing.
///
/// Declares no symbol, so its log prefix is the type-name fallback. Useful
/// as a registry placeholder and in tests that only care about the protocol.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    type Cache = ();

    fn prepare(&self, _log: &mut SinkLog<'_>) -> Result<Prepared<()>, SinkError> {
        Ok(Prepared::Active(()))
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
