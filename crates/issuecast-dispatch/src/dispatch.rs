use crate::error::{DispatchError, Stage};
use crate::log::{LogDestination, SinkLog};
use crate::sink::{Prepared, Sink, display_name};
use issuecast_types::{Category, ClassifiedReport};

/// The single informational line written when the report has no issues.
pub const EMPTY_REPORT_NOTICE: &str = "no issues to record";

/// Run one full dispatch cycle for one (report, sink, run) triple.
///
/// Stages, in order: empty short-circuit, `prepare` (with per-run opt-out),
/// the three categories new → outstanding → fixed (each skipped when empty),
/// then `complete`. A stage failure aborts the remaining stages; partial log
/// output is expected and is not rolled back.
pub fn dispatch<S: Sink>(
    report: &ClassifiedReport,
    sink: &S,
    out: &mut dyn LogDestination,
) -> Result<(), DispatchError> {
    let name = display_name(sink);
    dispatch_named(report, sink, &name, out)
}

/// Dispatch with a pre-resolved display name. Used by the erased wrapper,
/// which fixes the name at registration time.
pub(crate) fn dispatch_named<S: Sink>(
    report: &ClassifiedReport,
    sink: &S,
    name: &str,
    out: &mut dyn LogDestination,
) -> Result<(), DispatchError> {
    let mut log = SinkLog::new(name, out);

    // Hard short-circuit: a sink never sees setup or teardown for a no-op run.
    if report.is_empty() {
        log.line(EMPTY_REPORT_NOTICE).map_err(DispatchError::Log)?;
        return Ok(());
    }

    let mut cache = match sink
        .prepare(&mut log)
        .map_err(|e| DispatchError::failed(name, Stage::Prepare, e))?
    {
        Prepared::Active(cache) => cache,
        Prepared::Skip => return Ok(()),
    };

    for category in Category::ALL {
        let issues = report.issues(category);
        if issues.is_empty() {
            continue;
        }
        sink.on_category_begin(category, issues.len(), &mut cache, &mut log)
            .map_err(|e| DispatchError::failed(name, Stage::CategoryBegin(category), e))?;
        for issue in issues {
            sink.on_issue(
                category,
                &mut cache,
                &issue.message,
                issue.file_path.as_str(),
                issue.line_start,
                &mut log,
            )
            .map_err(|e| DispatchError::failed(name, Stage::Issue(category), e))?;
        }
    }

    sink.complete(cache, &mut log)
        .map_err(|e| DispatchError::failed(name, Stage::Complete, e))?;

    Ok(())
}
