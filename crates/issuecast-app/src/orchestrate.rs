use crate::registry::SinkRegistry;
use issuecast_dispatch::{DispatchError, LogDestination};
use issuecast_types::ClassifiedReport;

/// What to do when one sink fails while others are still waiting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaultPolicy {
    /// Stop at the first failing sink; remaining sinks are not dispatched.
    FailFast,
    /// Keep dispatching the remaining sinks and collect every failure.
    Isolate,
}

/// Result of one orchestrated run across a registry.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    /// Sinks that completed (including per-run skips, which are not errors).
    pub dispatched: usize,
    /// Failures collected under `FaultPolicy::Isolate`; each error already
    /// names its sink.
    pub failures: Vec<DispatchError>,
}

impl DispatchOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Dispatch one report to every registered sink, in registration order, on
/// the shared run log.
///
/// Under `FailFast` the first `DispatchError` is returned and later sinks
/// never run. Under `Isolate` every sink gets its dispatch; failures end up
/// in the outcome. Either way a failing sink's own dispatch is already
/// aborted at the failing stage by the core.
pub fn dispatch_all(
    report: &ClassifiedReport,
    registry: &SinkRegistry,
    out: &mut dyn LogDestination,
    policy: FaultPolicy,
) -> Result<DispatchOutcome, DispatchError> {
    let mut outcome = DispatchOutcome::default();

    for sink in registry.iter() {
        match sink.dispatch(report, out) {
            Ok(()) => outcome.dispatched += 1,
            Err(err) => match policy {
                FaultPolicy::FailFast => return Err(err),
                FaultPolicy::Isolate => outcome.failures.push(err),
            },
        }
    }

    Ok(outcome)
}
