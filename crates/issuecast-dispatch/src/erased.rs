//! Type-erased sinks for heterogeneous registries.
//!
//! Erasure happens at the whole-dispatch level, not per lifecycle method: the
//! typed `Cache` never crosses the object boundary, so the per-run state
//! invariant holds structurally for boxed sinks too.

use crate::dispatch::dispatch_named;
use crate::error::DispatchError;
use crate::log::LogDestination;
use crate::sink::{Sink, display_name};
use issuecast_types::ClassifiedReport;

/// Object-safe view of a registered sink.
pub trait ErasedSink: Send + Sync {
    /// Display name resolved when the sink was boxed; fixed for its lifetime.
    fn display_name(&self) -> &str;

    /// Run one full dispatch cycle against this sink.
    fn dispatch(
        &self,
        report: &ClassifiedReport,
        out: &mut dyn LogDestination,
    ) -> Result<(), DispatchError>;
}

pub type BoxedSink = Box<dyn ErasedSink>;

impl std::fmt::Debug for dyn ErasedSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErasedSink")
            .field("display_name", &self.display_name())
            .finish()
    }
}

struct Erased<S> {
    sink: S,
    name: String,
}

impl<S: Sink + Send + Sync> ErasedSink for Erased<S> {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn dispatch(
        &self,
        report: &ClassifiedReport,
        out: &mut dyn LogDestination,
    ) -> Result<(), DispatchError> {
        dispatch_named(report, &self.sink, &self.name, out)
    }
}

/// Box a sink for registry storage, resolving its display name up front.
pub fn boxed<S: Sink + Send + Sync + 'static>(sink: S) -> BoxedSink {
    let name = display_name(&sink);
    Box::new(Erased { sink, name })
}
