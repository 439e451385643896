use issuecast_dispatch::{BoxedSink, ErasedSink, Sink, boxed};

/// Ordered collection of the sinks active for a run.
///
/// Populated by the composition root (config-driven here, but any static
/// registration works); no reflection-style discovery. Each sink is
/// dispatched independently, so registration order only affects log order.
#[derive(Default)]
pub struct SinkRegistry {
    sinks: Vec<BoxedSink>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        SinkRegistry { sinks: Vec::new() }
    }

    pub fn register<S: Sink + Send + Sync + 'static>(&mut self, sink: S) {
        self.sinks.push(boxed(sink));
    }

    pub fn register_boxed(&mut self, sink: BoxedSink) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ErasedSink> {
        self.sinks.iter().map(|s| s.as_ref())
    }
}
