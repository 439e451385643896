use std::fmt;
use std::io::{self, Write};

/// Run-scoped, append-only line destination.
///
/// One instance per run; concurrent runs must use independent destinations so
/// their lines never interleave. The dispatcher only ever appends.
pub trait LogDestination {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Adapts any `io::Write` (stdout, a build log file) into a [`LogDestination`].
pub struct WriteLog<W> {
    inner: W,
}

impl<W: Write> WriteLog<W> {
    pub fn new(inner: W) -> Self {
        WriteLog { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LogDestination for WriteLog<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{line}")
    }
}

/// The only output channel handed to a sink during one dispatch call.
///
/// Every line is prefixed with `[<display name>] ` so output from different
/// sinks sharing one run log stays attributable. Sinks must not write to the
/// underlying destination directly.
pub struct SinkLog<'a> {
    name: &'a str,
    out: &'a mut dyn LogDestination,
}

impl<'a> SinkLog<'a> {
    pub fn new(name: &'a str, out: &'a mut dyn LogDestination) -> Self {
        SinkLog { name, out }
    }

    /// The display name resolved for this dispatch call.
    pub fn display_name(&self) -> &str {
        self.name
    }

    pub fn line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_line(&format!("[{}] {}", self.name, line))
    }

    pub fn linef(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.line(&args.to_string())
    }
}
