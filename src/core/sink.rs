//! Output stream capability

use super::{error::Result, severity::Severity};
use std::fmt;
use std::sync::Arc;

/// A line-oriented output stream
///
/// Sinks are shared between loggers, so writes take `&self` and every
/// implementation serializes its own writes.
pub trait Sink: Send + Sync {
    /// Write one line; the sink adds the line terminator
    fn write_line(&self, line: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}

/// The standard and error stream pair a logger writes to
#[derive(Clone)]
pub struct OutputStreams {
    out: Arc<dyn Sink>,
    err: Arc<dyn Sink>,
}

impl OutputStreams {
    pub fn new(out: impl Sink + 'static, err: impl Sink + 'static) -> Self {
        Self {
            out: Arc::new(out),
            err: Arc::new(err),
        }
    }

    pub fn from_shared(out: Arc<dyn Sink>, err: Arc<dyn Sink>) -> Self {
        Self { out, err }
    }

    /// Process stdout and stderr
    pub fn console() -> Self {
        use crate::sinks::{StderrSink, StdoutSink};
        Self::new(StdoutSink, StderrSink)
    }

    /// Stream for a record at `level`: fatal and error go to the error stream
    pub fn select(&self, level: Severity) -> &dyn Sink {
        if level.is_error_stream() {
            self.err.as_ref()
        } else {
            self.out.as_ref()
        }
    }

    pub fn out(&self) -> &Arc<dyn Sink> {
        &self.out
    }

    pub fn err(&self) -> &Arc<dyn Sink> {
        &self.err
    }

    pub fn flush(&self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }
}

impl Default for OutputStreams {
    fn default() -> Self {
        Self::console()
    }
}

impl fmt::Debug for OutputStreams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputStreams")
            .field("out", &self.out.name())
            .field("err", &self.err.name())
            .finish()
    }
}
