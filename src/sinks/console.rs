//! Console sinks

use crate::core::{Result, Sink};
use std::io::{self, Write};

/// Process standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

/// Process standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<()> {
        // the lock keeps concurrent lines from interleaving
        let mut handle = io::stdout().lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

impl Sink for StderrSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut handle = io::stderr().lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stderr"
    }
}
