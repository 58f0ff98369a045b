//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::{StderrSink, StdoutSink};
pub use file::FileSink;
pub use memory::MemorySink;

pub use crate::core::{OutputStreams, Sink};
