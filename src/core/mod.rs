//! Core logger types and traits

pub mod error;
pub mod exception;
pub mod flatten;
pub mod logger;
pub mod message;
pub mod metadata;
pub mod options;
pub mod severity;
pub mod sink;

pub use error::{LoggerError, Result};
pub use exception::{Exception, ExceptionCause, DEFAULT_EXCEPTION_CODE};
pub use flatten::flatten;
pub use logger::{Logger, LoggerBuilder, StructuredLogger};
pub use metadata::Metadata;
pub use options::LoggerOptions;
pub use severity::Severity;
pub use sink::{OutputStreams, Sink};
