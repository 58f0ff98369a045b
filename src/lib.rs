//! # Rust Flat Logger
//!
//! A synchronous structured logger that writes one flattened JSON object per
//! call to an injectable standard or error stream.
//!
//! ## Features
//!
//! - **Flat Records**: nested payloads become dotted keys (`svc.boot.code`)
//! - **Severity Filtering**: `fatal=0` through `silly=6`, lower is more severe
//! - **Derived Loggers**: `child`, `sibling` and `type` keep the concrete logger type
//! - **Injectable Streams**: console, file and in-memory sinks
//!
//! ```
//! use rust_flat_logger::prelude::*;
//! use serde_json::json;
//!
//! let err = MemorySink::new();
//! let logger = Logger::builder()
//!     .name("svc")
//!     .namespace("boot")
//!     .stderr(err.clone())
//!     .build();
//!
//! logger.error(&json!({"message": "boot failed", "code": "E1"}))?;
//! assert_eq!(
//!     err.lines()[0],
//!     r#"{"name":"svc","level":1,"type":"svc.boot","svc.boot.message":"boot failed","svc.boot.code":"E1"}"#
//! );
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

pub mod prelude {
    pub use crate::core::{
        Exception, ExceptionCause, Logger, LoggerBuilder, LoggerError, LoggerOptions, Metadata,
        OutputStreams, Result, Severity, Sink, StructuredLogger,
    };
    pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink};
}

pub use crate::core::{
    flatten, Exception, ExceptionCause, Logger, LoggerBuilder, LoggerError, LoggerOptions,
    Metadata, OutputStreams, Result, Severity, Sink, StructuredLogger, DEFAULT_EXCEPTION_CODE,
};
pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink};
