//! Logging macros taking a JSON-literal payload.
//!
//! Each macro expands to the matching [`StructuredLogger`](crate::StructuredLogger)
//! call with the payload built by `serde_json::json!`, and evaluates to the
//! call's `Result`.
//!
//! # Examples
//!
//! ```
//! use rust_flat_logger::prelude::*;
//! use rust_flat_logger::info;
//!
//! let out = MemorySink::new();
//! let logger = Logger::builder().name("svc").namespace("http").stdout(out.clone()).build();
//!
//! let port = 8080;
//! info!(logger, { "event": "listening", "port": port })?;
//!
//! assert!(out.lines()[0].ends_with(r#""svc.http.event":"listening","svc.http.port":8080}"#));
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a JSON payload at an explicit severity.
///
/// ```
/// # use rust_flat_logger::prelude::*;
/// # let logger = Logger::builder().stdout(MemorySink::new()).stderr(MemorySink::new()).build();
/// use rust_flat_logger::log;
/// log!(logger, Severity::Warn, { "retry": 3 }).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($data:tt)+) => {{
        use $crate::StructuredLogger as _;
        $logger.log($level, &$crate::__private::serde_json::json!($($data)+))
    }};
}

/// Log a fatal-level payload.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($data:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $($data)+)
    };
}

/// Log an error-level payload.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($data:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($data)+)
    };
}

/// Log a debug-level payload.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($data:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($data)+)
    };
}

/// Log a warning-level payload.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($data:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($data)+)
    };
}

/// Log an info-level payload.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($data:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($data)+)
    };
}

/// Log a trace-level payload.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($data:tt)+) => {
        $crate::log!($logger, $crate::Severity::Trace, $($data)+)
    };
}

/// Log a silly-level payload.
#[macro_export]
macro_rules! silly {
    ($logger:expr, $($data:tt)+) => {
        $crate::log!($logger, $crate::Severity::Silly, $($data)+)
    };
}
