//! Structured exceptions for `exception` logging

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// Default `code` of an [`Exception`]
pub const DEFAULT_EXCEPTION_CODE: &str = "Exception";

/// The underlying cause of an exception; only its message and stack are kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionCause {
    pub message: String,
    pub stack: String,
}

impl ExceptionCause {
    /// Capture any error: its display text, source chain and a backtrace
    pub fn capture<E: StdError + ?Sized>(err: &E) -> Self {
        let mut stack = format!("Error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str(&format!("\nCaused by: {}", cause));
            source = cause.source();
        }
        stack.push('\n');
        stack.push_str(&Backtrace::force_capture().to_string());

        Self {
            message: err.to_string(),
            stack,
        }
    }
}

/// An application error carrying a code and structured data
///
/// Serializes to the `exception` payload:
/// `{message, code, data, err?: {message, stack}}`. `data` is omitted when
/// unset.
///
/// # Example
///
/// ```
/// use rust_flat_logger::Exception;
/// use serde_json::json;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// let ex = Exception::new("failed to load config")
///     .with_code("E_CONFIG")
///     .with_data(json!({"path": "/etc/app"}))
///     .with_cause(&io);
///
/// assert_eq!(ex.code, "E_CONFIG");
/// assert_eq!(ex.err.as_ref().unwrap().message, "config.toml");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exception {
    pub message: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<ExceptionCause>,
}

impl Exception {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: DEFAULT_EXCEPTION_CODE.to_string(),
            data: None,
            err: None,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    #[must_use]
    pub fn with_cause<E: StdError + ?Sized>(mut self, err: &E) -> Self {
        self.err = Some(ExceptionCause::capture(err));
        self
    }

    /// Attach a cause whose message and stack are already known
    #[must_use]
    pub fn with_cause_parts(
        mut self,
        message: impl Into<String>,
        stack: impl Into<String>,
    ) -> Self {
        self.err = Some(ExceptionCause {
            message: message.into(),
            stack: stack.into(),
        });
        self
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl StdError for Exception {}
