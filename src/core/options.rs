//! Logger options

use super::error::Result;
use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Identity and threshold of a logger
///
/// `name` and `namespace` are taken as-is; they are joined with a `.` to
/// form the record `type`. Options deserialize from config files:
///
/// ```
/// use rust_flat_logger::{LoggerOptions, Severity};
///
/// let options: LoggerOptions =
///     serde_json::from_str(r#"{"name":"svc","namespace":"http","level":"warn"}"#).unwrap();
/// assert_eq!(options.level, Severity::Warn);
/// assert_eq!(options.type_name(), "svc.http");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerOptions {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub level: Severity,
}

impl LoggerOptions {
    /// Options at the most verbose level
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            level: Severity::default(),
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Set the level from its name, e.g. a value read from the environment
    pub fn with_level_str(self, level: &str) -> Result<Self> {
        Ok(self.with_level(level.parse()?))
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// `name.namespace`, the record type and payload key
    pub fn type_name(&self) -> String {
        format!("{}.{}", self.name, self.namespace)
    }
}
