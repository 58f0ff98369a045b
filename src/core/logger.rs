//! Main logger implementation

use super::{
    error::Result,
    exception::Exception,
    flatten::flatten,
    message,
    metadata::Metadata,
    options::LoggerOptions,
    severity::Severity,
    sink::{OutputStreams, Sink},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Filtering, record construction, serialization and routing
///
/// Implementors provide their parts plus [`rebuild`](Self::rebuild), which
/// creates another instance of the *same* type from new options and metadata.
/// `child`, `sibling` and `type` go through `rebuild`, so a specialized
/// logger keeps its type (and its extra methods) across derivation.
///
/// # Example
///
/// ```
/// use rust_flat_logger::prelude::*;
/// use serde_json::json;
///
/// #[derive(Debug, Clone)]
/// struct AuditLogger {
///     inner: Logger,
/// }
///
/// impl AuditLogger {
///     fn audit(&self, action: &str) -> Result<()> {
///         self.info(&json!({ "action": action }))
///     }
/// }
///
/// impl StructuredLogger for AuditLogger {
///     fn options(&self) -> &LoggerOptions { self.inner.options() }
///     fn metadata(&self) -> &Metadata { self.inner.metadata() }
///     fn streams(&self) -> &OutputStreams { self.inner.streams() }
///     fn rebuild(&self, options: LoggerOptions, metadata: Metadata) -> Self {
///         Self { inner: self.inner.rebuild(options, metadata) }
///     }
/// }
///
/// let audit = AuditLogger { inner: Logger::new(LoggerOptions::new("svc", "audit")) };
/// let scoped: AuditLogger = audit.child(Metadata::new().with_field("user", 7));
/// scoped.audit("login").unwrap();
/// ```
pub trait StructuredLogger: Sized {
    fn options(&self) -> &LoggerOptions;
    fn metadata(&self) -> &Metadata;
    fn streams(&self) -> &OutputStreams;

    /// Create an instance of the implementing type with these parts
    fn rebuild(&self, options: LoggerOptions, metadata: Metadata) -> Self;

    /// Same options, metadata extended by `extra` (extra wins)
    fn child(&self, extra: impl Into<Metadata>) -> Self {
        let metadata = self.metadata().merged(&extra.into());
        self.rebuild(self.options().clone(), metadata)
    }

    /// Same name, level and metadata under another namespace
    fn sibling(&self, namespace: impl Into<String>) -> Self {
        let options = self.options().clone().with_namespace(namespace);
        self.rebuild(options, self.metadata().clone())
    }

    /// Alias for [`sibling`](Self::sibling)
    fn r#type(&self, namespace: impl Into<String>) -> Self {
        self.sibling(namespace)
    }

    /// Whether a call at `level` passes the threshold
    #[inline]
    fn is_enabled(&self, level: Severity) -> bool {
        level <= self.options().level
    }

    fn construct_message(&self, level: Severity, data: Value) -> Value {
        message::construct(self.options(), self.metadata(), level, data)
    }

    /// Flatten the record and encode it as one JSON line
    ///
    /// `level` is already inside the record; overriding implementations may
    /// use it.
    fn serialize(&self, _level: Severity, payload: &Value) -> Result<String> {
        Ok(serde_json::to_string(&flatten(payload))?)
    }

    fn write(&self, level: Severity, line: &str) -> Result<()> {
        self.streams().select(level).write_line(line)
    }

    /// Emit `data` at `level` if the threshold allows it
    ///
    /// Suppressed calls return before the payload is even converted.
    fn log<T: Serialize + ?Sized>(&self, level: Severity, data: &T) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let data = serde_json::to_value(data)?;
        let record = self.construct_message(level, data);
        let line = self.serialize(level, &record)?;
        self.write(level, &line)
    }

    #[inline]
    fn fatal<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        self.log(Severity::Fatal, data)
    }

    #[inline]
    fn error<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        self.log(Severity::Error, data)
    }

    #[inline]
    fn debug<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        self.log(Severity::Debug, data)
    }

    #[inline]
    fn warn<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        self.log(Severity::Warn, data)
    }

    #[inline]
    fn info<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        self.log(Severity::Info, data)
    }

    #[inline]
    fn trace<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        self.log(Severity::Trace, data)
    }

    #[inline]
    fn silly<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        self.log(Severity::Silly, data)
    }

    /// Log an exception at `error`
    fn exception(&self, ex: &Exception) -> Result<()> {
        self.exception_at(ex, Severity::Error)
    }

    /// Log `{message, code, data}` plus `err: {message, stack}` when a cause
    /// is attached
    fn exception_at(&self, ex: &Exception, level: Severity) -> Result<()> {
        self.log(level, ex)
    }

    fn flush(&self) -> Result<()> {
        self.streams().flush()
    }
}

/// The base logger
///
/// Cheap to clone; metadata and sinks are shared, options are copied.
#[derive(Debug, Clone)]
pub struct Logger {
    options: LoggerOptions,
    metadata: Metadata,
    streams: OutputStreams,
}

impl Logger {
    /// Logger writing to stdout/stderr with no metadata
    #[must_use]
    pub fn new(options: LoggerOptions) -> Self {
        Self::with_metadata(options, Metadata::new())
    }

    #[must_use]
    pub fn with_metadata(options: LoggerOptions, metadata: Metadata) -> Self {
        Self {
            options,
            metadata,
            streams: OutputStreams::console(),
        }
    }

    /// Same logger writing to other streams
    #[must_use]
    pub fn with_streams(self, streams: OutputStreams) -> Self {
        Self { streams, ..self }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_flat_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .name("svc")
    ///     .namespace("http")
    ///     .level(Severity::Warn)
    ///     .field("region", "eu-west-1")
    ///     .build();
    ///
    /// assert!(logger.is_enabled(Severity::Debug));
    /// assert!(!logger.is_enabled(Severity::Info));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl StructuredLogger for Logger {
    fn options(&self) -> &LoggerOptions {
        &self.options
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn streams(&self) -> &OutputStreams {
        &self.streams
    }

    fn rebuild(&self, options: LoggerOptions, metadata: Metadata) -> Self {
        Self {
            options,
            metadata,
            streams: self.streams.clone(),
        }
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    options: LoggerOptions,
    metadata: Metadata,
    out: Option<Arc<dyn Sink>>,
    err: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Empty name and namespace, `silly` level, console streams
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::new("", ""),
            metadata: Metadata::new(),
            out: None,
            err: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.options.namespace = namespace.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.options.level = level;
        self
    }

    /// Replace name, namespace and level at once
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add one metadata field
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.metadata = self.metadata.with_field(key, value);
        self
    }

    /// Standard stream sink
    #[must_use = "builder methods return a new value"]
    pub fn stdout<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.out = Some(Arc::new(sink));
        self
    }

    /// Error stream sink
    #[must_use = "builder methods return a new value"]
    pub fn stderr<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.err = Some(Arc::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn streams(mut self, streams: OutputStreams) -> Self {
        self.out = Some(Arc::clone(streams.out()));
        self.err = Some(Arc::clone(streams.err()));
        self
    }

    /// Build the Logger; unset streams fall back to the console
    pub fn build(self) -> Logger {
        let out = self
            .out
            .unwrap_or_else(|| Arc::new(crate::sinks::StdoutSink));
        let err = self
            .err
            .unwrap_or_else(|| Arc::new(crate::sinks::StderrSink));

        Logger {
            options: self.options,
            metadata: self.metadata,
            streams: OutputStreams::from_shared(out, err),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::sinks::MemorySink;
    use serde_json::json;

    fn capture(level: Severity) -> (Logger, MemorySink, MemorySink) {
        let out = MemorySink::new();
        let err = MemorySink::new();
        let logger = Logger::builder()
            .name("svc")
            .namespace("boot")
            .level(level)
            .streams(OutputStreams::new(out.clone(), err.clone()))
            .build();
        (logger, out, err)
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build();
        assert_eq!(logger.options().level, Severity::Silly);
        assert!(logger.metadata().is_empty());
        assert_eq!(logger.streams().out().name(), "stdout");
        assert_eq!(logger.streams().err().name(), "stderr");
    }

    #[test]
    fn test_documented_line_format() {
        let (logger, _out, err) = capture(Severity::Silly);
        logger
            .error(&json!({"message": "boot failed", "code": "E1"}))
            .unwrap();

        let expected = concat!(
            r#"{"name":"svc","level":1,"type":"svc.boot","#,
            r#""svc.boot.message":"boot failed","svc.boot.code":"E1"}"#
        );
        assert_eq!(err.lines(), vec![expected]);
    }

    #[test]
    fn test_threshold_warn() {
        let (logger, out, _err) = capture(Severity::Warn);

        logger.debug(&json!({"step": 1})).unwrap();
        logger.info(&json!({"step": 2})).unwrap();

        let records = out.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["svc.boot.step"], 1);
        assert_eq!(records[0]["level"], 2);
    }

    #[test]
    fn test_suppressed_call_skips_serialization() {
        struct Exploding;
        impl Serialize for Exploding {
            fn serialize<S>(&self, _: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                Err(serde::ser::Error::custom("serialized a suppressed payload"))
            }
        }

        let (logger, out, err) = capture(Severity::Fatal);
        logger.silly(&Exploding).unwrap();
        assert!(out.is_empty() && err.is_empty());

        assert!(matches!(
            logger.fatal(&Exploding),
            Err(LoggerError::JsonError(_))
        ));
    }

    #[test]
    fn test_child_merges_metadata() {
        let (logger, out, _err) = capture(Severity::Silly);
        let logger = logger.child(Metadata::new().with_field("a", 1).with_field("b", 1));
        let child = logger.child(Metadata::new().with_field("b", 2));

        assert_eq!(child.options(), logger.options());
        assert_eq!(child.metadata().get("a"), Some(&json!(1)));
        assert_eq!(child.metadata().get("b"), Some(&json!(2)));
        assert_eq!(logger.metadata().get("b"), Some(&json!(1)));

        child.info(&json!({})).unwrap();
        let record = &out.records().unwrap()[0];
        assert_eq!(record["a"], 1);
        assert_eq!(record["b"], 2);
    }

    #[test]
    fn test_sibling_and_type() {
        let (logger, out, _err) = capture(Severity::Info);
        let logger = logger.child(Metadata::new().with_field("pid", 9));

        let sibling = logger.sibling("db");
        let typed = logger.r#type("db");

        assert_eq!(sibling.options().namespace, "db");
        assert_eq!(sibling.options().name, "svc");
        assert_eq!(sibling.options().level, Severity::Info);
        assert!(sibling.metadata().ptr_eq(logger.metadata()));
        assert_eq!(typed.options(), sibling.options());

        typed.info(&json!({"q": "select"})).unwrap();
        let record = &out.records().unwrap()[0];
        assert_eq!(record["type"], "svc.db");
        assert_eq!(record["svc.db.q"], "select");
        assert_eq!(record["pid"], 9);
    }

    #[test]
    fn test_exception_default_level() {
        let (logger, out, err) = capture(Severity::Silly);
        logger
            .exception(&Exception::new("boom").with_data(json!({"id": 3})))
            .unwrap();

        assert!(out.is_empty());
        let record = &err.records().unwrap()[0];
        assert_eq!(record["level"], 1);
        assert_eq!(record["svc.boot.message"], "boom");
        assert_eq!(record["svc.boot.code"], "Exception");
        assert_eq!(record["svc.boot.data.id"], 3);
        assert!(record.get("svc.boot.err.message").is_none());
    }

    #[test]
    fn test_exception_with_cause_at_silly() {
        let (logger, out, _err) = capture(Severity::Silly);
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let ex = Exception::new("wrapped").with_cause(&cause);
        logger.exception_at(&ex, Severity::Silly).unwrap();

        let record = &out.records().unwrap()[0];
        assert_eq!(record["level"], 6);
        assert_eq!(record["svc.boot.err.message"], "boom");
        assert!(record["svc.boot.err.stack"].is_string());
    }

    #[test]
    fn test_exception_filtered_by_threshold() {
        let (logger, out, err) = capture(Severity::Fatal);
        logger.exception(&Exception::new("quiet")).unwrap();
        assert!(out.is_empty() && err.is_empty());
    }

    #[test]
    fn test_with_streams_keeps_identity() {
        let out = MemorySink::new();
        let logger = Logger::new(LoggerOptions::new("svc", "boot"))
            .with_streams(OutputStreams::new(out.clone(), MemorySink::new()));

        logger.trace(&json!({"ready": true})).unwrap();
        assert_eq!(
            out.lines(),
            vec![r#"{"name":"svc","level":5,"type":"svc.boot","svc.boot.ready":true}"#]
        );
    }

    #[test]
    fn test_non_object_payload_is_spread() {
        let (logger, out, _err) = capture(Severity::Silly);
        logger.info(&5).unwrap();
        logger.info(&json!([])).unwrap();
        logger.info(&["a", "b"]).unwrap();

        assert_eq!(
            out.lines(),
            vec![
                r#"{"name":"svc","level":4,"type":"svc.boot","svc.boot":{}}"#,
                r#"{"name":"svc","level":4,"type":"svc.boot","svc.boot":{}}"#,
                r#"{"name":"svc","level":4,"type":"svc.boot","svc.boot.0":"a","svc.boot.1":"b"}"#,
            ]
        );
    }
}
