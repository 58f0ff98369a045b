//! Custom logger variant example
//!
//! A logger type with its own methods stays that type through
//! `child`, `sibling` and `type`.
//!
//! Run with: cargo run --example custom_variant

use rust_flat_logger::prelude::*;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Clone)]
struct HttpLogger {
    inner: Logger,
}

impl HttpLogger {
    fn new(service: &str) -> Self {
        Self {
            inner: Logger::new(LoggerOptions::new(service, "http")),
        }
    }

    fn access(&self, method: &str, path: &str, status: u16, elapsed: Duration) -> Result<()> {
        let data = json!({
            "method": method,
            "path": path,
            "status": status,
            "elapsed_ms": elapsed.as_millis() as u64,
        });
        if status >= 500 {
            self.error(&data)
        } else {
            self.info(&data)
        }
    }
}

impl StructuredLogger for HttpLogger {
    fn options(&self) -> &LoggerOptions {
        self.inner.options()
    }

    fn metadata(&self) -> &Metadata {
        self.inner.metadata()
    }

    fn streams(&self) -> &OutputStreams {
        self.inner.streams()
    }

    fn rebuild(&self, options: LoggerOptions, metadata: Metadata) -> Self {
        Self {
            inner: self.inner.rebuild(options, metadata),
        }
    }
}

fn main() -> Result<()> {
    let http = HttpLogger::new("gateway");

    // Still an HttpLogger after derivation
    let tenant = http.child(Metadata::new().with_field("tenant", "acme"));
    tenant.access("GET", "/orders", 200, Duration::from_millis(12))?;

    let admin = tenant.r#type("admin");
    admin.access("POST", "/users", 503, Duration::from_millis(840))?;

    admin.flush()
}
