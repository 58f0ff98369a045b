//! Basic logger usage example
//!
//! Demonstrates console logging, severity filtering and derived loggers.
//!
//! Run with: cargo run --example basic_usage

use rust_flat_logger::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    // Most verbose logger writing to stdout/stderr
    let logger = Logger::builder()
        .name("shop")
        .namespace("boot")
        .field("env", "dev")
        .build();

    // Log at every severity; fatal and error land on stderr
    logger.fatal(&json!({"message": "fatal message"}))?;
    logger.error(&json!({"message": "error message", "code": "E1"}))?;
    logger.debug(&json!({"message": "debug message"}))?;
    logger.warn(&json!({"message": "warn message"}))?;
    logger.info(&json!({"message": "info message"}))?;
    logger.trace(&json!({"message": "trace message"}))?;
    logger.silly(&json!({"message": "silly message"}))?;

    // With a warn threshold, debug (2) is still emitted but info (4) is not
    let quiet = Logger::builder()
        .options(LoggerOptions::new("shop", "boot").with_level(Severity::Warn))
        .build();
    quiet.debug(&json!({"visible": true}))?;
    quiet.info(&json!({"visible": false}))?;

    // Derived loggers
    let request = logger
        .sibling("http")
        .child(Metadata::new().with_field("request_id", "r-123"));
    request.info(&json!({"method": "GET", "path": "/cart", "status": 200}))?;

    let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
    request.exception(
        &Exception::new("checkout failed")
            .with_code("E_CHECKOUT")
            .with_data(json!({"cart": 17}))
            .with_cause(&cause),
    )?;

    logger.flush()
}
