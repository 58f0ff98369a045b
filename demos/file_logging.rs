//! File logging example
//!
//! Writes standard records and error records to two separate JSONL files.
//!
//! Run with: cargo run --example file_logging

use rust_flat_logger::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    std::fs::create_dir_all("logs")?;

    let logger = Logger::builder()
        .name("worker")
        .namespace("jobs")
        .level(Severity::Info)
        .stdout(FileSink::new("logs/worker.jsonl")?)
        .stderr(FileSink::new("logs/worker.err.jsonl")?)
        .build();

    for job in 0..10 {
        logger.info(&json!({"job": job, "state": "done"}))?;
    }
    logger.error(&json!({"job": 10, "state": "failed"}))?;

    // trace (5) is above the info threshold and is dropped
    logger.trace(&json!({"job": 11}))?;

    logger.flush()?;
    println!("Logs written to logs/worker.jsonl and logs/worker.err.jsonl");
    Ok(())
}
