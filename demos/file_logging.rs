//! File logging example
//!
//! Demonstrates the background file sink, fan-out to stderr and a clean shutdown.
//!
//! Run with: cargo run --example file_logging

use rust_structured_logger::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - File Logging Example ===\n");

    let path = std::env::temp_dir().join("rust_structured_logger").join("demo.log");
    let sink = Arc::new(FileSink::open(&path, 1024)?);

    // Everything goes to the file, only errors to stderr
    let logger = MultiLogger::new()
        .with(presets::json(sink.clone(), LogLevel::Debug)?)
        .with(presets::kv(WriterSink::stderr(), LogLevel::Error)?);

    println!("1. Writing 1000 records to {}", path.display());
    for i in 0..1000u64 {
        logger.debug("processing item", &[Prop::uint("item", i)])?;
    }
    logger.error("item 1000 missing", &[Prop::uint("item", 1000)])?;

    println!("2. Flushing");
    sink.flush()?;
    println!(
        "   written: {}, pending: {}, failed: {}",
        sink.metrics().records_written(),
        sink.metrics().pending(),
        sink.metrics().write_failures()
    );

    println!("3. Shutting down");
    if !sink.shutdown(Duration::from_secs(10)) {
        eprintln!("   Warning: file sink shutdown timed out");
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
