//! Basic logger usage example
//!
//! Demonstrates leveled logging with properties to stdout in each bundled format.
//!
//! Run with: cargo run --example basic_usage

use rust_structured_logger::prelude::*;
use rust_structured_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - Basic Usage Example ===\n");

    // Key-value logger that drops debug messages
    let logger = presets::kv(WriterSink::stdout(), LogLevel::Informational)?;

    println!("1. Logging at different levels:");
    logger.emergency("This is an emergency message", &[])?;
    logger.error("This is an error message", &[Prop::int("code", 500)])?;
    logger.warning("This is a warning message", &[])?;
    logger.info("This is an info message", &[Prop::string("user", "alice")])?;
    logger.debug("Debug message (hidden)", &[])?;

    println!("\n2. Macros with format arguments:");
    let port = 8080;
    info!(logger, "Server listening on port {}", port)?;
    warning!(logger, props: [Prop::uint("port", port)], "Port {} is also used for admin", port)?;

    println!("\n3. Same message in every format:");
    let props = [Prop::string("path", "/health"), Prop::float("latency_ms", 1.25)];
    let loggers = [
        ("rfc3164", presets::syslog_3164(WriterSink::stdout(), LogLevel::Debug, "demo", false)?),
        ("rfc5424", presets::syslog_5424(WriterSink::stdout(), LogLevel::Debug, "demo", "health")?),
        ("json", presets::json(WriterSink::stdout(), LogLevel::Debug)?),
        ("json_pretty", presets::json_pretty(WriterSink::stdout(), LogLevel::Debug, "  ")?),
        ("kv", presets::kv(WriterSink::stdout(), LogLevel::Debug)?),
    ];
    for (name, logger) in &loggers {
        println!("   {}:", name);
        logger.notice("health check", &props)?;
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
