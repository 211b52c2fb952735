//! Syslog formatting example
//!
//! Demonstrates syslog configuration, per-message header overrides and
//! residual property handling.
//!
//! Run with: cargo run --example syslog_logging

use rust_structured_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Structured Logger - Syslog Example ===\n");

    println!("1. RFC 3164 with local0 facility:");
    let bsd = Logger::builder()
        .formatter(Syslog3164Format::new(
            SyslogConfig::default().with_tag("demo").with_facility(16),
        )?)
        .sink(WriterSink::stdout())
        .build()?;
    bsd.info("plain message", &[Prop::string("detail", "x")])?;
    bsd.warning(
        "overridden header",
        &[
            Prop::string(SYSLOG_HOSTNAME, "edge-01"),
            Prop::string(SYSLOG_TAG, "cron"),
        ],
    )?;

    println!("\n2. RFC 5424 with JSON residual properties:");
    let ietf = Logger::builder()
        .formatter(Syslog5424Format::new(
            SyslogConfig::default()
                .with_app_name("billing")
                .with_tag("invoice")
                .with_residual(ResidualProps::Json),
        )?)
        .sink(WriterSink::stdout())
        .build()?;
    ietf.notice(
        "invoice sent",
        &[Prop::string("customer", "acme"), Prop::uint("total", 1200)],
    )?;
    ietf.notice("worker override", &[Prop::string(SYSLOG_APPNAME, "billing-worker")])?;

    println!("\n3. Facility 0 is rejected:");
    match Syslog3164Format::new(SyslogConfig::default().with_facility(0)) {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(e) => println!("   {}", e),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
