//! Sink implementations

pub mod file;
pub mod memory;
pub mod writer;

pub use file::{FileSink, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT};
pub use memory::MemorySink;
pub use writer::WriterSink;
