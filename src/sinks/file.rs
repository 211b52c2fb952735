//! Asynchronous file sink
//!
//! Records are queued on a bounded channel and written by one background
//! thread that owns the file. A full queue blocks the caller.
//!
//! Shutdown policy: when the worker receives the shutdown signal it stops
//! waiting for new records, writes everything already queued, flushes and
//! exits. A `write` either returns `Ok` and ends up in the file, or fails with
//! [`LoggerError::SinkClosed`]. Writers hold a read guard on the closed flag
//! across the check and the send, and [`FileSink::close`] takes the write
//! guard before signalling, so no record is queued after the worker drained.

use crate::core::{LoggerError, Result, Sink, SinkMetrics};
use crossbeam_channel::{bounded, select, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout used when a sink is dropped (5 seconds)
///
/// For custom timeout control, use [`FileSink::shutdown`] instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Default queue capacity for [`FileSink::open_default`]
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

enum Message {
    Record(Vec<u8>),
    Flush(Sender<io::Result<()>>),
}

/// File sink with a background drain thread
///
/// # Example
///
/// ```no_run
/// use rust_structured_logger::prelude::*;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let sink = Arc::new(FileSink::open("logs/app.log", 1024)?);
/// let logger = presets::json(sink.clone(), LogLevel::Informational)?;
///
/// logger.info("service started", &[Prop::uint("port", 8080)])?;
///
/// if !sink.shutdown(Duration::from_secs(10)) {
///     eprintln!("log file may be incomplete");
/// }
/// # Ok::<(), rust_structured_logger::LoggerError>(())
/// ```
pub struct FileSink {
    path: PathBuf,
    sender: Sender<Message>,
    shutdown_tx: Sender<()>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    closed: RwLock<bool>,
    metrics: Arc<SinkMetrics>,
}

impl FileSink {
    /// Open `path` for appending and start the drain thread
    ///
    /// Parent directories are created when missing. `capacity` bounds the
    /// number of queued records; 0 makes every write wait for the worker.
    pub fn open(path: impl AsRef<Path>, capacity: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "creating log directory",
                    parent.display().to_string(),
                    e,
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        let (sender, receiver) = bounded(capacity);
        let (shutdown_tx, shutdown_rx) = bounded(0);
        let metrics = Arc::new(SinkMetrics::new());

        let worker = Worker {
            writer: BufWriter::new(file),
            path: path.clone(),
            metrics: Arc::clone(&metrics),
        };
        let handle = thread::Builder::new()
            .name("file-sink".to_string())
            .spawn(move || worker.run(receiver, shutdown_rx))
            .map_err(|e| LoggerError::io_operation("spawning file sink worker", "", e))?;

        Ok(Self {
            path,
            sender,
            shutdown_tx,
            worker: Mutex::new(Some(handle)),
            closed: RwLock::new(false),
            metrics,
        })
    }

    pub fn open_default(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, DEFAULT_QUEUE_CAPACITY)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.read()
    }

    /// Signal the worker to drain the queue and stop
    ///
    /// Waits for in-flight writes to finish queueing, then returns once the
    /// worker has taken the signal; use [`FileSink::wait`] to block until the
    /// file is flushed. Later writes fail with [`LoggerError::SinkClosed`].
    /// Calling `close` again does nothing.
    pub fn close(&self) {
        {
            let mut closed = self.closed.write();
            if *closed {
                return;
            }
            *closed = true;
        }
        // Err means the worker already exited
        let _ = self.shutdown_tx.send(());
    }

    /// Wait up to `timeout` for the worker to finish
    ///
    /// Returns `true` if the worker exited cleanly in time. On timeout the
    /// worker is left running detached.
    pub fn wait(&self, timeout: Duration) -> bool {
        let Some(handle) = self.worker.lock().take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] File sink worker panicked: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] File sink worker for {} did not finish within {:?}. \
                     Some records may be lost.",
                    self.path.display(),
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }

    /// [`close`](FileSink::close) followed by [`wait`](FileSink::wait)
    pub fn shutdown(&self, timeout: Duration) -> bool {
        self.close();
        self.wait(timeout)
    }
}

impl Sink for FileSink {
    /// Queue a copy of `record`; blocks while the queue is full
    fn write(&self, record: &[u8]) -> Result<()> {
        // held until the record is queued; the worker keeps draining meanwhile
        let closed = self.closed.read();
        if *closed {
            return Err(LoggerError::sink_closed(self.name()));
        }
        self.sender
            .send(Message::Record(record.to_vec()))
            .map_err(|_| LoggerError::sink_closed(self.name()))?;
        self.metrics.record_queued();
        Ok(())
    }

    /// Wait until every record queued before this call is written and flushed
    fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = bounded(1);
        {
            let closed = self.closed.read();
            if *closed {
                return Err(LoggerError::sink_closed(self.name()));
            }
            self.sender
                .send(Message::Flush(ack_tx))
                .map_err(|_| LoggerError::sink_closed(self.name()))?;
        }

        match ack_rx.recv() {
            Ok(result) => result.map_err(|e| {
                LoggerError::io_operation("flushing log file", self.path.display().to_string(), e)
            }),
            Err(_) => Err(LoggerError::writer("file sink worker stopped before flushing")),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

        let failed = self.metrics.write_failures();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] File sink for {} closed with {} failed writes \
                 (failure rate: {:.2}%)",
                self.path.display(),
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Drain side, owned by the background thread
struct Worker {
    writer: BufWriter<File>,
    path: PathBuf,
    metrics: Arc<SinkMetrics>,
}

impl Worker {
    fn run(mut self, queue: Receiver<Message>, shutdown: Receiver<()>) {
        loop {
            select! {
                recv(queue) -> msg => match msg {
                    Ok(msg) => self.handle(msg),
                    Err(_) => break,
                },
                recv(shutdown) -> _ => {
                    while let Ok(msg) = queue.try_recv() {
                        self.handle(msg);
                    }
                    break;
                }
            }

            if queue.is_empty() {
                self.flush_or_report();
            }
        }

        self.flush_or_report();
    }

    fn handle(&mut self, msg: Message) {
        match msg {
            Message::Record(bytes) => match self.writer.write_all(&bytes) {
                Ok(()) => self.metrics.record_written(bytes.len()),
                Err(e) => {
                    self.metrics.record_failed();
                    eprintln!(
                        "[LOGGER ERROR] Failed to write to {}: {}",
                        self.path.display(),
                        e
                    );
                }
            },
            Message::Flush(ack) => {
                // the requester may have given up waiting
                let _ = ack.send(self.writer.flush());
            }
        }
    }

    fn flush_or_report(&mut self) {
        if let Err(e) = self.writer.flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
