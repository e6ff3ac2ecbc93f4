//! Unified logging system
//!
//! Two layers:
//! - `tracing` for developer diagnostics (stderr, or a file under the TUI)
//! - `LogEntry` / `LogStore` for the operator-facing event log in the TUI

pub mod entry;
pub mod filter;
pub mod store;

pub use entry::{LogEntry, LogKind};
pub use filter::{FilterMode, LogFilter};
pub use store::LogStore;

use std::fs::File;
use std::path::Path;
use tokio::sync::mpsc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Where developer traces go
#[derive(Debug, Clone, Copy)]
pub enum TraceTarget<'a> {
    /// Headless commands: compact lines on stderr
    Stderr,
    /// The TUI owns the terminal. Traces go to `file`, or nowhere if it
    /// is missing or cannot be opened.
    Tui { file: Option<&'a Path> },
}

/// Resolved trace destination
#[derive(Debug)]
enum TraceSink {
    Stderr,
    File(File),
    Discard,
}

fn open_sink(target: TraceTarget<'_>) -> TraceSink {
    match target {
        TraceTarget::Stderr => TraceSink::Stderr,
        TraceTarget::Tui { file: None } => TraceSink::Discard,
        TraceTarget::Tui { file: Some(path) } => std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_or(TraceSink::Discard, TraceSink::File),
    }
}

/// Initialize tracing
///
/// Call early in main() before any logging occurs.
/// `verbose` selects debug level, otherwise warnings only; `RUST_LOG`
/// overrides both.
pub fn init_tracing(verbose: bool, target: TraceTarget<'_>) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let layer = tracing_subscriber::fmt::layer().with_target(false);
    let layer = match open_sink(target) {
        TraceSink::Stderr => layer
            .with_file(false)
            .with_writer(BoxMakeWriter::new(std::io::stderr))
            .compact()
            .boxed(),
        TraceSink::File(file) => layer
            .with_ansi(false)
            .with_writer(BoxMakeWriter::new(std::sync::Mutex::new(file)))
            .boxed(),
        TraceSink::Discard => layer
            .with_ansi(false)
            .with_writer(BoxMakeWriter::new(std::io::sink))
            .boxed(),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

/// Forward an entry to the UI without blocking.
///
/// Dropped (with a trace) when the channel is full or closed; send tasks
/// must never stall on a slow UI.
pub fn try_log(tx: &Option<mpsc::Sender<LogEntry>>, entry: LogEntry) {
    if let Some(tx) = tx {
        if let Err(e) = tx.try_send(entry) {
            tracing::trace!("log entry dropped: {}", e);
        }
    }
}
