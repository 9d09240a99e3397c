#[cfg(test)]
#[path = "../../tests/unit/utils/logging_test.rs"]
mod logging_test;

use std::io::Write;
use std::sync::{Arc, Mutex};

/// A logger type which is called with a single line of text (without trailing newline).
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a logger which prints every message as a line to stdout.
pub fn create_stdout_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

/// Creates a logger which does nothing.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}

/// Creates a logger which writes every message as a newline terminated line to the writer.
/// Writes are serialized, so the logger can be shared between threads without interleaving lines.
/// Write errors are ignored: reporting never fails.
pub fn create_writer_logger<W: Write + Send + 'static>(writer: W) -> InfoLogger {
    let writer = Mutex::new(writer);

    Arc::new(move |msg: &str| {
        if let Ok(mut writer) = writer.lock() {
            let _ = writeln!(writer, "{msg}").and_then(|_| writer.flush());
        }
    })
}
