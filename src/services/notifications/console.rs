//! Line-oriented console sink shared by senders and notifications.
//!
//! Writes go to stdout by default. `ConsoleOutput::capture` swaps in an
//! in-memory buffer so the exact emitted lines can be inspected.

use crate::error::{AppError, AppResult};
use std::io::Write;
use std::sync::{Arc, Mutex};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Cloneable handle to the console sink
///
/// Clones share the same underlying writer, so a label written by a
/// notification and the delivery line written by its sender land in order.
#[derive(Clone)]
pub struct ConsoleOutput {
    writer: SharedWriter,
}

impl ConsoleOutput {
    /// Console sink over the process's standard output
    pub fn stdout() -> Self {
        Self::from_writer(std::io::stdout())
    }

    /// Console sink over an arbitrary writer
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Console sink backed by an in-memory buffer
    ///
    /// # Returns
    /// The sink and a handle for reading back everything written to it
    pub fn capture() -> (Self, CapturedOutput) {
        let captured = CapturedOutput::default();
        (Self::from_writer(captured.clone()), captured)
    }

    /// Writes one line (a trailing newline is appended) and flushes
    pub fn write_line(&self, line: &str) -> AppResult<()> {
        let mut writer = self.writer.lock().map_err(|_| AppError::Output {
            message: "console writer lock poisoned".to_string(),
            source: None,
        })?;

        writeln!(writer, "{}", line).map_err(|e| AppError::output("failed to write line", e))?;
        writer
            .flush()
            .map_err(|e| AppError::output("failed to flush output", e))
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for ConsoleOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleOutput").finish_non_exhaustive()
    }
}

/// In-memory buffer filled by a capturing `ConsoleOutput`
#[derive(Clone, Default, Debug)]
pub struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        match self.buffer.lock() {
            Ok(buffer) => String::from_utf8_lossy(&buffer).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }

    /// Written lines without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Discards everything written so far
    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| std::io::Error::other("capture buffer lock poisoned"))?;
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
