//! Output destinations for rendered lines

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// A byte stream that receives rendered lines for one or more levels.
///
/// Every line is handed over in a single `write_all` while the stream is
/// locked, so concurrent callers never interleave partial lines. The logger
/// never opens or closes the standard streams; a `Writer` destination is
/// dropped together with its last clone.
#[derive(Clone)]
pub enum Destination {
    Stdout,
    Stderr,
    Writer(SharedWriter),
}

impl Destination {
    /// Wrap any writer. Clones of the returned destination share it.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Destination::Writer(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Open `path` for appending, creating it if needed.
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log destination",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;
        Ok(Self::from_writer(file))
    }

    /// Default destination for a level: errors go to stderr.
    pub fn for_level(level: super::LogLevel) -> Self {
        if level.is_error() {
            Destination::Stderr
        } else {
            Destination::Stdout
        }
    }

    /// Write one complete line and flush it.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self {
            Destination::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line)?;
                out.flush()
            }
            Destination::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(line)?;
                out.flush()
            }
            Destination::Writer(writer) => {
                let mut out = writer.lock();
                out.write_all(line)?;
                out.flush()
            }
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        match self {
            Destination::Stdout => io::stdout().flush(),
            Destination::Stderr => io::stderr().flush(),
            Destination::Writer(writer) => writer.lock().flush(),
        }
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("Stdout"),
            Destination::Stderr => f.write_str("Stderr"),
            Destination::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}
