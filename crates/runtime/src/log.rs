//! Process-wide diagnostic sink.
//!
//! Everything the workspace reports (fatal diagnostics, `log!` lines) ends up
//! as raw bytes in a single [`Sink`]. The sink is installed at most once; if
//! nothing is installed before the first write, standard error is used.

use core::fmt::{self, Write as _};
use std::io::Write as _;
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::OnceCell;

/// Maximum length of one formatted line, newline included.
pub const LINE_CAP: usize = 256;

/// Byte-oriented destination for diagnostics.
pub trait Sink: Send + Sync {
    fn write(&self, bytes: &[u8]);

    /// Called before the process is torn down on a fatal report.
    fn flush(&self) {}
}

/// Writes straight to the process' standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl Sink for Stderr {
    fn write(&self, bytes: &[u8]) {
        let _ = std::io::stderr().lock().write_all(bytes);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// In-memory sink. Clones share the same buffer, so a handle can be kept
/// after another one has been installed.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for Buffer {
    fn write(&self, bytes: &[u8]) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// A sink was already installed, or the stderr default was already
    /// picked up by an earlier write.
    AlreadyInstalled,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::AlreadyInstalled => f.write_str("diagnostic sink already installed"),
        }
    }
}

impl std::error::Error for SinkError {}

static SINK: OnceCell<Box<dyn Sink>> = OnceCell::new();

/// Installs the process-wide sink. Must run before the first diagnostic.
pub fn install<S: Sink + 'static>(sink: S) -> Result<(), SinkError> {
    SINK.set(Box::new(sink))
        .map_err(|_| SinkError::AlreadyInstalled)?;
    tracing::debug!("diagnostic sink installed");
    Ok(())
}

/// Returns the installed sink, falling back to [`Stderr`].
pub fn sink() -> &'static dyn Sink {
    SINK.get_or_init(|| Box::new(Stderr)).as_ref()
}

/// Fixed-capacity line buffer. Output past the capacity is dropped so that
/// formatting never allocates, which matters on the abort path.
pub(crate) struct LineBuf {
    buf: [u8; LINE_CAP],
    pos: usize,
    truncated: bool,
}

impl LineBuf {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0u8; LINE_CAP],
            pos: 0,
            truncated: false,
        }
    }

    /// Terminates the line and returns the bytes written so far.
    pub(crate) fn finish(&mut self) -> &[u8] {
        self.buf[self.pos] = b'\n';
        &self.buf[..=self.pos]
    }
}

impl fmt::Write for LineBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        // last byte is reserved for the newline
        let space = (LINE_CAP - 1).saturating_sub(self.pos);
        let mut len = core::cmp::min(s.len(), space);
        // never split a character
        while !s.is_char_boundary(len) {
            len -= 1;
        }
        if len < s.len() {
            self.truncated = true;
        }
        self.buf[self.pos..self.pos + len].copy_from_slice(&s.as_bytes()[..len]);
        self.pos += len;
        Ok(())
    }
}

/// Formats `args` as a single line and hands it to the sink.
pub fn write_line(args: fmt::Arguments<'_>) {
    let mut line = LineBuf::new();
    let _ = line.write_fmt(args);
    sink().write(line.finish());
}

/// Writes one formatted line to the diagnostic sink.
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::write_line(::core::format_args!($($arg)*))
    };
}
