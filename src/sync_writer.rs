use std::{
    fmt::{self, Write as _},
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

use colored::Colorize;

use crate::config::Destination;

/// Synchronized-write adapter bound to one destination snapshot.
///
/// Bytes accumulate in a private buffer and [`emit`](SyncWriter::emit)
/// transfers the whole line in a single locked write, so records built on
/// other threads never interleave inside a line.
pub(crate) struct SyncWriter {
    sink: Arc<Mutex<Destination>>,
    buf: String,
}

impl SyncWriter {
    pub(crate) fn new(sink: Arc<Mutex<Destination>>) -> Self {
        Self {
            sink,
            buf: String::new(),
        }
    }

    pub(crate) fn append(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub(crate) fn append_display(&mut self, value: impl fmt::Display) {
        // Formatting into a String cannot fail.
        let _ = write!(self.buf, "{value}");
    }

    /// Transfer the accumulated line to the destination and release the
    /// claim on it. The destination lock is held for exactly one line.
    pub(crate) fn emit(self, newline: bool) {
        let mut line = self.buf;
        if newline {
            line.push('\n');
        }
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = write_line(&mut sink, &line) {
            report_fault(&err);
        }
    }
}

fn write_line(sink: &mut Destination, line: &str) -> io::Result<()> {
    sink.write_all(line.as_bytes())?;
    sink.flush()
}

/// Last-resort diagnostic for faults inside the logger itself. Failures
/// land on stderr and are swallowed, never raised to the caller.
fn report_fault(err: &io::Error) {
    eprintln!("{} failed to write log line: {err}", "synclog:".red());
}
