use std::{fmt::Display, marker::PhantomData, sync::Arc};

use crate::{config, severity::Severity, sync_writer::SyncWriter};

/// One in-flight log line, emitted as a whole when the record drops.
///
/// Opening a record captures the current destination and runs the prefix
/// chain; everything written afterwards goes to that capture even if the
/// destination is replaced in the meantime. While logging is disabled the
/// record carries no writer and every operation on it is a no-op.
pub struct Record {
    writer: Option<SyncWriter>,
    newline: bool,
    // The record is bound to the adapter built at construction; keep it
    // off other threads.
    _not_send: PhantomData<*const ()>,
}

impl Record {
    /// Open a record that terminates its line when dropped.
    pub fn new(severity: Severity) -> Self {
        Self::open(severity, true)
    }

    /// Open a record that leaves its line unterminated when dropped.
    pub fn without_newline(severity: Severity) -> Self {
        Self::open(severity, false)
    }

    fn open(severity: Severity, newline: bool) -> Self {
        let config = config::read_config();
        let writer = if config.sink_valid {
            config.sink.as_ref().map(|sink| {
                let mut writer = SyncWriter::new(Arc::clone(sink));
                for prefix in &config.prefixes {
                    writer.append(&prefix());
                }
                writer.append(severity.as_str());
                writer.append(": ");
                writer
            })
        } else {
            None
        };
        Self {
            writer,
            newline,
            _not_send: PhantomData,
        }
    }

    /// Append a value to the line, returning the record for chaining.
    pub fn write(&mut self, value: impl Display) -> &mut Self {
        if let Some(writer) = &mut self.writer {
            writer.append_display(value);
        }
        self
    }
}

impl Drop for Record {
    fn drop(&mut self) {
        // Emit under the same shared access as construction; the adapter
        // releases its destination claim before the read guard does.
        let _config = config::read_config();
        if let Some(writer) = self.writer.take() {
            writer.emit(self.newline);
        }
    }
}
