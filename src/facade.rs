use log::{Level, LevelFilter, Log, Metadata};

use crate::{record::Record, severity::Severity};

/// Bridge routing `log` crate records through the shared destination.
struct FacadeLogger;

impl Log for FacadeLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let severity = match record.level() {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warning,
            Level::Info => Severity::Info,
            Level::Debug | Level::Trace => Severity::Debug,
        };
        Record::new(severity).write(record.args());
    }

    fn flush(&self) {}
}

/// Route the `log::error!` macro family through this crate's destination.
///
/// Every facade level is forwarded; `Trace` records land at `Debug`
/// severity. If another logger is already registered the call is silently
/// absorbed.
///
/// ```rust
/// synclog::install_log_facade();
///
/// let file = std::fs::File::create("/tmp/synclog_facade.log").unwrap();
/// synclog::set_destination(Some(Box::new(file)));
///
/// log::warn!("running low on {}", "disk");
/// assert_eq!(
///     std::fs::read_to_string("/tmp/synclog_facade.log").unwrap(),
///     "WARNING: running low on disk\n",
/// );
/// ```
pub fn install_log_facade() {
    if log::set_boxed_logger(Box::new(FacadeLogger)).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}
