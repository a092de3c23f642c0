use std::{
    io::Write,
    sync::{Arc, LazyLock, Mutex, PoisonError, RwLock, RwLockReadGuard},
};

/// An exclusively-owned output stream.
pub type Destination = Box<dyn Write + Send>;

/// A zero-argument text producer invoked fresh for every record.
pub type PrefixFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Shared logging state. Reconfiguration replaces fields wholesale under
/// the write side of the lock; records read a consistent snapshot under
/// the read side.
pub(crate) struct LogConfig {
    /// Current destination, shared with records still writing to it.
    pub(crate) sink: Option<Arc<Mutex<Destination>>>,
    /// Whether the destination passed its health probe when installed.
    pub(crate) sink_valid: bool,
    /// Prefix functions applied in order at the head of every record.
    pub(crate) prefixes: Vec<PrefixFn>,
}

/// Global logging state, accessible across threads. Starts with no
/// destination, so records are no-ops until [`set_destination`] installs one.
static GLOBAL_LOG_CONFIG: LazyLock<RwLock<LogConfig>> = LazyLock::new(|| {
    RwLock::new(LogConfig {
        sink: None,
        sink_valid: false,
        prefixes: Vec::new(),
    })
});

/// Shared read access to the global state. A lock poisoned by a panic on
/// another thread is recovered rather than propagated; logging keeps
/// working after the panic.
pub(crate) fn read_config() -> RwLockReadGuard<'static, LogConfig> {
    GLOBAL_LOG_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Install a new destination stream, or disable logging with `None`.
///
/// The stream is probed with a flush before use. A handle that fails the
/// probe is kept but marked invalid, turning every record into a no-op
/// until the next reconfiguration. Records opened before the call finish
/// their line on the destination they captured at construction.
pub fn set_destination(destination: Option<Destination>) {
    let mut config = GLOBAL_LOG_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    match destination {
        Some(mut sink) => {
            let healthy = sink.flush().is_ok();
            config.sink = Some(Arc::new(Mutex::new(sink)));
            config.sink_valid = healthy;
        }
        None => {
            config.sink = None;
            config.sink_valid = false;
        }
    }
}

/// Replace the prefix chain applied at the head of every record.
///
/// Prefixes run while the opening record holds read access to the global
/// state; a prefix that calls [`set_destination`] or [`set_prefixes`]
/// deadlocks.
pub fn set_prefixes(prefixes: Vec<PrefixFn>) {
    let mut config = GLOBAL_LOG_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    config.prefixes = prefixes;
}

/// Wrap a closure as a [`PrefixFn`] ready for [`set_prefixes`].
pub fn prefix<F>(prefix: F) -> PrefixFn
where
    F: Fn() -> String + Send + Sync + 'static,
{
    Arc::new(prefix)
}
