//! Call-site macros, each expanding to a single [`Record`](crate::Record).

/// Open a [`Record`](crate::Record) for one log line.
///
/// `log!(Info)` yields the bare record for fluent `write` chaining, while
/// `log!(Info, "...", ..)` writes the formatted text first. Either way the
/// line is terminated and transferred when the record drops at the end of
/// the enclosing statement.
#[macro_export]
macro_rules! log {
    ($severity:ident) => {
        $crate::Record::new($crate::Severity::$severity)
    };
    ($severity:ident, $($arg:tt)+) => {{
        let mut record = $crate::Record::new($crate::Severity::$severity);
        record.write(format_args!($($arg)+));
        record
    }};
}

/// [`log!`] at `Debug` severity.
#[macro_export]
macro_rules! debug {
    () => { $crate::log!(Debug) };
    ($($arg:tt)+) => { $crate::log!(Debug, $($arg)+) };
}

/// [`log!`] at `Info` severity.
#[macro_export]
macro_rules! info {
    () => { $crate::log!(Info) };
    ($($arg:tt)+) => { $crate::log!(Info, $($arg)+) };
}

/// [`log!`] at `Warning` severity.
#[macro_export]
macro_rules! warning {
    () => { $crate::log!(Warning) };
    ($($arg:tt)+) => { $crate::log!(Warning, $($arg)+) };
}

/// [`log!`] at `Error` severity.
#[macro_export]
macro_rules! error {
    () => { $crate::log!(Error) };
    ($($arg:tt)+) => { $crate::log!(Error, $($arg)+) };
}

/// [`log!`] at `Critical` severity.
#[macro_export]
macro_rules! critical {
    () => { $crate::log!(Critical) };
    ($($arg:tt)+) => { $crate::log!(Critical, $($arg)+) };
}
