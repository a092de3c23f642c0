//! # synclog
//! Thread-safe logger writing severity-tagged, line-atomic records to one
//! shared destination.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! [dependencies]
//! synclog = "0.1.0"
//! ```
//!
//! ```rust
//! use synclog::set_destination;
//!
//! let file = std::fs::File::create("/tmp/synclog_usage.log").unwrap();
//! set_destination(Some(Box::new(file)));
//!
//! synclog::info!("Hello, world!");
//! assert_eq!(
//!     std::fs::read_to_string("/tmp/synclog_usage.log").unwrap(),
//!     "INFO: Hello, world!\n",
//! );
//! ```
//!
//! Records can also be chained value by value. The line is transferred as a
//! whole when the record drops at the end of the statement:
//! ```rust
//! use synclog::{log, set_destination};
//!
//! let file = std::fs::File::create("/tmp/synclog_chain.log").unwrap();
//! set_destination(Some(Box::new(file)));
//!
//! log!(Warning).write("Pi = ").write(3.14159);
//! assert_eq!(
//!     std::fs::read_to_string("/tmp/synclog_chain.log").unwrap(),
//!     "WARNING: Pi = 3.14159\n",
//! );
//! ```
//!
//! ## Prefixes
//! Prefix functions run fresh for every record, in configured order, ahead
//! of the severity label:
//! ```rust
//! use synclog::{prefix, set_destination, set_prefixes};
//!
//! let file = std::fs::File::create("/tmp/synclog_prefixes.log").unwrap();
//! set_destination(Some(Box::new(file)));
//! set_prefixes(vec![
//!     prefix(|| "[demo] ".to_string()),
//!     prefix(|| format!("{:?} ", std::thread::current().id())),
//! ]);
//!
//! synclog::warning!("careful");
//! let line = std::fs::read_to_string("/tmp/synclog_prefixes.log").unwrap();
//! assert!(line.starts_with("[demo] ThreadId"));
//! assert!(line.ends_with("WARNING: careful\n"));
//! ```
//!
//! ## Multi-threaded logging
//! Records opened on different threads never interleave inside a line:
//! ```rust
//! use synclog::set_destination;
//!
//! let file = std::fs::File::create("/tmp/synclog_threads.log").unwrap();
//! set_destination(Some(Box::new(file)));
//!
//! let handles: Vec<_> = (0..5)
//!     .map(|n| {
//!         std::thread::spawn(move || {
//!             synclog::info!("worker {n} done");
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! let contents = std::fs::read_to_string("/tmp/synclog_threads.log").unwrap();
//! assert_eq!(contents.lines().count(), 5);
//! for line in contents.lines() {
//!     assert!(line.starts_with("INFO: worker "));
//!     assert!(line.ends_with(" done"));
//! }
//! ```

mod config;
mod facade;
mod macros;
mod record;
mod severity;
mod sync_writer;

pub use config::{Destination, PrefixFn, prefix, set_destination, set_prefixes};
pub use facade::install_log_facade;
pub use record::Record;
pub use severity::Severity;
