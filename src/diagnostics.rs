// src/diagnostics.rs

//! User-facing error reporting.
//!
//! Every reported failure goes to two places:
//! - a distinctly marked line on STDERR for whoever is watching the run;
//! - an `error!` record in the durable log (see [`crate::logging`]).
//!
//! Result-file I/O failures are additionally classified by cause so the
//! message says what actually went wrong.

use std::fmt;
use std::io;
use std::path::Path;

use tracing::error;

use crate::types::WriteMode;

/// `EIO` on unix targets.
const EIO: i32 = 5;

/// Format an error line the way it is shown on STDERR.
pub fn marked(msg: &str) -> String {
    format!("\n* [ERROR] {msg} *\n")
}

/// Print a marked error line to STDERR.
pub fn print_err(msg: &str) {
    eprintln!("{}", marked(msg));
}

/// Print a marked error line and record it in the durable log.
pub fn report(msg: &str) {
    print_err(msg);
    error!("{}", msg);
}

/// Cause of a failed result-file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoFailure {
    NotFound,
    PermissionDenied,
    DeviceIo,
    Other(Option<i32>),
}

impl IoFailure {
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => IoFailure::NotFound,
            io::ErrorKind::PermissionDenied => IoFailure::PermissionDenied,
            _ if cfg!(unix) && err.raw_os_error() == Some(EIO) => IoFailure::DeviceIo,
            _ => IoFailure::Other(err.raw_os_error()),
        }
    }

    /// Human-readable message for a failure on `path` while writing in `mode`.
    pub fn describe(&self, path: &Path, mode: WriteMode, err: &io::Error) -> String {
        let path = path.display();
        match self {
            IoFailure::NotFound => format!("{path} does not exist"),
            IoFailure::PermissionDenied => format!(
                "{path} does not have permissions for {mode} file mode, if file exists confirm it is closed"
            ),
            IoFailure::DeviceIo => format!("IO error occurred during {mode} mode on {path}"),
            IoFailure::Other(code) => format!(
                "Unexpected file operation error occurred accessing {path}: {}",
                OsCode(*code, err)
            ),
        }
    }
}

struct OsCode<'a>(Option<i32>, &'a io::Error);

impl fmt::Display for OsCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "os error {code}"),
            None => write!(f, "{}", self.1),
        }
    }
}

/// Classify and report a failed result-file write. Returns the class so the
/// caller can keep counts.
pub fn report_io_failure(path: &Path, mode: WriteMode, err: &io::Error) -> IoFailure {
    let failure = IoFailure::classify(err);
    report(&failure.describe(path, mode, err));
    failure
}
