// src/feeder/artifact.rs

//! Result artifacts: one output file per wordlist.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fs::FileSystem;
use crate::types::WriteMode;

/// Suffix appended to the wordlist's file name.
pub const RESULT_SUFFIX: &str = "_results.txt";

/// `<output_dir>/<wordlist-filename>_results.txt`
pub fn result_path(output_dir: &Path, wordlist: &Path) -> PathBuf {
    let mut name = wordlist.file_name().unwrap_or_default().to_os_string();
    name.push(RESULT_SUFFIX);
    output_dir.join(name)
}

/// Persist the bytes produced for one wordlist.
pub fn persist(fs: &dyn FileSystem, path: &Path, bytes: &[u8], mode: WriteMode) -> io::Result<()> {
    fs.write_file(path, bytes, mode)?;
    debug!(path = ?path, bytes = bytes.len(), %mode, "wrote result artifact");
    Ok(())
}
