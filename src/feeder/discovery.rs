// src/feeder/discovery.rs

//! Wordlist discovery.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::fs::FileSystem;

/// Extension a file must have to be treated as a wordlist.
pub const WORDLIST_SUFFIX: &str = ".txt";

/// List the wordlists in `dir`: regular files whose name ends in `.txt`,
/// sorted by file name so runs are reproducible.
pub fn discover_wordlists(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut wordlists: Vec<PathBuf> = fs
        .read_dir(dir)?
        .into_iter()
        .filter(|path| is_wordlist(fs, path))
        .collect();

    wordlists.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = ?dir, count = wordlists.len(), "discovered wordlists");
    Ok(wordlists)
}

fn is_wordlist(fs: &dyn FileSystem, path: &Path) -> bool {
    let named_txt = path
        .file_name()
        .is_some_and(|n| n.as_encoded_bytes().ends_with(WORDLIST_SUFFIX.as_bytes()));
    named_txt && fs.is_file(path)
}
