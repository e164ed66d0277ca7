// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::types::WriteMode;

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir(Vec<OsString>), // List of child names
}

/// In-memory filesystem for tests.
///
/// Writes to a path registered with [`MockFileSystem::fail_writes_to`] fail
/// with the given error kind, which lets tests exercise the result-file
/// error path.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
    failing: Arc<Mutex<HashMap<PathBuf, io::ErrorKind>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut files = HashMap::new();
        // Ensure root exists
        files.insert(PathBuf::from("."), MockEntry::Dir(Vec::new()));

        Self {
            files: Arc::new(Mutex::new(files)),
            failing: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        let mut files = self.files.lock().unwrap();
        files.insert(path.clone(), MockEntry::File(content.into()));
        Self::link_into_parent(&mut files, &path);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        Self::ensure_dir_entry(&mut files, path.as_ref());
    }

    /// Make every write to `path` fail with `kind`.
    pub fn fail_writes_to(&self, path: impl AsRef<Path>, kind: io::ErrorKind) {
        self.failing
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), kind);
    }

    /// Current contents of a file, if it exists.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.files.lock().unwrap().get(path.as_ref()) {
            Some(MockEntry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    fn parent_of(path: &Path) -> Option<&Path> {
        path.parent().map(|parent| {
            if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            }
        })
    }

    fn link_into_parent(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let Some(parent) = Self::parent_of(path) else {
            return;
        };
        if parent == path {
            return;
        }
        Self::ensure_dir_entry(files, parent);
        if let Some(MockEntry::Dir(children)) = files.get_mut(parent) {
            if let Some(name) = path.file_name() {
                if !children.iter().any(|c| c == name) {
                    children.push(name.to_os_string());
                }
            }
        }
    }

    fn ensure_dir_entry(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        if files.contains_key(path) {
            return;
        }
        files.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
        Self::link_into_parent(files, path);
    }
}

impl FileSystem for MockFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        matches!(files.get(path), Some(MockEntry::File(_)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        matches!(files.get(path), Some(MockEntry::Dir(_)))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.add_dir(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8], mode: WriteMode) -> io::Result<()> {
        if let Some(kind) = self.failing.lock().unwrap().get(path) {
            return Err(io::Error::from(*kind));
        }

        let mut files = self.files.lock().unwrap();
        let parent_is_dir = Self::parent_of(path)
            .is_some_and(|p| matches!(files.get(p), Some(MockEntry::Dir(_))));
        if !parent_is_dir {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }

        let mut data = match (mode, files.get(path)) {
            (WriteMode::Append, Some(MockEntry::File(existing))) => existing.clone(),
            (_, Some(MockEntry::Dir(_))) => {
                return Err(io::Error::other(format!("is a directory: {:?}", path)));
            }
            _ => Vec::new(),
        };
        data.extend_from_slice(contents);
        files.insert(path.to_path_buf(), MockEntry::File(data));
        Self::link_into_parent(&mut files, path);
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }
}
