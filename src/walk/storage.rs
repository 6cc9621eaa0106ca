//! File access used by the walker.
//!
//! The walker only needs existence checks, whole-file reads, recursive
//! directory creation and whole-file writes. [`FsStorage`] provides them on
//! the real filesystem.

use std::fs;
use std::io;
use std::path::Path;

/// File access service injected into the walker.
pub trait Storage {
    /// Whether `path` is an existing regular file.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create `path` and all missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` with `contents`.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Storage backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// In-memory storage that counts reads per path.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: std::cell::RefCell<std::collections::BTreeMap<std::path::PathBuf, Vec<u8>>>,
    reads: std::cell::RefCell<rustc_hash::FxHashMap<std::path::PathBuf, usize>>,
    writes: std::cell::RefCell<rustc_hash::FxHashMap<std::path::PathBuf, usize>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_files(files: &[(&str, &[u8])]) -> Self {
        let storage = Self::default();
        for (path, contents) in files {
            storage.insert(path, contents);
        }
        storage
    }

    pub fn insert(&self, path: &str, contents: &[u8]) {
        self.files
            .borrow_mut()
            .insert(path.into(), contents.to_vec());
    }

    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn get_str(&self, path: &str) -> Option<String> {
        self.get(path).map(|b| String::from_utf8(b).unwrap())
    }

    pub fn reads(&self, path: &str) -> usize {
        self.reads.borrow().get(Path::new(path)).copied().unwrap_or(0)
    }

    pub fn writes(&self, path: &str) -> usize {
        self.writes.borrow().get(Path::new(path)).copied().unwrap_or(0)
    }

    /// All stored paths under `prefix`, relative to it.
    pub fn list(&self, prefix: &str) -> Vec<String> {
        self.files
            .borrow()
            .keys()
            .filter_map(|p| p.strip_prefix(prefix).ok())
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        *self.reads.borrow_mut().entry(path.to_path_buf()).or_default() += 1;
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        *self.writes.borrow_mut().entry(path.to_path_buf()).or_default() += 1;
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
