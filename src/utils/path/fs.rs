//! Lexical path normalization.
//!
//! Reference targets are resolved without touching the filesystem so that
//! the same file reached through different spellings (`./a.js`, `b/../a.js`)
//! maps to one cache key.

use std::path::{Component, Path, PathBuf};

/// Normalize a path relative to some root, resolving `.` and `..` lexically.
///
/// Returns `None` when the path climbs above its root or is absolute.
///
/// # Example
/// ```ignore
/// assert_eq!(normalize_relative(Path::new("js/../css/./a.css")), Some("css/a.css".into()));
/// assert_eq!(normalize_relative(Path::new("../a.css")), None);
/// ```
pub fn normalize_relative(path: &Path) -> Option<PathBuf> {
    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::Normal(part) => parts.push(part),
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(parts.iter().collect())
}
