//! Per-file state of a walk.
//!
//! A [`RecordBuilder`] owns a file's content while its references are being
//! rewritten. [`RecordBuilder::finalize`] fingerprints the final bytes and
//! freezes the result into a [`FileRecord`], which is what the cache keeps.

use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use crate::asset::AssetKind;
use crate::config::FingerprintConfig;
use crate::utils::hash;
use crate::utils::path::splice_fingerprint;

/// Mutable content of a file being processed.
#[derive(Debug)]
pub struct RecordBuilder {
    /// Path relative to the working directory
    pub rel: PathBuf,
    pub kind: AssetKind,
    /// Raw bytes (opaque kinds) or empty once decoded into `text`
    bytes: Vec<u8>,
    /// Decoded content, rewritten in place (text kinds only)
    text: Option<String>,
}

impl RecordBuilder {
    /// Wrap loaded bytes, decoding them as UTF-8 for text kinds.
    pub fn new(rel: PathBuf, kind: AssetKind, bytes: Vec<u8>) -> Result<Self, FromUtf8Error> {
        if kind.is_text() {
            let text = String::from_utf8(bytes)?;
            Ok(Self {
                rel,
                kind,
                bytes: Vec::new(),
                text: Some(text),
            })
        } else {
            Ok(Self {
                rel,
                kind,
                bytes,
                text: None,
            })
        }
    }

    /// Current (possibly rewritten) text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace every occurrence of `from` with `to`. Returns the number replaced.
    ///
    /// Identical substrings cannot be told apart, so all of them change together.
    pub fn replace_all(&mut self, from: &str, to: &str) -> usize {
        let Some(text) = self.text.as_mut() else {
            return 0;
        };
        if from.is_empty() || from == to {
            return 0;
        }
        let count = text.matches(from).count();
        if count > 0 {
            *text = text.replace(from, to);
        }
        count
    }

    /// Fingerprint the final content and compute the output path.
    ///
    /// Returns the frozen record and the bytes to write.
    pub fn finalize(self, config: &FingerprintConfig) -> (FileRecord, Vec<u8>) {
        let contents = match self.text {
            Some(text) => text.into_bytes(),
            None => self.bytes,
        };

        let fingerprint = self
            .kind
            .is_fingerprinted()
            .then(|| hash::fingerprint(&contents, config.length));

        let output = match &fingerprint {
            Some(fp) => fingerprinted_path(&self.rel, fp, &config.separator),
            None => self.rel.clone(),
        };

        let record = FileRecord {
            rel: self.rel,
            fingerprint,
            output,
        };
        (record, contents)
    }
}

/// Finished, read-only result for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Source path relative to the working directory
    pub rel: PathBuf,
    /// Fingerprint of the written bytes (`None` for markup)
    pub fingerprint: Option<String>,
    /// Output path relative to the output directory
    pub output: PathBuf,
}

/// Splice the fingerprint into the file name of `rel`.
fn fingerprinted_path(rel: &Path, fingerprint: &str, separator: &str) -> PathBuf {
    let Some(name) = rel.file_name() else {
        return rel.to_path_buf();
    };
    let name = splice_fingerprint(&name.to_string_lossy(), fingerprint, separator);
    rel.with_file_name(name)
}
