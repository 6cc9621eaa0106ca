//! Reference graph walk: discover, fingerprint, rewrite and emit assets.
//!
//! # Walk Order
//!
//! ```text
//! index.html ──► app.js ──► util.js      (written 1st)
//!     │            └──────────────────── (written 2nd, imports util-<fp>.js)
//!     └────────► style.css ──► bg.png    (written 3rd)
//!                  └──────────────────── (written 4th, url(bg-<fp>.png))
//! index.html ─────────────────────────── (written last, unrenamed)
//! ```
//!
//! Children are finished (rewritten, fingerprinted, written) before their
//! parent's text is rewritten, so a parent's fingerprint always covers the
//! final names of everything it links to.
//!
//! Each path is loaded at most once per walk. The cache is consulted before
//! reading and before recursing, which also terminates reference cycles:
//! a reference back to a file still in progress is left as written.

mod error;
mod record;
mod report;
mod storage;

pub use error::WalkError;
pub use record::{FileRecord, RecordBuilder};
pub use report::{Report, SkipReason, Skipped};
pub use storage::{FsStorage, Storage};

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::asset::AssetKind;
use crate::config::HashConfig;
use crate::extract::{Reference, extract};
use crate::utils::path::{
    is_external_link, normalize_relative, splice_fingerprint, split_query_fragment,
};
use crate::{debug, log};

/// Walk everything reachable from `entry` and emit it under `output_dir`.
///
/// The working directory is the directory containing `entry`.
pub fn walk<S: Storage + ?Sized>(
    entry: &Path,
    output_dir: &Path,
    storage: &S,
    config: &HashConfig,
) -> Result<Report, WalkError> {
    let name = entry
        .file_name()
        .ok_or_else(|| WalkError::InvalidEntry(entry.to_path_buf()))?;
    let working_dir = entry.parent().unwrap_or(Path::new(""));

    let mut walker = Walker::new(storage, config, working_dir, output_dir);
    let rel = PathBuf::from(name);
    if let Visit::Missing = walker.visit(&rel)? {
        log!("skip"; "file {}", entry.display());
        walker.report.missing_files.push(rel);
    }
    Ok(walker.report)
}

/// Cache state of one path.
#[derive(Debug)]
enum Slot {
    Missing,
    /// Being processed further up the stack
    Active,
    Done(FileRecord),
}

/// What a parent learns about a child after visiting it.
#[derive(Debug)]
enum Visit {
    Missing,
    Cycle,
    Done {
        /// `None` for markup, which keeps its name
        fingerprint: Option<String>,
    },
}

/// Per-invocation walk state.
struct Walker<'a, S: Storage + ?Sized> {
    storage: &'a S,
    config: &'a HashConfig,
    working_dir: &'a Path,
    output_dir: &'a Path,
    slots: FxHashMap<PathBuf, Slot>,
    report: Report,
}

impl<'a, S: Storage + ?Sized> Walker<'a, S> {
    fn new(
        storage: &'a S,
        config: &'a HashConfig,
        working_dir: &'a Path,
        output_dir: &'a Path,
    ) -> Self {
        Self {
            storage,
            config,
            working_dir,
            output_dir,
            slots: FxHashMap::default(),
            report: Report::default(),
        }
    }

    /// Process `rel` (normalized, working-relative) and everything it references.
    fn visit(&mut self, rel: &Path) -> Result<Visit, WalkError> {
        match self.slots.get(rel) {
            Some(Slot::Missing) => return Ok(Visit::Missing),
            Some(Slot::Active) => return Ok(Visit::Cycle),
            Some(Slot::Done(record)) => {
                return Ok(Visit::Done {
                    fingerprint: record.fingerprint.clone(),
                });
            }
            None => {}
        }

        let source = self.working_dir.join(rel);
        if !self.storage.exists(&source) {
            self.slots.insert(rel.to_path_buf(), Slot::Missing);
            return Ok(Visit::Missing);
        }
        self.slots.insert(rel.to_path_buf(), Slot::Active);

        let bytes = self
            .storage
            .read(&source)
            .map_err(|err| WalkError::Read(source.clone(), err))?;
        let kind = AssetKind::from_path(rel, &self.config.kinds);
        let mut builder = RecordBuilder::new(rel.to_path_buf(), kind, bytes)
            .map_err(|err| WalkError::Decode(source.clone(), err))?;

        // References come from the unrewritten text; rewrites go to the builder.
        if let Some(text) = builder.text().map(str::to_owned) {
            for reference in extract(&text, kind) {
                self.follow(&mut builder, &reference)?;
            }
        }

        let (record, contents) = builder.finalize(&self.config.fingerprint);
        self.emit(&record, &contents)?;

        let fingerprint = record.fingerprint.clone();
        self.slots.insert(rel.to_path_buf(), Slot::Done(record));
        Ok(Visit::Done { fingerprint })
    }

    /// Resolve one reference of `parent`, walk its target, then rewrite it.
    fn follow(
        &mut self,
        parent: &mut RecordBuilder,
        reference: &Reference<'_>,
    ) -> Result<(), WalkError> {
        let (target, suffix) = split_query_fragment(reference.path);
        if target.is_empty() || is_external_link(target) {
            debug!("skip"; "external {} in {}", reference.path, parent.rel.display());
            self.report
                .skip(&parent.rel, reference.path, SkipReason::External);
            return Ok(());
        }

        let Some(child) = resolve(&parent.rel, target) else {
            log!("skip"; "import {} (outside {})", reference.path, self.working_dir.display());
            self.report
                .skip(&parent.rel, reference.path, SkipReason::OutsideRoot);
            return Ok(());
        };

        match self.visit(&child)? {
            Visit::Missing => {
                log!("skip"; "import {}", reference.path);
                self.report
                    .skip(&parent.rel, reference.path, SkipReason::Missing);
            }
            // Back-links between pages need no rewrite
            Visit::Cycle if AssetKind::from_path(&child, &self.config.kinds) == AssetKind::Markup => {
                debug!("skip"; "back-link {} in {}", reference.path, parent.rel.display());
            }
            Visit::Cycle => {
                log!("skip"; "import {} (cycle from {})", reference.path, parent.rel.display());
                self.report
                    .skip(&parent.rel, reference.path, SkipReason::Cycle);
            }
            // Markup children keep their names, so the reference stays valid
            Visit::Done { fingerprint: None } => {}
            Visit::Done {
                fingerprint: Some(fingerprint),
            } => {
                let separator = &self.config.fingerprint.separator;
                let hashed = format!(
                    "{}{}",
                    splice_fingerprint(target, &fingerprint, separator),
                    suffix
                );
                let rewritten = reference.rewrite(&hashed);
                let count = parent.replace_all(reference.matched, &rewritten);
                if count > 0 {
                    log!("hash"; "import {}", reference.path);
                    self.report.rewritten += count;
                } else if !parent.text().is_some_and(|text| text.contains(&rewritten)) {
                    // An earlier rewrite changed the text this reference was found in
                    log!("skip"; "import {} (overwritten in {})", reference.path, parent.rel.display());
                    self.report
                        .skip(&parent.rel, reference.path, SkipReason::Overwritten);
                }
            }
        }
        Ok(())
    }

    /// Write a finished record under the output directory.
    fn emit(&mut self, record: &FileRecord, contents: &[u8]) -> Result<(), WalkError> {
        let output = self.output_dir.join(&record.output);
        if let Some(dir) = output.parent() {
            self.storage
                .create_dir_all(dir)
                .map_err(|err| WalkError::CreateDir(dir.to_path_buf(), err))?;
        }
        self.storage
            .write(&output, contents)
            .map_err(|err| WalkError::Write(output.clone(), err))?;

        log!("hash"; "file {} {}", self.working_dir.join(&record.rel).display(), record.output.display());
        self.report
            .emitted
            .push((record.rel.clone(), record.output.clone()));
        Ok(())
    }
}

/// Resolve a reference target against the file that contains it.
///
/// Root-absolute targets (`/img/a.png`) resolve against the working directory,
/// everything else against the parent's directory. Returns `None` when the
/// result would leave the working directory.
fn resolve(parent: &Path, target: &str) -> Option<PathBuf> {
    let joined = match target.strip_prefix('/') {
        Some(rooted) => PathBuf::from(rooted),
        None => parent.parent().unwrap_or(Path::new("")).join(target),
    };
    normalize_relative(&joined)
}
