//! Summary of one walk.

use std::fmt;
use std::path::PathBuf;

/// Why a reference was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Target file does not exist
    Missing,
    /// URL with a scheme, protocol-relative URL, or fragment-only link
    External,
    /// Target resolves above the working directory
    OutsideRoot,
    /// Target is still being processed (reference cycle)
    Cycle,
    /// Target was written, but an earlier rewrite already changed the matched text
    Overwritten,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing => "missing",
            Self::External => "external",
            Self::OutsideRoot => "outside root",
            Self::Cycle => "cycle",
            Self::Overwritten => "overwritten",
        })
    }
}

/// A reference that was not rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// File containing the reference
    pub parent: PathBuf,
    /// Reference text as written
    pub reference: String,
    pub reason: SkipReason,
}

/// Result of a walk: what was written and what was skipped.
#[derive(Debug, Default, Clone)]
pub struct Report {
    /// `(source, output)` pairs relative to their roots, in write order
    pub emitted: Vec<(PathBuf, PathBuf)>,
    /// Number of reference occurrences rewritten
    pub rewritten: usize,
    /// Files that were walked to but do not exist (only the entry can end up here)
    pub missing_files: Vec<PathBuf>,
    /// References left untouched
    pub skipped: Vec<Skipped>,
}

impl Report {
    pub(super) fn skip(&mut self, parent: &std::path::Path, reference: &str, reason: SkipReason) {
        self.skipped.push(Skipped {
            parent: parent.to_path_buf(),
            reference: reference.to_owned(),
            reason,
        });
    }

    /// Skipped references with the given reason.
    pub fn skipped_with(&self, reason: SkipReason) -> impl Iterator<Item = &Skipped> {
        self.skipped.iter().filter(move |s| s.reason == reason)
    }

    /// Output path of a source file, if it was written.
    pub fn output_of(&self, source: impl AsRef<std::path::Path>) -> Option<&PathBuf> {
        let source = source.as_ref();
        self.emitted
            .iter()
            .find(|(src, _)| src == source)
            .map(|(_, out)| out)
    }

    /// One-line summary for the final log message.
    pub fn summary(&self) -> String {
        let missing = self.skipped_with(SkipReason::Missing).count() + self.missing_files.len();
        let other = self.skipped.len() - self.skipped_with(SkipReason::Missing).count();
        format!(
            "{} file{} written, {} reference{} rewritten, {} missing, {} skipped",
            self.emitted.len(),
            plural(self.emitted.len()),
            self.rewritten,
            plural(self.rewritten),
            missing,
            other
        )
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
