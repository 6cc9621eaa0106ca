//! Asset kind definitions.

use std::path::Path;

use crate::config::{KindsConfig, ext_in};

/// Kind of static asset, derived from the file extension.
///
/// Selects the reference grammar and whether the file gets a fingerprinted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// HTML page. Stable entry point, never renamed.
    Markup,
    /// JavaScript module or script.
    Script,
    /// CSS stylesheet.
    Stylesheet,
    /// Web app manifest (JSON).
    Manifest,
    /// Anything else. Copied byte-for-byte.
    Opaque,
}

impl AssetKind {
    /// Classify a path by its extension.
    pub fn from_path(path: &Path, kinds: &KindsConfig) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Opaque;
        };

        if ext_in(&kinds.markup, ext) {
            Self::Markup
        } else if ext_in(&kinds.script, ext) {
            Self::Script
        } else if ext_in(&kinds.stylesheet, ext) {
            Self::Stylesheet
        } else if ext_in(&kinds.manifest, ext) {
            Self::Manifest
        } else {
            Self::Opaque
        }
    }

    /// Whether output files of this kind embed a fingerprint.
    #[inline]
    pub const fn is_fingerprinted(self) -> bool {
        !matches!(self, Self::Markup)
    }

    /// Whether the content is decoded and rewritten as text.
    #[inline]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Opaque)
    }
}
