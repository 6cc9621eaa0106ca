//! Web app manifest reference grammar.

use std::sync::LazyLock;

use regex::Regex;

use super::{Reference, scan};

static SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""src"\s*:\s*"([^"]+)""#).expect("valid src regex"));

/// Extract every `"src"` value (icons, screenshots, shortcuts icons).
pub fn extract_manifest(content: &str) -> Vec<Reference<'_>> {
    let mut refs = Vec::new();
    scan(&SRC, content, &mut refs);
    refs
}
