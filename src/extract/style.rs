//! CSS reference grammar.

use std::sync::LazyLock;

use regex::Regex;

use super::{Reference, scan};

/// `url("x")`, `url('x')` and unquoted `url(x)`. Covers `@import url(...)`.
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"url\(\s*(?:"([^"]*)"|'([^']*)'|([^"'()\s]+))\s*\)"#).expect("valid url() regex")
});

/// `@import "x"` without `url()`.
static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@import\s+(?:"([^"]*)"|'([^']*)')"#).expect("valid @import regex")
});

/// Extract `url()` and `@import` targets from stylesheet text.
pub fn extract_style(content: &str) -> Vec<Reference<'_>> {
    let mut refs = Vec::new();
    scan(&URL, content, &mut refs);
    scan(&IMPORT, content, &mut refs);
    refs
}
