//! HTML reference grammar.

use std::sync::LazyLock;

use regex::{Match, Regex};

use super::{Reference, extract_script, scan};

static HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bhref\s*=\s*["']([^"']*)["']"#).expect("valid href regex")
});

static SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bsrc\s*=\s*["']([^"']*)["']"#).expect("valid src regex"));

/// Inline `<script>` body (any attributes, multi-line).
static SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<script\b[^>]*>(.*?)</script>"#).expect("valid script regex")
});

static SRCSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bsrcset\s*=\s*["']([^"']*)["']"#).expect("valid srcset regex")
});

static OBJECT_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<object\b[^>]*?\bdata\s*=\s*["']([^"']*)["']"#).expect("valid object regex")
});

static CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bcontent\s*=\s*["']([^"']*)["']"#).expect("valid content regex")
});

/// Extract asset references from HTML text.
///
/// Order: `href`, `src`, inline scripts, `srcset` candidates, `<object data>`,
/// then path-like `content` attributes.
pub fn extract_html(content: &str) -> Vec<Reference<'_>> {
    let mut refs = Vec::new();

    scan(&HREF, content, &mut refs);
    scan(&SRC, content, &mut refs);

    for caps in SCRIPT.captures_iter(content) {
        if let Some(body) = caps.get(1) {
            refs.extend(extract_script(body.as_str()));
        }
    }

    for caps in SRCSET.captures_iter(content) {
        if let Some(value) = caps.get(1) {
            push_srcset(content, value, &mut refs);
        }
    }

    scan(&OBJECT_DATA, content, &mut refs);

    // `content` is mostly free text (meta descriptions), keep only path-like values
    let mut meta = Vec::new();
    scan(&CONTENT, content, &mut meta);
    refs.extend(meta.into_iter().filter(|r| is_path_like(r.path)));

    refs
}

/// Split a `srcset` value into one reference per image candidate.
///
/// Each candidate is `url [descriptor]`. The matched text runs from the
/// delimiter before the URL (opening quote, comma or whitespace) through the
/// one after the candidate, so a bare `a.png` never matches inside `img/a.png`.
fn push_srcset<'a>(content: &'a str, value: Match<'a>, refs: &mut Vec<Reference<'a>>) {
    let mut offset = value.start();
    for candidate in value.as_str().split(',') {
        let piece_start = offset;
        offset += candidate.len() + 1;

        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            continue;
        }
        let start = piece_start + (candidate.len() - candidate.trim_start().len());
        let end = start + trimmed.len();
        // The value sits between quotes, so both neighbours exist
        let before = content[..start].chars().next_back().map_or(0, char::len_utf8);
        let after = content[end..].chars().next().map_or(0, char::len_utf8);

        let matched = &content[start - before..end + after];
        let url_len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        refs.push(Reference::new(matched, before, url_len));
    }
}

/// Whether a `content` value looks like a filesystem path.
fn is_path_like(value: &str) -> bool {
    value.starts_with('/') || value.starts_with("./") || value.starts_with("../")
}
