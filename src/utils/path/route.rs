//! Reference string utilities.
//!
//! Provides consistent handling of the path strings embedded in assets:
//! - Link type detection (external vs local file)
//! - Query/fragment separation
//! - Fingerprint splicing before the extension

/// Check if a link is external (has a URL scheme like http:, mailto:, data:,
/// or is protocol-relative like `//cdn.example.com/x.js`)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("//cdn.example.com/lib.js"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.txt"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    if link.starts_with("//") {
        return true;
    }
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a reference into its path and a `?query`/`#fragment` suffix.
///
/// The suffix keeps its leading delimiter so it can be appended back verbatim.
///
/// # Examples
/// ```ignore
/// assert_eq!(split_query_fragment("app.js?v=2#x"), ("app.js", "?v=2#x"));
/// assert_eq!(split_query_fragment("app.js"), ("app.js", ""));
/// ```
#[inline]
pub fn split_query_fragment(url: &str) -> (&str, &str) {
    match url.find(['?', '#']) {
        Some(pos) => url.split_at(pos),
        None => (url, ""),
    }
}

/// Insert `<separator><fingerprint>` before the extension of the last segment.
///
/// The extension starts at the last `.` of the final segment, unless that dot
/// leads the segment (dotfiles have no extension). Names without an extension
/// get the fingerprint appended.
///
/// # Examples
/// ```ignore
/// assert_eq!(splice_fingerprint("./js/app.min.js", "abc123", "-"), "./js/app.min-abc123.js");
/// assert_eq!(splice_fingerprint("LICENSE", "abc123", "-"), "LICENSE-abc123");
/// ```
pub fn splice_fingerprint(path: &str, fingerprint: &str, separator: &str) -> String {
    let name_start = path.rfind('/').map_or(0, |pos| pos + 1);
    let split_at = path[name_start..]
        .rfind('.')
        .filter(|&dot| dot > 0)
        .map_or(path.len(), |dot| name_start + dot);

    let (stem, ext) = path.split_at(split_at);
    format!("{stem}{separator}{fingerprint}{ext}")
}
