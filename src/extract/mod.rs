//! Reference extraction: find the asset paths embedded in text content.
//!
//! One grammar per [`AssetKind`]:
//!
//! | Kind         | Grammar                                                   |
//! |--------------|-----------------------------------------------------------|
//! | `Markup`     | `href`, `src`, inline `<script>`, `srcset`, `<object data>`, path-like `content` |
//! | `Script`     | `import`, `fetch()`, `new URL()`, `new Request()`         |
//! | `Stylesheet` | `url()`, `@import`                                        |
//! | `Manifest`   | `"src"` values                                            |
//! | `Opaque`     | nothing                                                   |
//!
//! All extractors are pure and total: malformed content yields fewer
//! matches, never an error. Results follow grammar order, then position.

mod html;
mod manifest;
mod script;
mod style;

use regex::Regex;

use crate::asset::AssetKind;

pub use html::extract_html;
pub use manifest::extract_manifest;
pub use script::extract_script;
pub use style::extract_style;

/// One in-text pointer to another asset, borrowed from the scanned content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Literal matched substring (e.g. `href="app.js"`)
    pub matched: &'a str,
    /// Embedded path (e.g. `app.js`)
    pub path: &'a str,
    /// Byte offset of `path` inside `matched`
    pub path_offset: usize,
}

impl<'a> Reference<'a> {
    /// Build a reference from a matched span and the path span inside it.
    fn new(matched: &'a str, path_offset: usize, path_len: usize) -> Self {
        Self {
            matched,
            path: &matched[path_offset..path_offset + path_len],
            path_offset,
        }
    }

    /// The matched text with its path replaced by `new_path`.
    pub fn rewrite(&self, new_path: &str) -> String {
        let end = self.path_offset + self.path.len();
        format!(
            "{}{}{}",
            &self.matched[..self.path_offset],
            new_path,
            &self.matched[end..]
        )
    }
}

/// Extract references from `content` using the grammar for `kind`.
pub fn extract(content: &str, kind: AssetKind) -> Vec<Reference<'_>> {
    match kind {
        AssetKind::Markup => extract_html(content),
        AssetKind::Script => extract_script(content),
        AssetKind::Stylesheet => extract_style(content),
        AssetKind::Manifest => extract_manifest(content),
        AssetKind::Opaque => Vec::new(),
    }
}

/// Push one reference per match of `re`.
///
/// The path is the first capture group that participated in the match, so
/// alternations like `"(..)"|'(..)'` work without backreferences.
fn scan<'a>(re: &Regex, content: &'a str, out: &mut Vec<Reference<'a>>) {
    for caps in re.captures_iter(content) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(path) = caps.iter().skip(1).flatten().next() else {
            continue;
        };
        out.push(Reference::new(
            whole.as_str(),
            path.start() - whole.start(),
            path.len(),
        ));
    }
}
