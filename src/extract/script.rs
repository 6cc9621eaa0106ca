//! JavaScript reference grammar.

use std::sync::LazyLock;

use regex::Regex;

use super::{Reference, scan};

/// `import "x"`, `import a from "x"`, `import { a } from "x"`, `import("x")`.
static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s*(?:\(\s*|[\w*{}\s,$]*?\bfrom\s*)?["'`]([^"'`]*)["'`]"#)
        .expect("valid import regex")
});

static FETCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bfetch\(\s*["'`]([^"'`]*)["'`]"#).expect("valid fetch regex")
});

static NEW_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bnew\s+URL\(\s*["'`]([^"'`]*)["'`]"#).expect("valid URL regex")
});

static NEW_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bnew\s+Request\(\s*["'`]([^"'`]*)["'`]"#).expect("valid Request regex")
});

/// Extract module specifiers and fetched resources from script text.
pub fn extract_script(content: &str) -> Vec<Reference<'_>> {
    let mut refs = Vec::new();
    for re in [&*IMPORT, &*FETCH, &*NEW_URL, &*NEW_REQUEST] {
        scan(re, content, &mut refs);
    }
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(content: &str) -> Vec<&str> {
        extract_script(content).iter().map(|r| r.path).collect()
    }

    #[test]
    fn test_import_forms() {
        let js = r#"
            import "./side-effect.js";
            import util from './util.js';
            import { a, b as c } from "./named.js";
            import * as ns from `./ns.js`;
            import def, { x } from "./mixed.js";
            const lazy = await import("./lazy.js");
        "#;
        assert_eq!(
            paths(js),
            [
                "./side-effect.js",
                "./util.js",
                "./named.js",
                "./ns.js",
                "./mixed.js",
                "./lazy.js"
            ]
        );
    }

    #[test]
    fn test_import_minified() {
        assert_eq!(paths(r#"import{a}from"./m.js";"#), ["./m.js"]);
    }

    #[test]
    fn test_import_matched_text() {
        let refs = extract_script(r#"import util from "./util.js";"#);
        assert_eq!(refs[0].matched, r#"import util from "./util.js""#);
        assert_eq!(refs[0].rewrite("./util-1.js"), r#"import util from "./util-1.js""#);
    }

    #[test]
    fn test_not_imports() {
        assert!(paths("const important = 'x.js';").is_empty());
        assert!(paths("new URL('a.png', import.meta.url)").contains(&"a.png"));
        assert_eq!(paths("import.meta.url").len(), 0);
    }

    #[test]
    fn test_fetch_url_request() {
        let js = r#"
            fetch("/api/data.json").then(r => r.json());
            const icon = new URL('./icon.svg', import.meta.url);
            const req = new Request(`./feed.xml`, { method: "GET" });
        "#;
        assert_eq!(paths(js), ["/api/data.json", "./icon.svg", "./feed.xml"]);
    }

    #[test]
    fn test_first_argument_only() {
        assert_eq!(paths(r#"fetch("a.json", "b.json")"#), ["a.json"]);
    }

    #[test]
    fn test_non_literal_arguments_ignored() {
        assert!(paths("fetch(url); new URL(base); new Request(req)").is_empty());
    }

    #[test]
    fn test_grammar_order() {
        // fetch before import in the text, but imports are reported first
        let js = r#"fetch("a.json"); import "./b.js";"#;
        assert_eq!(paths(js), ["./b.js", "a.json"]);
    }
}
