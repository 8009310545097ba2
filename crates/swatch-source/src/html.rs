//! Stylesheet discovery in an HTML document.
//!
//! Markup is scanned with patterns rather than parsed into a DOM: only
//! `<style>` bodies and `<link>` tags matter here.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::urls::{extract_import_urls, resolve_url};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|error| panic!("invalid built-in pattern {pattern}: {error}"))
}

static STYLE_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)<style\b[^>]*>(.*?)</style\s*>"));

static LINK_ELEMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)<link\b([^>]*)>"));

/// `name=value` with double, single, or no quotes. Groups 2/3/4 hold the value.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"(?i)([a-z][a-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
});

/// Bodies of every `<style>` element, in document order. Blank bodies are skipped.
#[must_use]
pub fn extract_inline_styles(html: &str) -> Vec<String> {
    let styles: Vec<String> = STYLE_ELEMENT
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .filter(|body| !body.trim().is_empty())
        .collect();
    tracing::debug!(count = styles.len(), "extracted inline <style> blocks");
    styles
}

/// Absolute URLs of every external stylesheet the page pulls in.
///
/// `<link rel="stylesheet">` targets come first, then `@import` targets
/// found in inline `<style>` blocks. Each URL appears once, at its first
/// position.
#[must_use]
pub fn extract_stylesheet_links(html: &str, base: &Url) -> Vec<Url> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for caps in LINK_ELEMENT.captures_iter(html) {
        let attributes = &caps[1];
        if !is_stylesheet_link(attributes) {
            continue;
        }
        let Some(href) = attribute(attributes, "href") else {
            continue;
        };
        match resolve_url(href, base) {
            Ok(url) => {
                if seen.insert(url.clone()) {
                    urls.push(url);
                }
            }
            Err(error) => tracing::warn!(href, %error, "failed to resolve stylesheet URL"),
        }
    }

    for style in extract_inline_styles(html) {
        for url in extract_import_urls(&style, base) {
            if seen.insert(url.clone()) {
                urls.push(url);
            }
        }
    }

    tracing::debug!(count = urls.len(), "found external stylesheets");
    urls
}

fn is_stylesheet_link(attributes: &str) -> bool {
    attribute(attributes, "rel").is_some_and(|rel| {
        rel.split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("stylesheet"))
    })
}

fn attribute<'a>(attributes: &'a str, name: &str) -> Option<&'a str> {
    ATTRIBUTE.captures_iter(attributes).find_map(|caps| {
        if !caps[1].eq_ignore_ascii_case(name) {
            return None;
        }
        caps.get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|value| value.as_str())
            .filter(|value| !value.trim().is_empty())
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    fn links(html: &str) -> Vec<String> {
        extract_stylesheet_links(html, &base())
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn inline_styles_in_document_order() {
        let html = r#"<head><style>a{color:red}</style><STYLE type="text/css">
            b{color:blue}
        </STYLE><style>   </style></head>"#;
        let styles = extract_inline_styles(html);
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[0], "a{color:red}");
        assert!(styles[1].contains("b{color:blue}"));
    }

    #[test]
    fn link_attributes_in_any_order_and_quoting() {
        let html = r#"
            <link rel="stylesheet" href="/a.css">
            <link href='b.css' rel='stylesheet' media="print">
            <link type=text/css rel=stylesheet href=c.css />
            <link rel="icon" href="/favicon.ico">
            <link rel="preload" href="/font.woff2">
        "#;
        assert_eq!(
            links(html),
            vec![
                "https://example.com/a.css",
                "https://example.com/b.css",
                "https://example.com/c.css",
            ]
        );
    }

    #[test]
    fn links_precede_imports_and_duplicates_collapse() {
        let html = r#"<style>@import url("/theme.css"); @import "/a.css";</style>
                      <link rel="stylesheet" href="https://example.com/a.css">
                      <link rel="stylesheet" href="/a.css">"#;
        assert_eq!(
            links(html),
            vec!["https://example.com/a.css", "https://example.com/theme.css"]
        );
    }

    #[test]
    fn link_without_href_is_ignored() {
        assert!(links(r#"<link rel="stylesheet">"#).is_empty());
        assert!(links(r#"<link rel="stylesheet" href="">"#).is_empty());
    }
}
