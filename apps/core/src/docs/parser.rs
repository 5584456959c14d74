//! Heuristic extraction of structured fields from documentation text.
//!
//! Input is markdown-like text: headings split it into sections, fenced
//! blocks are code, list items are collected as-is. Anything missing is left
//! empty and filled with defaults by `PartialPayload::into_payload`.

use regex::Regex;
use std::sync::LazyLock;

use super::{DocSourceKind, DocumentationPayload};
use crate::models::BrowserSupport;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]{0,3}#{1,6}[ \t]+(.+?)[ \t]*#*[ \t]*$").expect("Invalid regex: heading"));
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[a-zA-Z0-9_-]*\n(.*?)```").expect("Invalid regex: fence"));
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:[-*+]|\d+\.)\s+(.+)$").expect("Invalid regex: list item"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").expect("Invalid regex: link"));
static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3}(?:\.\d+)?)\s*%").expect("Invalid regex: percent"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace"));

/// Use cases reported when the documentation lists none.
pub const GENERIC_USE_CASES: &[&str] = &[
    "General component styling",
    "Progressive enhancement of existing rules",
];

/// Fields a parser managed to extract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialPayload {
    pub description: Option<String>,
    pub syntax: Option<String>,
    pub use_cases: Vec<String>,
    pub examples: Vec<String>,
    pub see_also: Vec<String>,
    pub browser_support: Option<BrowserSupport>,
}

impl PartialPayload {
    /// Fill in defaults for whatever the parser could not find.
    pub fn into_payload(self, property: &str, doc_reference: String, source: DocSourceKind) -> DocumentationPayload {
        DocumentationPayload {
            property: property.to_string(),
            description: self
                .description
                .unwrap_or_else(|| format!("The `{}` CSS property.", property)),
            syntax: self.syntax.unwrap_or_else(|| format!("{}: value;", property)),
            use_cases: if self.use_cases.is_empty() {
                GENERIC_USE_CASES.iter().map(|s| s.to_string()).collect()
            } else {
                self.use_cases
            },
            examples: self.examples,
            see_also: self.see_also,
            browser_support: self.browser_support,
            doc_reference,
            source,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.syntax.is_none()
            && self.use_cases.is_empty()
            && self.examples.is_empty()
            && self.see_also.is_empty()
            && self.browser_support.is_none()
    }
}

/// Turns raw documentation text into a `PartialPayload`.
pub trait DocParser: Send + Sync + 'static {
    fn parse(&self, raw: &str) -> PartialPayload;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicParser;

struct Section<'a> {
    /// Lowercased heading; empty for the text before the first heading
    title: String,
    body: &'a str,
}

fn split_sections(raw: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut title = String::new();
    let mut start = 0;

    for caps in HEADING_RE.captures_iter(raw) {
        let (Some(whole), Some(heading)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        sections.push(Section {
            title: std::mem::take(&mut title),
            body: &raw[start..whole.start()],
        });
        title = heading.as_str().trim().to_lowercase();
        start = whole.end();
    }
    sections.push(Section {
        title,
        body: &raw[start..],
    });
    sections
}

/// Headings whose body is never taken as the description.
fn is_reserved(title: &str) -> bool {
    const RESERVED: &[&str] = &[
        "syntax",
        "values",
        "formal",
        "browser",
        "see also",
        "related",
        "use case",
        "when to use",
        "example",
        "specification",
    ];
    RESERVED.iter().any(|r| title.contains(r))
}

fn collapse(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

fn strip_links(text: &str) -> String {
    LINK_RE.replace_all(text, "$1").into_owned()
}

fn code_blocks(text: &str) -> Vec<String> {
    FENCE_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|block| !block.is_empty())
        .collect()
}

fn list_items(text: &str) -> Vec<String> {
    let without_code = FENCE_RE.replace_all(text, "");
    LIST_ITEM_RE
        .captures_iter(&without_code)
        .filter_map(|c| c.get(1))
        .map(|m| collapse(&strip_links(m.as_str())).trim_matches('`').to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// First prose paragraph: not code, not a list, not a table.
fn first_paragraph(text: &str) -> Option<String> {
    let without_code = FENCE_RE.replace_all(text, "");
    without_code
        .split("\n\n")
        .map(str::trim)
        .find(|p| {
            !p.is_empty()
                && !p.starts_with('#')
                && !p.starts_with('|')
                && !LIST_ITEM_RE.is_match(p)
        })
        .map(|p| collapse(&strip_links(p)))
}

fn parse_support(text: &str) -> Option<BrowserSupport> {
    let overall = PERCENT_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f32>().ok())?
        .round()
        .clamp(0.0, 100.0) as u8;

    let lower = text.to_lowercase();
    let modern = overall >= 90 || lower.contains("all modern browsers");
    let legacy = if lower.contains("internet explorer") || lower.contains("ie11") || lower.contains("ie 11") {
        if lower.contains("not supported") || lower.contains("no support") {
            "none"
        } else {
            "partial"
        }
    } else if overall >= 97 {
        "full"
    } else if overall >= 90 {
        "partial"
    } else {
        "none"
    };

    Some(BrowserSupport::new(overall, modern, legacy))
}

impl DocParser for HeuristicParser {
    fn parse(&self, raw: &str) -> PartialPayload {
        let sections = split_sections(raw);
        let mut out = PartialPayload::default();

        out.description = sections
            .iter()
            .filter(|s| !is_reserved(&s.title))
            .find_map(|s| first_paragraph(s.body));

        if let Some(section) = sections.iter().find(|s| s.title.contains("syntax")) {
            out.syntax = code_blocks(section.body)
                .into_iter()
                .next()
                .or_else(|| first_paragraph(section.body));
        }

        for section in &sections {
            let title = section.title.as_str();
            if title.contains("browser compat") || title.contains("browser support") {
                out.browser_support = out.browser_support.or_else(|| parse_support(section.body));
            } else if title.contains("see also") || title.contains("related") {
                out.see_also.extend(list_items(section.body));
            } else if title.contains("use case") || title.contains("when to use") {
                out.use_cases.extend(list_items(section.body));
            } else if title.contains("example") {
                out.examples.extend(code_blocks(section.body));
            }
        }

        // No dedicated examples section: any code other than the syntax block
        if out.examples.is_empty() {
            out.examples = code_blocks(raw)
                .into_iter()
                .filter(|block| Some(block) != out.syntax.as_ref())
                .collect();
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"# aspect-ratio

The **aspect-ratio** CSS property sets a preferred ratio for the box.
It is used when calculating auto sizes.

## Syntax

```css
aspect-ratio: 16 / 9;
```

## Use cases

- Responsive video embeds
- Square avatar thumbnails

## Examples

```css
.video { aspect-ratio: 16 / 9; width: 100%; }
```

## Browser compatibility

Supported by all modern browsers, 95.3% global usage. Not supported in Internet Explorer.

## See also

- [object-fit](https://developer.mozilla.org/en-US/docs/Web/CSS/object-fit)
- `contain-intrinsic-size`
"#;

    #[test]
    fn test_parses_full_document() {
        let parsed = HeuristicParser.parse(SAMPLE);

        assert_eq!(
            parsed.description.as_deref(),
            Some("The **aspect-ratio** CSS property sets a preferred ratio for the box. It is used when calculating auto sizes.")
        );
        assert_eq!(parsed.syntax.as_deref(), Some("aspect-ratio: 16 / 9;"));
        assert_eq!(parsed.use_cases, vec!["Responsive video embeds", "Square avatar thumbnails"]);
        assert_eq!(parsed.examples.len(), 1);
        assert!(parsed.examples[0].contains(".video"));
        assert_eq!(parsed.see_also, vec!["object-fit", "contain-intrinsic-size"]);

        let support = parsed.browser_support.unwrap();
        assert_eq!(support.overall, 95);
        assert!(support.modern_browsers);
        assert_eq!(support.legacy_support, "none");
    }

    #[test]
    fn test_examples_fall_back_to_loose_code() {
        let raw = "Intro text.\n\n## Syntax\n\n```css\ngap: 1rem;\n```\n\nMore.\n\n```css\n.grid { gap: 2rem; }\n```\n";
        let parsed = HeuristicParser.parse(raw);
        assert_eq!(parsed.syntax.as_deref(), Some("gap: 1rem;"));
        assert_eq!(parsed.examples, vec![".grid { gap: 2rem; }".to_string()]);
    }

    #[test]
    fn test_garbage_yields_defaults() {
        let parsed = HeuristicParser.parse("");
        assert!(parsed.is_empty());

        let payload = parsed.into_payload("hyphens", "https://example.com".to_string(), DocSourceKind::Direct);
        assert_eq!(payload.syntax, "hyphens: value;");
        assert_eq!(payload.description, "The `hyphens` CSS property.");
        assert_eq!(payload.use_cases.len(), GENERIC_USE_CASES.len());
        assert!(payload.browser_support.is_none());
    }

    #[test]
    fn test_support_thresholds() {
        assert_eq!(parse_support("99% of users").unwrap().legacy_support, "full");
        assert_eq!(parse_support("92%").unwrap().legacy_support, "partial");
        let low = parse_support("71.8 % global").unwrap();
        assert_eq!(low.overall, 72);
        assert!(!low.modern_browsers);
        assert!(parse_support("no numbers here").is_none());
    }
}
