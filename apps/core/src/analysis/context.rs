//! Project context detection.
//!
//! Turns a loosely structured context value (a string, an object such as a
//! trimmed `package.json`, an array of notes) into structured hints. Never fails:
//! anything unrecognised yields empty hints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// UI frameworks, in priority order. (needle, canonical name)
pub(crate) const FRAMEWORKS: &[(&str, &str)] = &[
    ("next.js", "next.js"),
    ("\"next\"", "next.js"),
    ("nuxt", "nuxt"),
    ("react", "react"),
    ("vue", "vue"),
    ("angular", "angular"),
    ("svelte", "svelte"),
    ("solid-js", "solid"),
    ("solidjs", "solid"),
    ("astro", "astro"),
];

/// CSS frameworks and styling libraries
pub(crate) const CSS_FRAMEWORKS: &[(&str, &str)] = &[
    ("tailwind", "tailwind"),
    ("bootstrap", "bootstrap"),
    ("bulma", "bulma"),
    ("styled-components", "styled-components"),
    ("@emotion", "emotion"),
    ("emotion", "emotion"),
    ("sass", "sass"),
    ("scss", "sass"),
    ("css modules", "css-modules"),
    (".module.css", "css-modules"),
];

const BUILD_TOOLS: &[(&str, &str)] = &[
    ("vite", "vite"),
    ("webpack", "webpack"),
    ("parcel", "parcel"),
    ("rollup", "rollup"),
    ("esbuild", "esbuild"),
    ("turbopack", "turbopack"),
];

/// Concern tags and the phrases that declare them
const CONSTRAINTS: &[(&str, &[&str])] = &[
    ("performance", &["performance", "fast", "lightweight", "perf budget"]),
    ("accessibility", &["accessibility", "accessible", "a11y", "screen reader", "wcag"]),
    ("responsive", &["responsive", "mobile", "tablet"]),
    ("browser-support", &["legacy", "ie11", "older browsers", "safari 14", "browserslist"]),
    ("dark-mode", &["dark mode", "dark theme", "theming"]),
];

/// Structured hints derived from the project context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHints {
    pub framework: Option<String>,
    pub css_framework: Option<String>,
    pub build_tool: Option<String>,
    pub constraints: BTreeSet<String>,
    /// Every vocabulary term that matched, not just the first per field
    pub detected: BTreeSet<String>,
}

impl ContextHints {
    pub fn is_empty(&self) -> bool {
        self.framework.is_none()
            && self.css_framework.is_none()
            && self.build_tool.is_none()
            && self.constraints.is_empty()
            && self.detected.is_empty()
    }

    /// Framework and CSS framework names usable as ranking hints.
    pub fn ecosystem_names(&self) -> impl Iterator<Item = &str> {
        self.framework
            .iter()
            .chain(self.css_framework.iter())
            .map(String::as_str)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ContextAnalyzer;

impl ContextAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze an optional context value
    pub fn analyze(&self, context: Option<&Value>) -> ContextHints {
        let Some(value) = context else {
            return ContextHints::default();
        };

        let mut text = String::new();
        flatten(value, &mut text);
        let text = text.to_lowercase();

        if text.trim().is_empty() {
            return ContextHints::default();
        }

        let mut hints = ContextHints::default();

        hints.framework = scan(&text, FRAMEWORKS, &mut hints.detected);
        hints.css_framework = scan(&text, CSS_FRAMEWORKS, &mut hints.detected);
        hints.build_tool = scan(&text, BUILD_TOOLS, &mut hints.detected);

        for (tag, phrases) in CONSTRAINTS {
            if phrases.iter().any(|p| text.contains(p)) {
                hints.constraints.insert(tag.to_string());
            }
        }

        hints
    }
}

/// Record every match in `detected`; return the first in vocabulary order.
fn scan(text: &str, vocabulary: &[(&str, &str)], detected: &mut BTreeSet<String>) -> Option<String> {
    let mut first = None;
    for (needle, name) in vocabulary {
        if text.contains(needle) {
            detected.insert(name.to_string());
            if first.is_none() {
                first = Some(name.to_string());
            }
        }
    }
    first
}

/// Collect strings and object keys into a single space-separated buffer.
fn flatten(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => {
            out.push_str(s);
            out.push(' ');
        }
        Value::Array(items) => items.iter().for_each(|item| flatten(item, out)),
        Value::Object(map) => {
            for (key, item) in map {
                out.push('"');
                out.push_str(key);
                out.push_str("\" ");
                flatten(item, out);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_context() {
        let analyzer = ContextAnalyzer::new();
        assert!(analyzer.analyze(None).is_empty());
        assert!(analyzer.analyze(Some(&json!(null))).is_empty());
        assert!(analyzer.analyze(Some(&json!(42))).is_empty());
        assert!(analyzer.analyze(Some(&json!(""))).is_empty());
    }

    #[test]
    fn test_package_json_like_object() {
        let analyzer = ContextAnalyzer::new();
        let context = json!({
            "dependencies": { "react": "^18.2.0", "tailwindcss": "^3.4.0" },
            "devDependencies": { "vite": "^5.0.0" }
        });

        let hints = analyzer.analyze(Some(&context));
        assert_eq!(hints.framework.as_deref(), Some("react"));
        assert_eq!(hints.css_framework.as_deref(), Some("tailwind"));
        assert_eq!(hints.build_tool.as_deref(), Some("vite"));
    }

    #[test]
    fn test_all_matches_surfaced() {
        let analyzer = ContextAnalyzer::new();
        let hints = analyzer.analyze(Some(&json!("Migrating from Vue to React, built with webpack and vite")));

        assert!(hints.detected.contains("vue"));
        assert!(hints.detected.contains("react"));
        assert!(hints.detected.contains("webpack"));
        assert!(hints.detected.contains("vite"));
        // First in vocabulary order wins the single-valued field
        assert_eq!(hints.framework.as_deref(), Some("react"));
    }

    #[test]
    fn test_constraints() {
        let analyzer = ContextAnalyzer::new();
        let hints = analyzer.analyze(Some(&json!([
            "Must be accessible (WCAG AA)",
            "Mobile first",
            "Needs to work in older browsers"
        ])));

        assert!(hints.constraints.contains("accessibility"));
        assert!(hints.constraints.contains("responsive"));
        assert!(hints.constraints.contains("browser-support"));
        assert!(!hints.constraints.contains("performance"));
    }
}
