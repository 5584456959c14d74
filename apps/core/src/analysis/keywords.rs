//! Rule-based keyword extraction.
//!
//! An ordered list of independent rules maps phrases in a task description to
//! catalog search tokens. Rules never exclude each other; every rule that fires
//! contributes its tokens, deduplicated in first-seen order.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// When a rule fires
#[derive(Debug, Clone, Copy)]
enum Condition {
    /// Every word must appear
    AllOf(&'static [&'static str]),
    /// At least one word must appear
    AnyOf(&'static [&'static str]),
}

impl Condition {
    fn words(&self) -> &'static [&'static str] {
        match self {
            Condition::AllOf(words) | Condition::AnyOf(words) => words,
        }
    }

    fn holds(&self, text: &str) -> bool {
        match self {
            Condition::AllOf(words) => words.iter().all(|w| mentions(text, w)),
            Condition::AnyOf(words) => words.iter().any(|w| mentions(text, w)),
        }
    }
}

/// Endings a condition word may carry ("cards", "centered", "alignment").
const INFLECTIONS: &str = "(?:s|es|d|ed|ing|ment|ly|y)?";

// NOTE: expect() is acceptable here: every pattern is built from escaped rule literals.
static WORD_PATTERNS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    RULES
        .iter()
        .flat_map(|rule| rule.condition.words())
        .map(|word| {
            let pattern = format!(r"\b{}{}\b", regex::escape(word), INFLECTIONS);
            (*word, Regex::new(&pattern).expect("Invalid regex: keyword condition"))
        })
        .collect()
});

/// Whether `word` appears in `text` as a whole word, possibly inflected.
fn mentions(text: &str, word: &str) -> bool {
    WORD_PATTERNS.get(word).is_some_and(|pattern| pattern.is_match(text))
}

#[derive(Debug, Clone, Copy)]
struct KeywordRule {
    condition: Condition,
    tokens: &'static [&'static str],
}

const RULES: &[KeywordRule] = &[
    KeywordRule {
        condition: Condition::AllOf(&["full", "height"]),
        tokens: &["dvh", "viewport", "min-height"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["100vh", "viewport", "hero"]),
        tokens: &["dvh", "viewport"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["carousel", "slider", "gallery", "swipe"]),
        tokens: &["scroll-snap", "overscroll"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["center", "centre", "align", "middle"]),
        tokens: &["flex", "place-items", "align-items", "justify-content"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["card", "columns", "grid", "dashboard", "tiles"]),
        tokens: &["grid", "gap"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["animate", "animation", "fade", "transition", "motion"]),
        tokens: &["transition", "keyframes", "reduced motion"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["responsive", "mobile", "breakpoint", "tablet"]),
        tokens: &["@media", "container", "clamp"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["sticky", "fixed header", "stick"]),
        tokens: &["sticky", "position"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["dark mode", "theme", "light mode"]),
        tokens: &["color-scheme", "dark mode"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["hover", "focus", "keyboard", "click"]),
        tokens: &["focus-visible", "pointer-events", "transition"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["shadow", "blur", "glass", "frosted"]),
        tokens: &["box-shadow", "backdrop-filter"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["rounded", "radius", "circle", "avatar"]),
        tokens: &["border-radius", "clip-path"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["rtl", "right-to-left", "writing mode", "international", "i18n"]),
        tokens: &["logical", "margin-inline", "inline-size", "inset-inline-start"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["spacing", "margin", "padding", "gutter"]),
        tokens: &["gap", "margin-inline", "padding-inline"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["aspect", "ratio", "video", "embed"]),
        tokens: &["aspect-ratio", "object-fit"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["image", "thumbnail", "cover"]),
        tokens: &["object-fit", "aspect-ratio"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["truncate", "ellipsis", "overflow text", "clamp lines"]),
        tokens: &["text-overflow", "line-clamp"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["tooltip", "popover", "dropdown"]),
        tokens: &["anchor", "z-index"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["modal", "overlay", "z-index", "stacking"]),
        tokens: &["isolation", "overscroll-behavior"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["checkbox", "radio", "form control", "range input"]),
        tokens: &["accent-color"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["masonry", "pinterest"]),
        tokens: &["masonry"],
    },
    KeywordRule {
        condition: Condition::AnyOf(&["parent", "contains", "has a"]),
        tokens: &[":has()"],
    },
];

/// Output of keyword extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    /// Deduplicated tokens in first-seen order
    pub keywords: Vec<String>,
    /// Number of rules that fired
    pub rules_fired: usize,
}

/// Rule-based keyword extractor
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scan a task description and accumulate tokens from every rule that fires.
    pub fn extract(&self, text: &str) -> KeywordResult {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return KeywordResult::default();
        }

        let mut seen = HashSet::new();
        let mut result = KeywordResult::default();

        for rule in RULES {
            if !rule.condition.holds(&text) {
                continue;
            }
            result.rules_fired += 1;
            for token in rule.tokens {
                if seen.insert(*token) {
                    result.keywords.push(token.to_string());
                }
            }
        }

        result
    }

    /// Extract keywords and return just the strings
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extract(text).keywords
    }
}
