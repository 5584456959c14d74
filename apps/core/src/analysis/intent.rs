//! Intent Classification using regex patterns.
//!
//! Each styling concern owns a small set of patterns. A concern is detected when
//! any of its patterns matches; confidence is the global ratio of matched
//! patterns to evaluated patterns.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use crate::catalog::Category;

/// Detected styling concern
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    /// Arranging, aligning and centering boxes
    Layout,
    /// Motion, transitions, loaders
    Animation,
    /// Margins, padding, gutters, writing-mode aware spacing
    Spacing,
    /// Breakpoints, viewport and container sizing
    Responsive,
    /// Shadows, colors, shapes, text treatment
    Visual,
    /// Hover, scroll, pointer and overlay behavior
    Interaction,
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl IntentKind {
    pub fn label(&self) -> &'static str {
        match self {
            IntentKind::Layout => "layout",
            IntentKind::Animation => "animation",
            IntentKind::Spacing => "spacing",
            IntentKind::Responsive => "responsive",
            IntentKind::Visual => "visual",
            IntentKind::Interaction => "interaction",
        }
    }

    /// Catalog categories worth searching when this intent is detected.
    pub fn categories(&self) -> &'static [Category] {
        match self {
            IntentKind::Layout => &[Category::Layout, Category::Display, Category::Positioning],
            IntentKind::Animation => &[Category::Animation],
            IntentKind::Spacing => &[Category::Logical],
            IntentKind::Responsive => &[Category::Responsive],
            IntentKind::Visual => &[Category::Visual],
            IntentKind::Interaction => &[Category::Interaction],
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentResult {
    /// Every intent with at least one matching pattern
    pub intents: BTreeSet<IntentKind>,
    /// Matched patterns / evaluated patterns, across all intents (0.0 - 1.0)
    pub confidence: f32,
    /// Text fragments that matched
    pub matched_patterns: Vec<String>,
    /// Categories derived from the detected intents
    pub suggested_categories: BTreeSet<Category>,
    /// Ecosystems mentioned in the description itself
    pub framework_hints: BTreeSet<String>,
}

/// Pattern definition for intent matching
struct IntentPattern {
    intent: IntentKind,
    patterns: Vec<Regex>,
}

/// Intent classifier using regex patterns
pub struct IntentClassifier {
    patterns: Vec<IntentPattern>,
}

// Compile patterns once at startup
// NOTE: expect() is acceptable here: the patterns are literals and a failure is a programming error.
static LAYOUT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(center|centre|centered|centering|middle)\b").expect("Invalid regex: centering words"),
        Regex::new(r"(?i)\b(horizontal|horizontally|vertical|vertically)\b").expect("Invalid regex: axis words"),
        Regex::new(r"(?i)\b(layout|columns?|rows?|grid|two-column|three-column)\b").expect("Invalid regex: layout nouns"),
        Regex::new(r"(?i)\b(flex|flexbox|align|alignment|justify)\b").expect("Invalid regex: alignment words"),
        Regex::new(r"(?i)\b(sidebar|header|footer|navbar|nav|card|cards|dashboard|holy grail)\b").expect("Invalid regex: page regions"),
        Regex::new(r"(?i)\b(stack|side by side|wrap|distribute)\b").expect("Invalid regex: arrangement verbs"),
    ]
});

static ANIMATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(animate|animated|animation|animations|keyframe|keyframes)\b").expect("Invalid regex: animation words"),
        Regex::new(r"(?i)\b(transition|transitions|fade|slide|bounce|spin|pulse)\b").expect("Invalid regex: effect words"),
        Regex::new(r"(?i)\b(motion|smooth|smoothly|ease|easing)\b").expect("Invalid regex: motion words"),
        Regex::new(r"(?i)\b(loader|loading|spinner|skeleton)\b").expect("Invalid regex: loader words"),
    ]
});

static SPACING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(margin|margins|padding|spacing|gutter|gutters|gap)\b").expect("Invalid regex: spacing words"),
        Regex::new(r"(?i)\b(whitespace|white space|space between|breathing room)\b").expect("Invalid regex: whitespace phrases"),
        Regex::new(r"(?i)\b(rtl|right-to-left|writing mode|vertical text|internationalization|international|i18n)\b").expect("Invalid regex: writing mode words"),
        Regex::new(r"(?i)\b(inline|block)[- ](start|end|size|axis)\b").expect("Invalid regex: logical axis words"),
    ]
});

static RESPONSIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(responsive|adaptive)\b").expect("Invalid regex: responsive words"),
        Regex::new(r"(?i)\b(mobile|tablet|desktop|phone)\b").expect("Invalid regex: device words"),
        Regex::new(r"(?i)\b(breakpoint|breakpoints|media query|media queries|container query|container queries)\b").expect("Invalid regex: breakpoint words"),
        Regex::new(r"(?i)\b(viewport|screen size|full[- ]height|full[- ]width|fluid)\b").expect("Invalid regex: viewport words"),
    ]
});

static VISUAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(shadow|shadows|blur|glass|frosted|glow)\b").expect("Invalid regex: depth words"),
        Regex::new(r"(?i)\b(rounded|radius|circle|circular|pill)\b").expect("Invalid regex: shape words"),
        Regex::new(r"(?i)\b(gradient|color|colour|theme|dark mode|light mode)\b").expect("Invalid regex: color words"),
        Regex::new(r"(?i)\b(truncate|ellipsis|clip|mask|overlay)\b").expect("Invalid regex: treatment words"),
    ]
});

static INTERACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(hover|click|tap|press|focus)\b").expect("Invalid regex: pointer verbs"),
        Regex::new(r"(?i)\b(scroll|scrolling|carousel|slider|gallery|swipe)\b").expect("Invalid regex: scroll words"),
        Regex::new(r"(?i)\b(drag|touch|pointer|cursor)\b").expect("Invalid regex: input words"),
        Regex::new(r"(?i)\b(tooltip|popover|dropdown|modal|drawer|menu)\b").expect("Invalid regex: overlay widgets"),
    ]
});

/// Ecosystem indicators scanned in the description itself
pub(crate) static FRAMEWORK_INDICATORS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        ("react", Regex::new(r"(?i)\b(react|jsx|tsx|usestate|useeffect|props|component)\b").expect("Invalid regex: react markers")),
        ("vue", Regex::new(r"(?i)(\bvue\b|v-if|v-for|v-bind|v-model|<template>)").expect("Invalid regex: vue markers")),
        ("angular", Regex::new(r"(?i)(\bangular\b|ngfor|ngif|\*ng)").expect("Invalid regex: angular markers")),
        ("svelte", Regex::new(r"(?i)\bsvelte\b").expect("Invalid regex: svelte markers")),
        ("tailwind", Regex::new(r"(?i)(\btailwind\b|classname=|\butility[- ]class(es)?\b|\b(items-center|justify-center|flex-col)\b)").expect("Invalid regex: tailwind markers")),
        ("bootstrap", Regex::new(r"(?i)\b(bootstrap|col-md-\d+|btn-primary)\b").expect("Invalid regex: bootstrap markers")),
    ]
});

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier with all patterns
    pub fn new() -> Self {
        let patterns = vec![
            IntentPattern {
                intent: IntentKind::Layout,
                patterns: LAYOUT_PATTERNS.clone(),
            },
            IntentPattern {
                intent: IntentKind::Animation,
                patterns: ANIMATION_PATTERNS.clone(),
            },
            IntentPattern {
                intent: IntentKind::Spacing,
                patterns: SPACING_PATTERNS.clone(),
            },
            IntentPattern {
                intent: IntentKind::Responsive,
                patterns: RESPONSIVE_PATTERNS.clone(),
            },
            IntentPattern {
                intent: IntentKind::Visual,
                patterns: VISUAL_PATTERNS.clone(),
            },
            IntentPattern {
                intent: IntentKind::Interaction,
                patterns: INTERACTION_PATTERNS.clone(),
            },
        ];

        Self { patterns }
    }

    /// Total number of patterns evaluated per classification.
    pub fn pattern_count(&self) -> usize {
        self.patterns.iter().map(|group| group.patterns.len()).sum()
    }

    /// Classify the styling intents of a task description
    pub fn classify(&self, text: &str) -> IntentResult {
        let text = text.trim();

        if text.is_empty() {
            return IntentResult::default();
        }

        let mut intents = BTreeSet::new();
        let mut matched_patterns = Vec::new();
        let mut total_matches = 0usize;

        for pattern_group in &self.patterns {
            let mut group_matches = 0usize;

            for pattern in &pattern_group.patterns {
                if let Some(m) = pattern.find(text) {
                    group_matches += 1;
                    matched_patterns.push(m.as_str().to_lowercase());
                }
            }

            if group_matches > 0 {
                intents.insert(pattern_group.intent);
                total_matches += group_matches;
            }
        }

        // Zero-match groups still count toward the denominator
        let total_patterns = self.pattern_count();
        let confidence = if total_patterns == 0 {
            0.0
        } else {
            (total_matches as f32 / total_patterns as f32).clamp(0.0, 1.0)
        };

        let suggested_categories = intents
            .iter()
            .flat_map(|intent| intent.categories().iter().copied())
            .collect();

        IntentResult {
            intents,
            confidence,
            matched_patterns,
            suggested_categories,
            framework_hints: Self::detect_frameworks(text),
        }
    }

    /// Ecosystem names indicated by the description text.
    pub fn detect_frameworks(text: &str) -> BTreeSet<String> {
        FRAMEWORK_INDICATORS
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centering_is_layout() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("center a div horizontally and vertically");
        assert!(result.intents.contains(&IntentKind::Layout));
        assert!(result.suggested_categories.contains(&Category::Layout));
        assert!(result.confidence > 0.0);
    }

    #[test]
    fn test_multiple_intents() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("Animate the cards on hover with a soft shadow");
        assert!(result.intents.contains(&IntentKind::Animation));
        assert!(result.intents.contains(&IntentKind::Interaction));
        assert!(result.intents.contains(&IntentKind::Visual));
        assert!(result.intents.contains(&IntentKind::Layout));
    }

    #[test]
    fn test_confidence_is_global_ratio() {
        let classifier = IntentClassifier::new();

        // "carousel" hits exactly one interaction pattern
        let result = classifier.classify("carousel");
        let expected = 1.0 / classifier.pattern_count() as f32;
        assert!((result.confidence - expected).abs() < f32::EPSILON);
        assert_eq!(result.intents.len(), 1);
    }

    #[test]
    fn test_spacing_maps_to_logical() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("add padding that works for RTL languages");
        assert!(result.intents.contains(&IntentKind::Spacing));
        assert!(result.suggested_categories.contains(&Category::Logical));
    }

    #[test]
    fn test_framework_markers() {
        let hints = IntentClassifier::detect_frameworks(
            "My React component uses className=\"flex items-center\"",
        );
        assert!(hints.contains("react"));
        assert!(hints.contains("tailwind"));

        let hints = IntentClassifier::detect_frameworks("<div v-for=\"item in items\">");
        assert!(hints.contains("vue"));
    }

    #[test]
    fn test_empty_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("");
        assert!(result.intents.is_empty());
        assert_eq!(result.confidence, 0.0);

        let result = classifier.classify("   ");
        assert!(result.intents.is_empty());
        assert_eq!(result.confidence, 0.0);
    }
}
