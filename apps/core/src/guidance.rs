//! Follow-up after the caller accepts or declines a recommended property.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, FeatureDescriptor};

/// A replacement offered when a recommendation is declined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub property: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum UsageDecision {
    /// The caller declined; these can be used instead.
    Alternatives {
        property: String,
        alternatives: Vec<Alternative>,
    },
    /// The caller accepted; how to adopt the property.
    Guidance {
        property: String,
        steps: Vec<String>,
        /// Present only when a fallback was requested.
        fallback: Option<String>,
        doc_reference: String,
    },
}

struct GuidanceEntry {
    property: &'static str,
    alternatives: &'static [(&'static str, &'static str)],
    steps: &'static [&'static str],
    fallback: &'static str,
}

static GUIDANCE: &[GuidanceEntry] = &[
    GuidanceEntry {
        property: "flex",
        alternatives: &[
            ("grid-template-columns", "Grid handles two-dimensional layouts and centering with place-items"),
            ("place-items", "Centers grid children in a single declaration"),
        ],
        steps: &[
            "Set display: flex on the container",
            "Choose the main axis with flex-direction",
            "Align items with justify-content and align-items",
            "Use gap for spacing instead of margins on children",
        ],
        fallback: ".container { display: block; text-align: center; }\n.container > * { display: inline-block; vertical-align: middle; }",
    },
    GuidanceEntry {
        property: "grid-template-columns",
        alternatives: &[
            ("flex", "Flexbox is simpler for single-row or single-column layouts"),
            ("columns", "Multi-column layout flows text without explicit tracks"),
        ],
        steps: &[
            "Set display: grid on the container",
            "Define tracks with grid-template-columns, e.g. repeat(auto-fill, minmax(16rem, 1fr))",
            "Space cells with gap",
            "Place special items with grid-column or grid-area",
        ],
        fallback: "@supports not (display: grid) {\n  .grid { display: flex; flex-wrap: wrap; }\n  .grid > * { flex: 1 1 16rem; }\n}",
    },
    GuidanceEntry {
        property: "gap",
        alternatives: &[("margin-inline-start", "Logical margins on children when gap is unavailable")],
        steps: &[
            "Apply gap on the flex or grid container",
            "Remove child margins that were used as gutters",
        ],
        fallback: "@supports not (gap: 1rem) {\n  .stack > * + * { margin-block-start: 1rem; }\n}",
    },
    GuidanceEntry {
        property: "container-type",
        alternatives: &[
            ("@media", "Viewport media queries work everywhere but ignore the component's slot"),
            ("font-size", "Fluid sizing with clamp() adapts without queries"),
        ],
        steps: &[
            "Set container-type: inline-size on the component's wrapper",
            "Optionally name it with container-name",
            "Write @container rules against the wrapper's width",
        ],
        fallback: "/* Base styles target the narrow layout; @container rules only enhance */\n@media (min-width: 48rem) { .card { flex-direction: row; } }",
    },
    GuidanceEntry {
        property: ":has()",
        alternatives: &[(":focus-visible", "Style the interactive element itself instead of its parent")],
        steps: &[
            "Write the parent selector with :has(), e.g. .field:has(input:invalid)",
            "Keep the selector specific to avoid costly invalidation",
            "Guard with @supports selector(:has(*)) when the style is essential",
        ],
        fallback: "@supports not selector(:has(*)) {\n  .field.is-invalid { border-color: red; }\n}",
    },
    GuidanceEntry {
        property: "anchor-name",
        alternatives: &[
            ("position", "Absolute positioning inside a relatively positioned wrapper"),
            ("inset-block-start", "Logical insets for offset placement"),
        ],
        steps: &[
            "Give the anchor element anchor-name: --trigger",
            "Set position-anchor: --trigger on the floating element",
            "Place it with position-area or anchor() in inset properties",
            "Add position-try-fallbacks for viewport overflow",
        ],
        fallback: "@supports not (anchor-name: --a) {\n  .tooltip-wrapper { position: relative; }\n  .tooltip { position: absolute; inset-block-start: 100%; }\n}",
    },
    GuidanceEntry {
        property: "view-transition-name",
        alternatives: &[
            ("transition", "Property transitions cover most state changes"),
            ("animation", "Keyframe animations for entrance and exit effects"),
        ],
        steps: &[
            "Assign view-transition-name to elements that persist across the change",
            "Wrap the DOM update in document.startViewTransition()",
            "Customize ::view-transition-old and ::view-transition-new",
            "Disable the effect under prefers-reduced-motion",
        ],
        fallback: "/* Without support the DOM update happens instantly */\n@media (prefers-reduced-motion: reduce) { ::view-transition-group(*) { animation: none; } }",
    },
    GuidanceEntry {
        property: "animation-timeline",
        alternatives: &[("animation", "Time-based keyframes triggered by an IntersectionObserver class toggle")],
        steps: &[
            "Define @keyframes for the effect",
            "Attach it with animation and set animation-timeline: scroll() or view()",
            "Tune animation-range for start and end points",
        ],
        fallback: "@supports not (animation-timeline: scroll()) {\n  .progress { transform: scaleX(1); }\n}",
    },
    GuidanceEntry {
        property: "text-wrap",
        alternatives: &[("text-overflow", "Truncate long headings instead of balancing them")],
        steps: &["Apply text-wrap: balance to headings", "Use text-wrap: pretty for body copy where supported"],
        fallback: "/* Unsupported browsers wrap normally, no fallback needed */",
    },
    GuidanceEntry {
        property: "backdrop-filter",
        alternatives: &[("background-image", "A semi-transparent gradient overlay without blur")],
        steps: &[
            "Give the element a translucent background",
            "Add backdrop-filter: blur(...) together with -webkit-backdrop-filter",
        ],
        fallback: "@supports not (backdrop-filter: blur(1px)) {\n  .glass { background: rgb(255 255 255 / 0.9); }\n}",
    },
    GuidanceEntry {
        property: "margin-inline-start",
        alternatives: &[("margin-left", "Physical margins when right-to-left support is not needed")],
        steps: &[
            "Replace margin-left and margin-right with margin-inline-start and margin-inline-end",
            "Replace margin-top and margin-bottom with margin-block-start and margin-block-end",
            "Check the layout with dir=\"rtl\"",
        ],
        fallback: "@supports not (margin-inline-start: 0) {\n  .icon { margin-left: 0.5rem; }\n  [dir=\"rtl\"] .icon { margin-left: 0; margin-right: 0.5rem; }\n}",
    },
    GuidanceEntry {
        property: "height",
        alternatives: &[("block-size", "Logical sizing that follows the writing mode")],
        steps: &[
            "Use min-height: 100dvh for full-height sections",
            "Keep a 100vh declaration first for older browsers",
        ],
        fallback: ".hero { min-height: 100vh; min-height: 100dvh; }",
    },
];

fn entry_for(property: &str) -> Option<&'static GuidanceEntry> {
    GUIDANCE.iter().find(|entry| entry.property == property)
}

/// Catalog features sharing a category with `property`, excluding its own features.
fn same_category_alternatives(property: &str) -> Vec<Alternative> {
    let own: Vec<&'static FeatureDescriptor> = catalog::features_with_property(property);
    let Some(first) = own.first() else {
        return vec![];
    };

    catalog::search_by_category(first.category)
        .into_iter()
        .filter(|candidate| !own.iter().any(|f| f.name == candidate.name))
        .filter(|candidate| candidate.primary_property() != property)
        .map(|candidate| Alternative {
            property: candidate.primary_property().to_string(),
            reason: format!(
                "{} ({} category, {} support)",
                candidate.name,
                candidate.category,
                candidate.support_tier.label()
            ),
        })
        .collect()
}

fn generic_steps(property: &str) -> Vec<String> {
    vec![
        format!("Add `{}` to the relevant rule in the component stylesheet", property),
        "Verify the result in every browser you target".to_string(),
        format!("Guard it with @supports ({}: initial) if support is not universal", property),
    ]
}

fn generic_fallback(property: &str) -> String {
    format!("@supports not ({}: initial) {{\n  /* fallback styles */\n}}", property)
}

/// Decide the follow-up for a consent answer on `property`.
pub fn confirm_usage(property: &str, consented: bool, needs_fallback: bool) -> UsageDecision {
    let property = property.trim().to_lowercase();
    let entry = entry_for(&property);

    if !consented {
        let alternatives = match entry {
            Some(entry) => entry
                .alternatives
                .iter()
                .map(|(alt, reason)| Alternative {
                    property: alt.to_string(),
                    reason: reason.to_string(),
                })
                .collect(),
            None => same_category_alternatives(&property),
        };
        return UsageDecision::Alternatives {
            property,
            alternatives,
        };
    }

    let steps = match entry {
        Some(entry) => entry.steps.iter().map(|s| s.to_string()).collect(),
        None => generic_steps(&property),
    };
    let fallback = needs_fallback.then(|| match entry {
        Some(entry) => entry.fallback.to_string(),
        None => generic_fallback(&property),
    });

    UsageDecision::Guidance {
        doc_reference: crate::docs::reference_url(&property),
        property,
        steps,
        fallback,
    }
}
