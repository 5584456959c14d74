//! Curated documentation served when the structured service is unreachable.

use super::parser::PartialPayload;
use super::{reference_url, DocSourceKind, DocumentationPayload};
use crate::support;

struct StaticDoc {
    property: &'static str,
    description: &'static str,
    syntax: &'static str,
    use_cases: &'static [&'static str],
    examples: &'static [&'static str],
    see_also: &'static [&'static str],
}

static STATIC_DOCS: &[StaticDoc] = &[
    StaticDoc {
        property: "display",
        description: "Sets whether an element is treated as a block or inline box and the layout used for its children, such as flow, flex or grid.",
        syntax: "display: block | inline | flex | grid | none | contents | flow-root;",
        use_cases: &["Switch a container to flex or grid layout", "Hide elements with display: none", "Remove a wrapper box with display: contents"],
        examples: &[".toolbar { display: flex; }", ".sr-hidden { display: none; }"],
        see_also: &["visibility", "float", "position"],
    },
    StaticDoc {
        property: "flex",
        description: "Shorthand for flex-grow, flex-shrink and flex-basis, controlling how a flex item grows or shrinks to fill its container.",
        syntax: "flex: <flex-grow> <flex-shrink>? <flex-basis>?;",
        use_cases: &["Center content horizontally and vertically", "Distribute toolbar items", "Let a main column take the remaining space"],
        examples: &[
            ".center { display: flex; justify-content: center; align-items: center; }",
            ".sidebar-layout > main { flex: 1 1 auto; }",
        ],
        see_also: &["justify-content", "align-items", "gap"],
    },
    StaticDoc {
        property: "grid-template-columns",
        description: "Defines the line names and track sizing functions of the grid columns.",
        syntax: "grid-template-columns: none | <track-list> | <auto-track-list>;",
        use_cases: &["Responsive card grids without media queries", "Dashboard layouts", "Holy grail page layout"],
        examples: &[".cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; }"],
        see_also: &["grid-template-rows", "grid-area", "gap"],
    },
    StaticDoc {
        property: "gap",
        description: "Sets the gaps (gutters) between rows and columns in flex, grid and multi-column layouts.",
        syntax: "gap: <row-gap> <column-gap>?;",
        use_cases: &["Spacing between grid cells", "Spacing between flex items without margins"],
        examples: &[".stack { display: flex; flex-direction: column; gap: 0.5rem; }"],
        see_also: &["row-gap", "column-gap"],
    },
    StaticDoc {
        property: "transition",
        description: "Shorthand for transition-property, transition-duration, transition-timing-function and transition-delay.",
        syntax: "transition: <property> <duration> <timing-function>? <delay>?;",
        use_cases: &["Hover and focus state changes", "Smoothly revealing menus"],
        examples: &[".button { transition: background-color 150ms ease-in-out; }"],
        see_also: &["animation", "prefers-reduced-motion"],
    },
    StaticDoc {
        property: "animation",
        description: "Applies an animation defined with @keyframes to an element.",
        syntax: "animation: <name> <duration> <timing-function>? <delay>? <iteration-count>? <direction>? <fill-mode>?;",
        use_cases: &["Loading spinners", "Attention-drawing pulses", "Entrance effects"],
        examples: &["@keyframes spin { to { transform: rotate(1turn); } }\n.spinner { animation: spin 1s linear infinite; }"],
        see_also: &["@keyframes", "transition", "prefers-reduced-motion"],
    },
    StaticDoc {
        property: "scroll-snap-type",
        description: "Sets how strictly snap points are enforced on the scroll container.",
        syntax: "scroll-snap-type: none | [ x | y | block | inline | both ] [ mandatory | proximity ]?;",
        use_cases: &["CSS-only carousels and sliders", "Full-page section scrolling", "Swipeable image galleries"],
        examples: &[".carousel { display: flex; overflow-x: auto; scroll-snap-type: x mandatory; }\n.carousel > * { scroll-snap-align: center; }"],
        see_also: &["scroll-snap-align", "scroll-snap-stop", "overscroll-behavior"],
    },
    StaticDoc {
        property: "container-type",
        description: "Establishes the element as a query container so descendants can be styled based on its size.",
        syntax: "container-type: normal | size | inline-size;",
        use_cases: &["Components that adapt to their slot instead of the viewport", "Reusable cards in sidebars and main columns"],
        examples: &[".card-slot { container-type: inline-size; }\n@container (min-width: 30rem) { .card { flex-direction: row; } }"],
        see_also: &["container-name", "@container"],
    },
    StaticDoc {
        property: "aspect-ratio",
        description: "Sets a preferred aspect ratio for the box, used when calculating auto sizes.",
        syntax: "aspect-ratio: auto || <ratio>;",
        use_cases: &["Responsive video embeds", "Square thumbnails"],
        examples: &[".video { aspect-ratio: 16 / 9; width: 100%; }"],
        see_also: &["object-fit", "contain-intrinsic-size"],
    },
    StaticDoc {
        property: "margin-inline-start",
        description: "Defines the logical inline start margin, mapped to a physical margin depending on writing mode and direction.",
        syntax: "margin-inline-start: <length-percentage> | auto;",
        use_cases: &["Spacing that flips correctly in right-to-left languages", "Internationalized layouts"],
        examples: &[".icon { margin-inline-start: 0.5rem; }"],
        see_also: &["margin-inline", "margin-left", "padding-inline-start"],
    },
    StaticDoc {
        property: "position",
        description: "Sets how an element is positioned in the document; sticky positioning keeps it in flow until a scroll threshold is met.",
        syntax: "position: static | relative | absolute | fixed | sticky;",
        use_cases: &["Sticky headers", "Overlays", "Badges anchored to a corner"],
        examples: &[".header { position: sticky; top: 0; }"],
        see_also: &["top", "inset", "z-index"],
    },
    StaticDoc {
        property: "backdrop-filter",
        description: "Applies graphical effects such as blur to the area behind an element.",
        syntax: "backdrop-filter: none | <filter-function-list>;",
        use_cases: &["Frosted glass panels", "Blurred modal backdrops"],
        examples: &[".glass { backdrop-filter: blur(12px); background: rgb(255 255 255 / 0.6); }"],
        see_also: &["filter", "background-color"],
    },
    StaticDoc {
        property: "height",
        description: "Specifies the height of an element; dynamic viewport units (dvh, svh, lvh) size it relative to the visible viewport.",
        syntax: "height: auto | <length-percentage> | min-content | max-content | fit-content;",
        use_cases: &["Full-height hero sections", "Mobile layouts that respect browser toolbars"],
        examples: &[".hero { min-height: 100dvh; }"],
        see_also: &["block-size", "min-height", "max-height"],
    },
];

/// Curated payload for `property`, or a generic template when none is curated.
pub fn static_payload(property: &str) -> DocumentationPayload {
    let key = super::normalize_property(property);
    let browser_support = support::catalog_support(&key);
    let doc_reference = reference_url(&key);

    match STATIC_DOCS.iter().find(|doc| doc.property == key) {
        Some(doc) => DocumentationPayload {
            property: key,
            description: doc.description.to_string(),
            syntax: doc.syntax.to_string(),
            use_cases: doc.use_cases.iter().map(|s| s.to_string()).collect(),
            examples: doc.examples.iter().map(|s| s.to_string()).collect(),
            see_also: doc.see_also.iter().map(|s| s.to_string()).collect(),
            browser_support,
            doc_reference,
            source: DocSourceKind::Static,
        },
        None => PartialPayload::default()
            .into_payload(&key, doc_reference, DocSourceKind::Static)
            .with_support(browser_support),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_payload() {
        let payload = static_payload("Scroll-Snap-Type");
        assert_eq!(payload.property, "scroll-snap-type");
        assert_eq!(payload.source, DocSourceKind::Static);
        assert!(payload.use_cases.iter().any(|u| u.contains("carousel")));
        assert_eq!(payload.browser_support.map(|b| b.overall), Some(96));
    }

    #[test]
    fn test_generic_template() {
        let payload = static_payload("hyphens");
        assert_eq!(payload.syntax, "hyphens: value;");
        assert!(!payload.use_cases.is_empty());
        assert!(payload.browser_support.is_none());
        assert!(payload.doc_reference.ends_with("/hyphens"));
    }

    #[test]
    fn test_curated_entries_are_unique() {
        for (i, doc) in STATIC_DOCS.iter().enumerate() {
            assert!(
                STATIC_DOCS[i + 1..].iter().all(|other| other.property != doc.property),
                "duplicate static doc for {}",
                doc.property
            );
        }
    }
}
