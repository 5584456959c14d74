//! # Feature Catalog
//!
//! Static collection of CSS feature descriptors the engine recommends from.
//! Loaded once, never mutated. Iteration order is significant: search results
//! and ranking ties follow it.

pub mod search;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use search::{search, search_by_categories, search_by_category};

use crate::models::BrowserSupport;

/// Catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Animation,
    Visual,
    Responsive,
    Interaction,
    Logical,
    Positioning,
    Display,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Layout,
        Category::Animation,
        Category::Visual,
        Category::Responsive,
        Category::Interaction,
        Category::Logical,
        Category::Positioning,
        Category::Display,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Animation => "animation",
            Category::Visual => "visual",
            Category::Responsive => "responsive",
            Category::Interaction => "interaction",
            Category::Logical => "logical",
            Category::Positioning => "positioning",
            Category::Display => "display",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coarse compatibility classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportTier {
    Excellent,
    Good,
    Moderate,
    Limited,
    Experimental,
}

impl SupportTier {
    pub fn label(&self) -> &'static str {
        match self {
            SupportTier::Excellent => "excellent",
            SupportTier::Good => "good",
            SupportTier::Moderate => "moderate",
            SupportTier::Limited => "limited",
            SupportTier::Experimental => "experimental",
        }
    }

    /// Support figures assumed for a property with no table entry.
    pub fn default_support(&self) -> BrowserSupport {
        match self {
            SupportTier::Excellent => BrowserSupport::new(97, true, "full"),
            SupportTier::Good => BrowserSupport::new(93, true, "partial"),
            SupportTier::Moderate => BrowserSupport::new(85, true, "none"),
            SupportTier::Limited => BrowserSupport::new(70, false, "none"),
            SupportTier::Experimental => BrowserSupport::new(40, false, "none"),
        }
    }
}

impl fmt::Display for SupportTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureDescriptor {
    pub name: &'static str,
    pub category: Category,
    /// First element is the primary property.
    pub properties: &'static [&'static str],
    pub description: &'static str,
    pub support_tier: SupportTier,
    pub doc_reference: &'static str,
}

impl FeatureDescriptor {
    pub fn primary_property(&self) -> &'static str {
        self.properties.first().copied().unwrap_or(self.name)
    }

    /// Text matched by keyword search.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.description,
            self.properties.join(" ")
        )
        .to_lowercase()
    }
}

macro_rules! feature {
    ($name:expr, $category:ident, [$($prop:expr),+ $(,)?], $tier:ident, $doc:expr, $desc:expr $(,)?) => {
        FeatureDescriptor {
            name: $name,
            category: Category::$category,
            properties: &[$($prop),+],
            description: $desc,
            support_tier: SupportTier::$tier,
            doc_reference: concat!("https://developer.mozilla.org/en-US/docs/Web/CSS/", $doc),
        }
    };
}

static CATALOG: &[FeatureDescriptor] = &[
    // Layout
    feature!(
        "Flexbox",
        Layout,
        ["flex", "display", "flex-direction", "justify-content", "align-items", "flex-wrap"],
        Excellent,
        "CSS_flexible_box_layout",
        "One-dimensional flexible box layout for rows or columns; the simplest way to center content horizontally and vertically and distribute space between items",
    ),
    feature!(
        "CSS Grid",
        Layout,
        ["grid-template-columns", "display", "grid-template-rows", "grid-area", "gap"],
        Excellent,
        "CSS_grid_layout",
        "Two-dimensional grid layout for rows and columns, card grids, dashboards and full page layouts",
    ),
    feature!(
        "Gap",
        Layout,
        ["gap", "row-gap", "column-gap"],
        Excellent,
        "gap",
        "Consistent gutters between flex and grid items without margin hacks",
    ),
    feature!(
        "Place items",
        Layout,
        ["place-items", "place-content", "place-self"],
        Good,
        "place-items",
        "Shorthand alignment to center grid or flex children in one declaration",
    ),
    feature!(
        "Multi-column layout",
        Layout,
        ["columns", "column-count", "column-gap", "column-rule"],
        Excellent,
        "CSS_multicol_layout",
        "Flow text content into newspaper-style columns",
    ),
    feature!(
        "Subgrid",
        Layout,
        ["grid-template-rows", "grid-template-columns"],
        Moderate,
        "CSS_grid_layout/Subgrid",
        "Nested grid items align to the parent grid tracks using subgrid, keeping card content aligned",
    ),
    feature!(
        "Masonry layout",
        Layout,
        ["grid-template-rows", "masonry-auto-flow"],
        Experimental,
        "CSS_grid_layout/Masonry_layout",
        "Pinterest-style masonry layout where items pack into columns of uneven height",
    ),
    // Display
    feature!(
        "Display modes",
        Display,
        ["display"],
        Excellent,
        "display",
        "Controls the box type of an element: block, inline, flex, grid, none, contents or flow-root",
    ),
    feature!(
        "Content visibility",
        Display,
        ["content-visibility", "contain-intrinsic-size"],
        Moderate,
        "content-visibility",
        "Skip rendering of offscreen content for faster page loads and long lists",
    ),
    // Animation
    feature!(
        "Transitions",
        Animation,
        ["transition", "transition-property", "transition-duration", "transition-timing-function"],
        Excellent,
        "transition",
        "Smoothly animate property changes on hover, focus or state change, such as fade and slide effects",
    ),
    feature!(
        "Keyframe animations",
        Animation,
        ["animation", "animation-name", "animation-duration", "animation-iteration-count"],
        Excellent,
        "animation",
        "Multi-step keyframes animation for loaders, spinners, pulse and attention effects",
    ),
    feature!(
        "View transitions",
        Animation,
        ["view-transition-name"],
        Limited,
        "view-transition-name",
        "Animated transitions between page states or routes with the View Transitions API",
    ),
    feature!(
        "Scroll-driven animations",
        Animation,
        ["animation-timeline", "scroll-timeline", "view-timeline"],
        Experimental,
        "animation-timeline",
        "Animations progressed by scroll position, for reading progress bars and reveal on scroll",
    ),
    feature!(
        "Reduced motion",
        Animation,
        ["prefers-reduced-motion"],
        Excellent,
        "@media/prefers-reduced-motion",
        "Media feature to tone down or disable animation for users who request reduced motion",
    ),
    // Visual
    feature!(
        "Transforms",
        Visual,
        ["transform", "translate", "rotate", "scale"],
        Excellent,
        "transform",
        "Move, rotate, scale or skew elements without affecting layout",
    ),
    feature!(
        "Box shadow",
        Visual,
        ["box-shadow"],
        Excellent,
        "box-shadow",
        "Drop shadows and elevation for cards, buttons and modals",
    ),
    feature!(
        "Border radius",
        Visual,
        ["border-radius"],
        Excellent,
        "border-radius",
        "Rounded corners, pills and circular avatars",
    ),
    feature!(
        "Backdrop filter",
        Visual,
        ["backdrop-filter", "filter"],
        Good,
        "backdrop-filter",
        "Frosted glass blur effects behind translucent overlays and navigation bars",
    ),
    feature!(
        "Gradients",
        Visual,
        ["background-image", "linear-gradient", "radial-gradient"],
        Excellent,
        "gradient",
        "Linear, radial and conic color gradient backgrounds",
    ),
    feature!(
        "Color scheme",
        Visual,
        ["color-scheme", "prefers-color-scheme"],
        Good,
        "color-scheme",
        "Light and dark mode theming with native form controls that follow the theme",
    ),
    feature!(
        "Clip path",
        Visual,
        ["clip-path"],
        Good,
        "clip-path",
        "Clip elements to shapes such as circles, polygons and diagonal section dividers",
    ),
    feature!(
        "Text overflow",
        Visual,
        ["text-overflow", "line-clamp", "white-space"],
        Excellent,
        "text-overflow",
        "Truncate overflowing text with an ellipsis or clamp to a number of lines",
    ),
    feature!(
        "Balanced text wrapping",
        Visual,
        ["text-wrap"],
        Limited,
        "text-wrap",
        "Balance headline line lengths and avoid orphans with text-wrap balance and pretty",
    ),
    // Responsive
    feature!(
        "Media queries",
        Responsive,
        ["@media", "min-width", "max-width"],
        Excellent,
        "CSS_media_queries",
        "Apply styles at breakpoints based on viewport width, orientation and user preferences for mobile and desktop",
    ),
    feature!(
        "Container queries",
        Responsive,
        ["container-type", "container-name", "@container"],
        Good,
        "CSS_containment/Container_queries",
        "Style components based on the size of their container instead of the viewport for truly reusable responsive components",
    ),
    feature!(
        "Fluid typography",
        Responsive,
        ["font-size", "clamp"],
        Excellent,
        "clamp",
        "Scale font sizes and spacing smoothly between breakpoints using clamp()",
    ),
    feature!(
        "Dynamic viewport units",
        Responsive,
        ["height", "min-height", "dvh", "svh"],
        Good,
        "length#relative_length_units_based_on_viewport",
        "Full height sections and hero banners using dvh, svh and lvh viewport units that respect mobile browser toolbars",
    ),
    feature!(
        "Aspect ratio",
        Responsive,
        ["aspect-ratio"],
        Excellent,
        "aspect-ratio",
        "Keep media, video embeds and cards at a fixed width-to-height ratio",
    ),
    feature!(
        "Object fit",
        Responsive,
        ["object-fit", "object-position"],
        Excellent,
        "object-fit",
        "Crop or contain images and video inside their box like background-size",
    ),
    // Interaction
    feature!(
        "Scroll snap",
        Interaction,
        ["scroll-snap-type", "scroll-snap-align", "scroll-behavior"],
        Good,
        "CSS_scroll_snap",
        "Snap scrolling to items for carousels, sliders and image galleries without JavaScript",
    ),
    feature!(
        "Scroll snap stop",
        Interaction,
        ["scroll-snap-stop"],
        Limited,
        "scroll-snap-stop",
        "Force a carousel to stop at every slide instead of skipping past items on fast swipes",
    ),
    feature!(
        "Focus visible",
        Interaction,
        [":focus-visible", "outline", "outline-offset"],
        Excellent,
        ":focus-visible",
        "Show focus rings for keyboard users only, improving accessibility without visual noise",
    ),
    feature!(
        "Pointer events",
        Interaction,
        ["pointer-events", "cursor", "touch-action"],
        Excellent,
        "pointer-events",
        "Control click, hover and touch interaction on overlays and disabled elements",
    ),
    feature!(
        "Overscroll behavior",
        Interaction,
        ["overscroll-behavior"],
        Good,
        "overscroll-behavior",
        "Prevent scroll chaining and pull-to-refresh inside modals, drawers and chat panes",
    ),
    feature!(
        "Accent color",
        Interaction,
        ["accent-color"],
        Good,
        "accent-color",
        "Theme native checkboxes, radio buttons, range sliders and progress bars with a brand color",
    ),
    feature!(
        "Has selector",
        Interaction,
        [":has()"],
        Moderate,
        ":has",
        "Parent selector to style a container based on its children, such as a form with an invalid input or a card with an image",
    ),
    // Logical
    feature!(
        "Logical margins",
        Logical,
        ["margin-inline-start", "margin-inline", "margin-block", "margin-inline-end"],
        Good,
        "margin-inline",
        "Writing-mode aware spacing: margin-inline and margin-block adapt to right-to-left and vertical text",
    ),
    feature!(
        "Logical padding",
        Logical,
        ["padding-inline", "padding-block", "padding-inline-start"],
        Good,
        "padding-inline",
        "Writing-mode aware padding that flips automatically for RTL languages",
    ),
    feature!(
        "Logical sizing",
        Logical,
        ["block-size", "inline-size", "min-block-size", "max-inline-size"],
        Good,
        "block-size",
        "Size elements along the block and inline axes instead of height and width for internationalized layouts",
    ),
    feature!(
        "Logical inset",
        Logical,
        ["inset-block-start", "inset-inline-start", "inset"],
        Good,
        "inset-block-start",
        "Offset positioned elements along logical axes instead of top, left, right and bottom",
    ),
    // Positioning
    feature!(
        "Sticky positioning",
        Positioning,
        ["position", "top"],
        Excellent,
        "position",
        "Sticky headers, sidebars and table headings that stick while scrolling",
    ),
    feature!(
        "Physical offsets",
        Positioning,
        ["top", "left", "right", "bottom"],
        Good,
        "top",
        "Offset absolutely or fixed positioned elements from the edges of their containing block",
    ),
    feature!(
        "Directional margins",
        Positioning,
        ["margin-left", "margin-right", "margin-top", "margin-bottom"],
        Good,
        "margin-left",
        "Physical margins on a single side of an element",
    ),
    feature!(
        "Stacking context",
        Positioning,
        ["isolation", "z-index"],
        Excellent,
        "isolation",
        "Create a new stacking context to contain z-index for overlays, dropdowns and modals",
    ),
    feature!(
        "Anchor positioning",
        Positioning,
        ["anchor-name", "position-anchor", "position-area"],
        Experimental,
        "CSS_anchor_positioning",
        "Tether tooltips, popovers and dropdown menus to an anchor element without JavaScript",
    ),
];

/// The full catalog in iteration order.
pub fn all() -> &'static [FeatureDescriptor] {
    CATALOG
}

/// Features listing `property` among their properties.
pub fn features_with_property(property: &str) -> Vec<&'static FeatureDescriptor> {
    let needle = property.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|f| f.properties.iter().any(|p| *p == needle))
        .collect()
}

/// The first feature whose primary property is `property`.
pub fn find_by_primary(property: &str) -> Option<&'static FeatureDescriptor> {
    let needle = property.trim().to_lowercase();
    CATALOG.iter().find(|f| f.primary_property() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_unique() {
        let names: HashSet<&str> = all().iter().map(|f| f.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_every_feature_has_properties_and_docs() {
        for feature in all() {
            assert!(!feature.properties.is_empty(), "{} has no properties", feature.name);
            assert!(feature.doc_reference.starts_with("https://"));
        }
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in Category::ALL {
            assert!(
                all().iter().any(|f| f.category == category),
                "No feature in category {}",
                category
            );
        }
    }

    #[test]
    fn test_property_lookup() {
        let features = features_with_property("display");
        let names: Vec<&str> = features.iter().map(|f| f.name).collect();
        assert!(names.contains(&"Flexbox"));
        assert!(names.contains(&"Display modes"));

        assert_eq!(find_by_primary("flex").map(|f| f.name), Some("Flexbox"));
        assert!(find_by_primary("not-a-property").is_none());
    }
}
