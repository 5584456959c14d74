//! Browser support table for catalog properties.
//!
//! Figures are global usage-weighted percentages. Properties missing from the
//! table fall back to their catalog tier, then to the documentation client.

use crate::catalog;
use crate::models::{BrowserSupport, SupportReport};

#[derive(Debug, Clone, Copy)]
pub struct SupportEntry {
    pub property: &'static str,
    pub overall: u8,
    pub modern_browsers: bool,
    pub legacy_support: &'static str,
    pub experimental: &'static [&'static str],
    pub notes: &'static [&'static str],
}

impl SupportEntry {
    pub fn browser_support(&self) -> BrowserSupport {
        BrowserSupport::new(self.overall, self.modern_browsers, self.legacy_support)
    }

    pub fn report(&self, include_experimental: bool) -> SupportReport {
        SupportReport {
            property: self.property.to_string(),
            overall_support: self.overall,
            modern_browsers: self.modern_browsers,
            legacy_support: self.legacy_support.to_string(),
            experimental_features: if include_experimental {
                self.experimental.iter().map(|s| s.to_string()).collect()
            } else {
                vec![]
            },
            notes: self.notes.iter().map(|s| s.to_string()).collect(),
        }
    }
}

macro_rules! support {
    ($prop:expr, $overall:expr, $modern:expr, $legacy:expr) => {
        support!($prop, $overall, $modern, $legacy, [], [])
    };
    ($prop:expr, $overall:expr, $modern:expr, $legacy:expr, [$($exp:expr),*], [$($note:expr),*]) => {
        SupportEntry {
            property: $prop,
            overall: $overall,
            modern_browsers: $modern,
            legacy_support: $legacy,
            experimental: &[$($exp),*],
            notes: &[$($note),*],
        }
    };
}

static SUPPORT_TABLE: &[SupportEntry] = &[
    support!(
        "display", 98, true, "full",
        ["multi-keyword values (display: inline flex)", "display: contents accessibility fixes"],
        ["display: contents removes the element from the accessibility tree in some older engines"]
    ),
    support!("flex", 99, true, "partial", [], ["IE11 supports an older flexbox syntax with known bugs"]),
    support!("grid-template-columns", 97, true, "partial", ["subgrid", "masonry"], ["IE11 only supports the -ms- prefixed grid draft"]),
    support!("gap", 96, true, "none", [], ["gap in flex layouts requires Safari 14.1+"]),
    support!("place-items", 95, true, "none"),
    support!("columns", 98, true, "partial"),
    support!("transition", 98, true, "full", ["transition-behavior: allow-discrete"], []),
    support!("animation", 98, true, "full", ["animation-composition"], []),
    support!("view-transition-name", 78, false, "none", ["cross-document view transitions"], ["Firefox support is still rolling out"]),
    support!("animation-timeline", 70, false, "none", ["scroll()", "view()"], ["Not yet supported in Safari"]),
    support!("prefers-reduced-motion", 97, true, "none"),
    support!("transform", 99, true, "full", ["individual transform properties (translate, rotate, scale)"], []),
    support!("box-shadow", 99, true, "full"),
    support!("border-radius", 99, true, "full", ["corner-shape"], []),
    support!("backdrop-filter", 95, true, "none", [], ["Safari requires the -webkit- prefix before version 18"]),
    support!("background-image", 99, true, "full"),
    support!("color-scheme", 94, true, "none", ["light-dark() color function"], []),
    support!("clip-path", 96, true, "partial"),
    support!("text-overflow", 99, true, "full", ["line-clamp without prefix"], []),
    support!("text-wrap", 85, false, "none", ["text-wrap: pretty"], ["Unsupported browsers ignore it, which is a safe fallback"]),
    support!("@media", 99, true, "full", ["range syntax (width >= 600px)"], []),
    support!("container-type", 92, true, "none", ["style queries"], []),
    support!("font-size", 99, true, "full"),
    support!("height", 99, true, "full", ["dvh, svh and lvh units"], ["Dynamic viewport units need Safari 15.4+"]),
    support!("aspect-ratio", 95, true, "none"),
    support!("object-fit", 98, true, "none"),
    support!("scroll-snap-type", 96, true, "partial"),
    support!("scroll-snap-stop", 90, true, "none"),
    support!(":focus-visible", 96, true, "none"),
    support!("pointer-events", 99, true, "full"),
    support!("overscroll-behavior", 94, true, "none"),
    support!("accent-color", 93, true, "none"),
    support!(":has()", 91, true, "none", [], ["Firefox shipped :has() in version 121"]),
    support!("margin-inline-start", 96, true, "none"),
    support!("padding-inline", 95, true, "none"),
    support!("block-size", 96, true, "none"),
    support!("inset-block-start", 93, true, "none"),
    support!("position", 98, true, "partial", [], ["position: sticky needs a scrolling ancestor without overflow: hidden"]),
    support!("top", 99, true, "full"),
    support!("margin-left", 99, true, "full"),
    support!("isolation", 97, true, "none"),
    support!("anchor-name", 70, false, "none", ["position-try-fallbacks", "anchor-size()"], ["Chromium only at the time of writing"]),
    support!("content-visibility", 85, false, "none"),
];

/// Table entry for `property`, if the catalog defines one.
pub fn lookup(property: &str) -> Option<&'static SupportEntry> {
    let needle = property.trim().to_lowercase();
    SUPPORT_TABLE.iter().find(|entry| entry.property == needle)
}

/// Catalog-defined support for `property`: the table first, then the tier of
/// the first feature listing it.
pub fn catalog_support(property: &str) -> Option<BrowserSupport> {
    if let Some(entry) = lookup(property) {
        return Some(entry.browser_support());
    }
    catalog::features_with_property(property)
        .first()
        .map(|feature| feature.support_tier.default_support())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_support() {
        let report = lookup("display").unwrap().report(false);
        assert_eq!(report.overall_support, 98);
        assert!(report.experimental_features.is_empty());

        let report = lookup("display").unwrap().report(true);
        assert!(!report.experimental_features.is_empty());
    }

    #[test]
    fn test_every_primary_property_has_catalog_support() {
        for feature in catalog::all() {
            assert!(
                catalog_support(feature.primary_property()).is_some(),
                "No support data for {}",
                feature.primary_property()
            );
        }
    }

    #[test]
    fn test_tier_fallback() {
        // Listed in the catalog but not in the table
        let support = catalog_support("justify-content").unwrap();
        assert_eq!(support, crate::catalog::SupportTier::Excellent.default_support());
        assert!(catalog_support("made-up-property").is_none());
    }

    #[test]
    fn test_lookup_normalizes() {
        assert!(lookup("  Display ").is_some());
    }
}
