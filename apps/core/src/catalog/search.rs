//! Candidate search over the feature catalog.
//!
//! Filtering only; no ranking happens here. Results always follow catalog order.

use std::collections::BTreeSet;

use super::{all, Category, FeatureDescriptor};

/// Features where any keyword is a case-insensitive substring of the
/// name, description or property list.
pub fn search<S: AsRef<str>>(keywords: &[S]) -> Vec<&'static FeatureDescriptor> {
    let needles: Vec<String> = keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    if needles.is_empty() {
        return vec![];
    }

    all()
        .iter()
        .filter(|feature| {
            let haystack = feature.search_text();
            needles.iter().any(|needle| haystack.contains(needle.as_str()))
        })
        .collect()
}

/// Features in exactly `category`.
pub fn search_by_category(category: Category) -> Vec<&'static FeatureDescriptor> {
    all().iter().filter(|f| f.category == category).collect()
}

/// Features in any of `categories`, in catalog order.
pub fn search_by_categories(categories: &BTreeSet<Category>) -> Vec<&'static FeatureDescriptor> {
    all()
        .iter()
        .filter(|f| categories.contains(&f.category))
        .collect()
}
