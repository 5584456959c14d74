//! Logical-property preference pass.
//!
//! Among equally scored neighbours, a candidate whose primary property is
//! writing-mode relative moves ahead of its physical-direction equivalent.
//! Only adjacent equivalent pairs are swapped, so unrelated candidates keep
//! their relative order and nothing overtakes a strictly higher score.

use super::scorer::ScoredCandidate;

const SCORE_EPSILON: f32 = 1e-4;

/// Physical property → writing-mode relative equivalent
const PHYSICAL_TO_LOGICAL: &[(&str, &str)] = &[
    ("width", "inline-size"),
    ("height", "block-size"),
    ("min-width", "min-inline-size"),
    ("min-height", "min-block-size"),
    ("max-width", "max-inline-size"),
    ("max-height", "max-block-size"),
    ("margin-left", "margin-inline-start"),
    ("margin-right", "margin-inline-end"),
    ("margin-top", "margin-block-start"),
    ("margin-bottom", "margin-block-end"),
    ("padding-left", "padding-inline-start"),
    ("padding-right", "padding-inline-end"),
    ("padding-top", "padding-block-start"),
    ("padding-bottom", "padding-block-end"),
    ("left", "inset-inline-start"),
    ("right", "inset-inline-end"),
    ("top", "inset-block-start"),
    ("bottom", "inset-block-end"),
    ("border-left", "border-inline-start"),
    ("border-right", "border-inline-end"),
    ("border-top", "border-block-start"),
    ("border-bottom", "border-block-end"),
];

/// The logical equivalent of a physical-direction property, if it has one.
pub fn logical_equivalent(property: &str) -> Option<&'static str> {
    PHYSICAL_TO_LOGICAL
        .iter()
        .find(|(physical, _)| *physical == property)
        .map(|(_, logical)| *logical)
}

/// True when `physical` and `logical` are the two sides of an equivalence.
fn is_equivalent_pair(physical: &ScoredCandidate, logical: &ScoredCandidate) -> bool {
    logical_equivalent(physical.feature.primary_property())
        .is_some_and(|equivalent| equivalent == logical.feature.primary_property())
}

/// Reorder so logical variants precede equal-scored physical equivalents.
pub fn prefer_logical(mut candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    if candidates.len() < 2 {
        return candidates;
    }

    // Each swap removes one physical-before-logical inversion, so this terminates.
    loop {
        let mut swapped = false;
        for i in 0..candidates.len() - 1 {
            let (a, b) = (&candidates[i], &candidates[i + 1]);
            if (a.score - b.score).abs() <= SCORE_EPSILON && is_equivalent_pair(a, b) {
                candidates.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    candidates
}
