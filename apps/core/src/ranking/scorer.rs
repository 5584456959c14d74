//! Relevance scorer.
//!
//! Additive factors (intent/category match, support tier, framework affinity),
//! then scaled by `1 + confidence`.

use std::collections::BTreeSet;

use crate::analysis::{AnalysisResult, ContextHints, IntentKind};
use crate::catalog::{Category, FeatureDescriptor, SupportTier};

pub const INTENT_MATCH_BONUS: f32 = 10.0;
pub const EXCELLENT_SUPPORT_BONUS: f32 = 5.0;
pub const GOOD_SUPPORT_BONUS: f32 = 3.0;
pub const FRAMEWORK_AFFINITY_BONUS: f32 = 3.0;

/// Intent → category pairs that earn the intent bonus.
const INTENT_CATEGORY_MATCHES: &[(IntentKind, Category)] = &[
    (IntentKind::Layout, Category::Layout),
    (IntentKind::Animation, Category::Animation),
    (IntentKind::Spacing, Category::Logical),
];

/// Ecosystems and the property fragments they tend to lean on.
const FRAMEWORK_AFFINITIES: &[(&str, &[&str])] = &[
    ("tailwind", &["flex", "grid", "gap", "aspect-ratio"]),
    ("bootstrap", &["flex", "grid"]),
    ("react", &["flex", "grid", "transition"]),
    ("vue", &["transition", "animation"]),
    ("angular", &["animation", "transition"]),
    ("svelte", &["transition", "animation"]),
];

/// Candidate paired with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub feature: &'static FeatureDescriptor,
    pub score: f32,
}

impl ScoredCandidate {
    /// Candidate kept in catalog order without scoring.
    pub fn unscored(feature: &'static FeatureDescriptor) -> Self {
        Self { feature, score: 0.0 }
    }
}

/// Whether any hinted ecosystem has an affinity with the candidate's properties.
fn has_framework_affinity<'a>(
    candidate: &FeatureDescriptor,
    frameworks: impl IntoIterator<Item = &'a str>,
) -> bool {
    frameworks.into_iter().any(|framework| {
        FRAMEWORK_AFFINITIES
            .iter()
            .filter(|(name, _)| *name == framework)
            .any(|(_, fragments)| {
                candidate
                    .properties
                    .iter()
                    .any(|prop| fragments.iter().any(|fragment| prop.contains(fragment)))
            })
    })
}

/// Score a single candidate.
pub fn score(candidate: &FeatureDescriptor, analysis: &AnalysisResult, context: &ContextHints) -> f32 {
    let mut score = 0.0;

    // Factor 1: intent ↔ category match
    if INTENT_CATEGORY_MATCHES
        .iter()
        .any(|(intent, category)| analysis.has_intent(*intent) && candidate.category == *category)
    {
        score += INTENT_MATCH_BONUS;
    }

    // Factor 2: support tier
    score += match candidate.support_tier {
        SupportTier::Excellent => EXCELLENT_SUPPORT_BONUS,
        SupportTier::Good => GOOD_SUPPORT_BONUS,
        _ => 0.0,
    };

    // Factor 3: framework affinity, from the description or the project context
    let frameworks: BTreeSet<&str> = analysis
        .framework_hints
        .iter()
        .chain(context.detected.iter())
        .map(String::as_str)
        .collect();
    if has_framework_affinity(candidate, frameworks) {
        score += FRAMEWORK_AFFINITY_BONUS;
    }

    score * (1.0 + analysis.confidence)
}

/// Score every candidate and sort descending. Equal scores keep input order.
pub fn rank(
    candidates: &[&'static FeatureDescriptor],
    analysis: &AnalysisResult,
    context: &ContextHints,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|&feature| ScoredCandidate {
            feature,
            score: score(feature, analysis, context),
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}
