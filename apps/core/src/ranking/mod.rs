//! Relevance ranking: multi-factor scoring followed by the logical-property
//! preference pass.

pub mod logical;
pub mod scorer;

pub use logical::prefer_logical;
pub use scorer::{rank, score, ScoredCandidate};

use crate::analysis::{AnalysisResult, ContextHints};
use crate::catalog::FeatureDescriptor;

/// Score, sort, apply the logical preference pass, then keep the top `limit`.
pub fn rank_top(
    candidates: &[&'static FeatureDescriptor],
    analysis: &AnalysisResult,
    context: &ContextHints,
    limit: usize,
) -> Vec<ScoredCandidate> {
    let mut ranked = prefer_logical(rank(candidates, analysis, context));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::IntentKind;
    use crate::catalog::{self, Category};

    #[test]
    fn test_rank_top_truncates() {
        let candidates: Vec<&'static FeatureDescriptor> = catalog::all().iter().collect();
        let mut analysis = AnalysisResult::default();
        analysis.intents.insert(IntentKind::Layout);

        let top = rank_top(&candidates, &analysis, &ContextHints::default(), 5);
        assert_eq!(top.len(), 5);
        assert!(top.iter().all(|c| c.feature.category == Category::Layout));
        assert_eq!(top[0].feature.name, "Flexbox");
    }

    #[test]
    fn test_rank_top_empty() {
        let top = rank_top(&[], &AnalysisResult::default(), &ContextHints::default(), 5);
        assert!(top.is_empty());
    }
}
