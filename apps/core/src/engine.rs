//! # Recommendation Engine
//!
//! Host-facing entry points. A suggestion request flows through:
//!
//! ```text
//! description ──► TaskAnalyzer ──► catalog search ──► approach filter
//!                                                          │
//!      Suggestion ◄── enrichment (docs) ◄── rank_top ◄─────┘
//! ```
//!
//! Ranking only looks at catalog data, so documentation is fetched for the
//! surviving top candidates only, concurrently.

use futures::future::join_all;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::analysis::{AnalysisResult, ClassifierStrategy, TaskAnalyzer};
use crate::catalog::{self, FeatureDescriptor, SupportTier};
use crate::config::EngineConfig;
use crate::docs::{
    fallback, normalize_property, DirectDocSource, DocCache, DocumentationClient,
    DocumentationPayload, StructuredDocSource,
};
use crate::error::AppError;
use crate::guidance::{self, UsageDecision};
use crate::models::{Approach, PropertyDetails, SuggestResponse, Suggestion, SupportReport};
use crate::ranking::{self, ScoredCandidate};
use crate::support;

/// Keep only candidates whose tier the approach accepts, in input order.
pub fn filter_by_approach(
    candidates: Vec<&'static FeatureDescriptor>,
    approach: Approach,
) -> Vec<&'static FeatureDescriptor> {
    candidates
        .into_iter()
        .filter(|feature| approach.allows(feature.support_tier))
        .collect()
}

pub struct RecommendationEngine {
    analyzer: TaskAnalyzer,
    docs: DocumentationClient,
    max_results: usize,
}

impl RecommendationEngine {
    /// Build an engine with HTTP documentation tiers from `config`.
    pub fn new(config: &EngineConfig) -> Result<Self, AppError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("stylewise/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let cache = Arc::new(DocCache::new(config.cache_ttl()));
        let structured = Arc::new(StructuredDocSource::new(client.clone(), config.structured_url()?));
        let direct = Arc::new(DirectDocSource::new(client, config.direct_url()?));

        info!(
            "Recommendation engine ready (classifier: {:?}, cache TTL: {}s, structured docs: {})",
            config.classifier, config.cache_ttl_secs, config.structured_docs_url
        );
        Ok(Self::with_docs(config, DocumentationClient::new(cache, structured, direct)))
    }

    /// Build an engine around an existing documentation client.
    pub fn with_docs(config: &EngineConfig, docs: DocumentationClient) -> Self {
        Self {
            analyzer: TaskAnalyzer::new(config.classifier),
            docs,
            max_results: config.max_results,
        }
    }

    /// Recommend features for a free-text UI task.
    ///
    /// Never fails: when nothing survives search and filtering the response
    /// has `success: false` and no suggestions.
    pub async fn suggest(
        &self,
        task_description: &str,
        approach: Approach,
        project_context: Option<&Value>,
    ) -> SuggestResponse {
        let description = task_description.trim();
        if description.is_empty() {
            info!("Empty task description, nothing to suggest");
            return SuggestResponse {
                success: false,
                approach,
                suggestions: vec![],
                analysis: AnalysisResult::default(),
            };
        }

        let analysis = self.analyzer.analyze(description, project_context);
        let candidates = match self.analyzer.strategy() {
            ClassifierStrategy::Patterns => catalog::search_by_categories(&analysis.suggested_categories),
            ClassifierStrategy::LegacyKeywords => catalog::search(&analysis.keywords),
        };

        self.recommend(analysis, candidates, approach).await
    }

    /// Recommend features for caller-supplied keywords, skipping classification.
    pub async fn suggest_from_keywords<S: AsRef<str>>(&self, keywords: &[S], approach: Approach) -> SuggestResponse {
        let analysis = self.analyzer.from_keywords(keywords);
        let candidates = catalog::search(&analysis.keywords);
        self.recommend(analysis, candidates, approach).await
    }

    async fn recommend(
        &self,
        mut analysis: AnalysisResult,
        candidates: Vec<&'static FeatureDescriptor>,
        approach: Approach,
    ) -> SuggestResponse {
        let context = analysis.context_analysis.clone().unwrap_or_default();
        let allowed = filter_by_approach(candidates, approach);

        let mut ranked = ranking::rank_top(&allowed, &analysis, &context, self.max_results);
        if ranked.is_empty() {
            ranked = filter_by_approach(catalog::search(&analysis.keywords), approach)
                .into_iter()
                .take(self.max_results)
                .map(ScoredCandidate::unscored)
                .collect();
            debug!("Ranking produced nothing, {} keyword matches used instead", ranked.len());
        }

        let suggestions = self.enrich(&ranked).await;
        analysis.recommendations = Some(ranked.iter().map(|c| c.feature.name.to_string()).collect());

        info!(
            "Suggested {} feature(s) ({} approach): {}",
            suggestions.len(),
            approach,
            analysis.summary()
        );

        SuggestResponse {
            success: !suggestions.is_empty(),
            approach,
            suggestions,
            analysis,
        }
    }

    async fn enrich(&self, ranked: &[ScoredCandidate]) -> Vec<Suggestion> {
        join_all(ranked.iter().map(|candidate| self.enrich_one(candidate))).await
    }

    async fn enrich_one(&self, candidate: &ScoredCandidate) -> Suggestion {
        let feature = candidate.feature;
        let property = feature.primary_property();
        let payload = self.documentation_or_fallback(property).await;

        let browser_support = support::catalog_support(property)
            .or(payload.browser_support)
            .unwrap_or_else(|| feature.support_tier.default_support());

        Suggestion {
            property: property.to_string(),
            description: feature.description.to_string(),
            syntax: payload.syntax,
            browser_support,
            use_cases: payload.use_cases,
            doc_reference: feature.doc_reference.to_string(),
            relevance_score: candidate.score,
        }
    }

    /// Documentation for `property`; the static payload when every tier failed.
    async fn documentation_or_fallback(&self, property: &str) -> DocumentationPayload {
        match self.docs.resolve(property).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("{}; using static documentation", e);
                fallback::static_payload(property)
            }
        }
    }

    /// Browser support report for a single property.
    pub async fn check_support(&self, property: &str, include_experimental: bool) -> Result<SupportReport, AppError> {
        let key = normalize_property(property);
        if key.is_empty() {
            return Err(AppError::InvalidInput("Property name cannot be empty".to_string()));
        }

        if let Some(entry) = support::lookup(&key) {
            return Ok(entry.report(include_experimental));
        }

        let (support, note) = match catalog::features_with_property(&key).first() {
            Some(feature) => (
                feature.support_tier.default_support(),
                format!("Estimated from the {} support tier of {}", feature.support_tier.label(), feature.name),
            ),
            None => (
                self.docs.resolve_support(&key).await?,
                "Resolved from reference documentation".to_string(),
            ),
        };

        Ok(SupportReport {
            property: key,
            overall_support: support.overall,
            modern_browsers: support.modern_browsers,
            legacy_support: support.legacy_support,
            experimental_features: vec![],
            notes: vec![note],
        })
    }

    /// Reference details for a single property.
    pub async fn get_details(&self, property: &str, include_examples: bool) -> Result<PropertyDetails, AppError> {
        let key = normalize_property(property);
        if key.is_empty() {
            return Err(AppError::InvalidInput("Property name cannot be empty".to_string()));
        }

        let payload = self.documentation_or_fallback(&key).await;
        let browser_support = support::catalog_support(&key)
            .or(payload.browser_support)
            .unwrap_or_else(|| SupportTier::Moderate.default_support());
        let related_features = catalog::features_with_property(&key)
            .into_iter()
            .map(|feature| feature.name.to_string())
            .collect();

        Ok(PropertyDetails {
            property: key,
            description: payload.description,
            syntax: payload.syntax,
            use_cases: payload.use_cases,
            examples: if include_examples { payload.examples } else { vec![] },
            see_also: payload.see_also,
            browser_support,
            doc_reference: payload.doc_reference,
            related_features,
        })
    }

    /// Follow-up once the caller accepts or declines `property`.
    pub fn confirm_usage(&self, property: &str, consented: bool, needs_fallback: bool) -> Result<UsageDecision, AppError> {
        if property.trim().is_empty() {
            return Err(AppError::InvalidInput("Property name cannot be empty".to_string()));
        }
        Ok(guidance::confirm_usage(property, consented, needs_fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_approach_keeps_order() {
        let all: Vec<&'static FeatureDescriptor> = catalog::all().iter().collect();

        let compatible = filter_by_approach(all.clone(), Approach::Compatible);
        assert!(compatible.iter().all(|f| f.support_tier == SupportTier::Excellent));

        let progressive = filter_by_approach(all.clone(), Approach::Progressive);
        assert_eq!(progressive, all);

        let modern = filter_by_approach(all.clone(), Approach::Modern);
        let positions: Vec<usize> = modern
            .iter()
            .filter_map(|m| all.iter().position(|f| f.name == m.name))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
