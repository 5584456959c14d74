//! # Analysis Module
//!
//! Fast, deterministic analysis of a UI task description before any catalog
//! lookup happens.
//!
//! ## Components
//! - `intent`: styling intent classification using regex patterns
//! - `context`: project context detection (frameworks, build tools, constraints)
//! - `keywords`: rule-based keyword extraction (fallback search signal)
//! - `result`: output data structure
//!
//! [`TaskAnalyzer`] orchestrates them according to a [`ClassifierStrategy`].

pub mod context;
pub mod intent;
pub mod keywords;
pub mod result;

pub use context::{ContextAnalyzer, ContextHints};
pub use intent::{IntentClassifier, IntentKind, IntentResult};
pub use keywords::{KeywordExtractor, KeywordResult};
pub use result::AnalysisResult;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

use crate::error::AppError;

/// How a description is turned into search input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierStrategy {
    /// Intent patterns drive category search; keyword rules are the fallback.
    #[default]
    Patterns,
    /// Keyword rules only: no intents, zero confidence, keyword search.
    LegacyKeywords,
}

impl FromStr for ClassifierStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "patterns" | "semantic" => Ok(ClassifierStrategy::Patterns),
            "legacy" | "legacy_keywords" | "keywords" => Ok(ClassifierStrategy::LegacyKeywords),
            other => Err(AppError::Config(format!("Unknown classifier strategy: {}", other))),
        }
    }
}

/// Orchestrates intent classification, context detection and keyword extraction
#[derive(Default)]
pub struct TaskAnalyzer {
    strategy: ClassifierStrategy,
    intent_classifier: IntentClassifier,
    context_analyzer: ContextAnalyzer,
    keyword_extractor: KeywordExtractor,
}

impl TaskAnalyzer {
    pub fn new(strategy: ClassifierStrategy) -> Self {
        Self {
            strategy,
            intent_classifier: IntentClassifier::new(),
            context_analyzer: ContextAnalyzer::new(),
            keyword_extractor: KeywordExtractor::new(),
        }
    }

    pub fn strategy(&self) -> ClassifierStrategy {
        self.strategy
    }

    /// Analyze a task description and optional project context
    pub fn analyze(&self, description: &str, context: Option<&Value>) -> AnalysisResult {
        let start = Instant::now();

        let hints = self.context_analyzer.analyze(context);
        let keywords = self.keyword_extractor.extract_keywords(description);

        let mut result = match self.strategy {
            ClassifierStrategy::Patterns => {
                let intent = self.intent_classifier.classify(description);
                AnalysisResult {
                    keywords,
                    intents: intent.intents,
                    confidence: intent.confidence,
                    suggested_categories: intent.suggested_categories,
                    framework_hints: intent.framework_hints,
                    ..AnalysisResult::default()
                }
            }
            ClassifierStrategy::LegacyKeywords => AnalysisResult {
                keywords,
                framework_hints: IntentClassifier::detect_frameworks(description),
                ..AnalysisResult::default()
            },
        };

        result
            .framework_hints
            .extend(hints.ecosystem_names().map(str::to_string));
        if context.is_some() {
            result.context_analysis = Some(hints);
        }
        result.processing_time_ms = start.elapsed().as_millis() as u64;

        debug!("Task analysis ({:?}): {}", self.strategy, result.summary());
        result
    }

    /// Analysis for callers that already extracted their keywords.
    pub fn from_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> AnalysisResult {
        let mut seen = std::collections::HashSet::new();
        let keywords = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty() && seen.insert(k.clone()))
            .collect();

        AnalysisResult {
            keywords,
            ..AnalysisResult::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patterns_strategy() {
        let analyzer = TaskAnalyzer::new(ClassifierStrategy::Patterns);
        let result = analyzer.analyze("Build a responsive card grid", None);

        assert!(result.has_intent(IntentKind::Layout));
        assert!(result.has_intent(IntentKind::Responsive));
        assert!(result.confidence > 0.0);
        assert!(!result.keywords.is_empty());
        assert!(result.context_analysis.is_none());
    }

    #[test]
    fn test_legacy_strategy_skips_classification() {
        let analyzer = TaskAnalyzer::new(ClassifierStrategy::LegacyKeywords);
        let result = analyzer.analyze("Build a responsive card grid", None);

        assert!(result.intents.is_empty());
        assert_eq!(result.confidence, 0.0);
        assert!(result.keywords.contains(&"grid".to_string()));
    }

    #[test]
    fn test_context_hints_merge_into_frameworks() {
        let analyzer = TaskAnalyzer::default();
        let context = json!({ "dependencies": { "bootstrap": "5.3.0" } });
        let result = analyzer.analyze("A React component with a sticky header", Some(&context));

        assert!(result.framework_hints.contains("react"));
        assert!(result.framework_hints.contains("bootstrap"));
        assert_eq!(
            result.context_analysis.and_then(|h| h.css_framework),
            Some("bootstrap".to_string())
        );
    }

    #[test]
    fn test_from_keywords_dedupes() {
        let analyzer = TaskAnalyzer::default();
        let result = analyzer.from_keywords(&["Grid", "grid", " ", "flex"]);
        assert_eq!(result.keywords, vec!["grid".to_string(), "flex".to_string()]);
        assert!(result.intents.is_empty());
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("legacy".parse::<ClassifierStrategy>().unwrap(), ClassifierStrategy::LegacyKeywords);
        assert_eq!("Patterns".parse::<ClassifierStrategy>().unwrap(), ClassifierStrategy::Patterns);
        assert!("neural".parse::<ClassifierStrategy>().is_err());
    }
}
