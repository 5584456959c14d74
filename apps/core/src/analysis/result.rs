//! Analysis Result - Output structure for task analysis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::context::ContextHints;
use super::intent::IntentKind;
use crate::catalog::Category;

/// Everything the engine learned about a task description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Tokens from the keyword rules
    pub keywords: Vec<String>,

    /// Detected styling intents
    pub intents: BTreeSet<IntentKind>,

    /// Matched patterns / evaluated patterns (0.0 - 1.0)
    pub confidence: f32,

    /// Catalog categories to search
    pub suggested_categories: BTreeSet<Category>,

    /// Ecosystems from the description and the project context
    pub framework_hints: BTreeSet<String>,

    /// Structured project context, when one was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_analysis: Option<ContextHints>,

    /// Names of the features finally recommended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl AnalysisResult {
    pub fn has_intent(&self, intent: IntentKind) -> bool {
        self.intents.contains(&intent)
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        let intents: Vec<&str> = self.intents.iter().map(|i| i.label()).collect();
        format!(
            "Intents: [{}] ({:.0}%), Keywords: {}, Categories: {}, Frameworks: {}",
            intents.join(", "),
            self.confidence * 100.0,
            self.keywords.len(),
            self.suggested_categories.len(),
            self.framework_hints.len(),
        )
    }
}
