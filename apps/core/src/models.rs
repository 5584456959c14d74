use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analysis::AnalysisResult;
use crate::catalog::SupportTier;
use crate::error::AppError;

/// The caller's compatibility-vs-novelty preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Approach {
    /// Modern features with good support, plus experimental ones worth knowing about.
    #[default]
    Modern,
    /// Only features that work everywhere.
    Compatible,
    /// Everything, including limited-support features that need progressive enhancement.
    Progressive,
}

impl Approach {
    /// Whether a candidate with the given tier survives the approach filter.
    pub fn allows(&self, tier: SupportTier) -> bool {
        match self {
            Approach::Compatible => tier == SupportTier::Excellent,
            Approach::Modern => matches!(
                tier,
                SupportTier::Excellent | SupportTier::Good | SupportTier::Experimental
            ),
            Approach::Progressive => true,
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Approach::Modern => "modern",
            Approach::Compatible => "compatible",
            Approach::Progressive => "progressive",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Approach {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modern" => Ok(Approach::Modern),
            "compatible" => Ok(Approach::Compatible),
            "progressive" => Ok(Approach::Progressive),
            other => Err(AppError::InvalidInput(format!("Unknown approach: {}", other))),
        }
    }
}

/// Browser support summary for a single property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserSupport {
    /// Global usage-weighted support percentage (0-100).
    pub overall: u8,
    /// Supported by the current versions of all evergreen browsers.
    pub modern_browsers: bool,
    /// Coarse description of support in older browsers ("full", "partial", "none").
    pub legacy_support: String,
}

impl BrowserSupport {
    pub fn new(overall: u8, modern_browsers: bool, legacy_support: &str) -> Self {
        Self {
            overall: overall.min(100),
            modern_browsers,
            legacy_support: legacy_support.to_string(),
        }
    }
}

/// A single recommendation returned to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub property: String,
    pub description: String,
    pub syntax: String,
    pub browser_support: BrowserSupport,
    pub use_cases: Vec<String>,
    pub doc_reference: String,
    /// Ordering metadata only; never serialized and ignored by equality.
    #[serde(skip)]
    pub relevance_score: f32,
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.property == other.property
            && self.description == other.description
            && self.syntax == other.syntax
            && self.browser_support == other.browser_support
            && self.use_cases == other.use_cases
            && self.doc_reference == other.doc_reference
    }
}

/// Response of the `suggest` entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// False when no candidate survived search and filtering.
    pub success: bool,
    pub approach: Approach,
    pub suggestions: Vec<Suggestion>,
    pub analysis: AnalysisResult,
}

/// Response of the `check_support` entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportReport {
    pub property: String,
    pub overall_support: u8,
    pub modern_browsers: bool,
    pub legacy_support: String,
    pub experimental_features: Vec<String>,
    pub notes: Vec<String>,
}

/// Response of the `get_details` entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub property: String,
    pub description: String,
    pub syntax: String,
    pub use_cases: Vec<String>,
    /// Empty unless examples were requested.
    pub examples: Vec<String>,
    pub see_also: Vec<String>,
    pub browser_support: BrowserSupport,
    pub doc_reference: String,
    /// Names of catalog features that list this property.
    pub related_features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_parsing() {
        assert_eq!("Modern".parse::<Approach>().unwrap(), Approach::Modern);
        assert_eq!(" compatible ".parse::<Approach>().unwrap(), Approach::Compatible);
        assert_eq!("progressive".parse::<Approach>().unwrap(), Approach::Progressive);
        assert!("bleeding-edge".parse::<Approach>().is_err());
    }

    #[test]
    fn test_approach_tiers() {
        assert!(Approach::Compatible.allows(SupportTier::Excellent));
        assert!(!Approach::Compatible.allows(SupportTier::Good));
        assert!(Approach::Modern.allows(SupportTier::Experimental));
        assert!(!Approach::Modern.allows(SupportTier::Limited));
        assert!(!Approach::Modern.allows(SupportTier::Moderate));
        assert!(Approach::Progressive.allows(SupportTier::Limited));
    }

    #[test]
    fn test_suggestion_equality_ignores_score() {
        let a = Suggestion {
            property: "gap".to_string(),
            description: "Gutters".to_string(),
            syntax: "gap: 1rem;".to_string(),
            browser_support: BrowserSupport::new(96, true, "partial"),
            use_cases: vec![],
            doc_reference: "https://example.com/gap".to_string(),
            relevance_score: 12.0,
        };
        let mut b = a.clone();
        b.relevance_score = 3.5;
        assert_eq!(a, b);

        let json = serde_json::to_value(&a).unwrap();
        assert!(json.get("relevance_score").is_none());
    }
}
