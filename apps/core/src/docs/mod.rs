//! # Documentation Client
//!
//! Resolves reference documentation for a single CSS property through three
//! tiers, in order:
//!
//! 1. the shared TTL cache,
//! 2. the structured documentation service (which itself answers from the
//!    curated static set when the service cannot be reached),
//! 3. a direct fetch of the public reference page.
//!
//! Successful tier 2 and tier 3 resolutions populate the cache. When every
//! tier fails the caller gets `AppError::DocumentationUnavailable`.

pub mod cache;
pub mod direct;
pub mod fallback;
pub mod parser;
pub mod structured;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

pub use cache::{CacheEntry, DocCache};
pub use direct::DirectDocSource;
pub use parser::{DocParser, HeuristicParser, PartialPayload};
pub use structured::StructuredDocSource;

use crate::catalog::{self, SupportTier};
use crate::error::AppError;
use crate::models::BrowserSupport;
use crate::support;

const REFERENCE_BASE: &str = "https://developer.mozilla.org/en-US/docs/Web/CSS/";

/// Where a payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocSourceKind {
    Structured,
    Direct,
    Static,
}

/// Normalized documentation for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationPayload {
    pub property: String,
    pub description: String,
    pub syntax: String,
    pub use_cases: Vec<String>,
    pub examples: Vec<String>,
    pub see_also: Vec<String>,
    pub browser_support: Option<BrowserSupport>,
    pub doc_reference: String,
    pub source: DocSourceKind,
}

impl DocumentationPayload {
    pub fn with_support(mut self, browser_support: Option<BrowserSupport>) -> Self {
        self.browser_support = browser_support;
        self
    }
}

/// A single documentation tier behind the cache.
#[async_trait]
pub trait DocSource: Send + Sync + 'static {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch and normalize documentation for an already normalized property name.
    async fn fetch(&self, property: &str) -> Result<DocumentationPayload, AppError>;
}

/// Cache key for a property name.
pub fn normalize_property(property: &str) -> String {
    property.trim().to_lowercase()
}

/// Reference page for `property`: the catalog's link when it lists the
/// property, otherwise the generic reference path.
pub fn reference_url(property: &str) -> String {
    catalog::find_by_primary(property)
        .or_else(|| catalog::features_with_property(property).into_iter().next())
        .map(|feature| feature.doc_reference.to_string())
        .unwrap_or_else(|| format!("{}{}", REFERENCE_BASE, normalize_property(property)))
}

/// `base` with `segments` appended as percent-encoded path segments.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::Config(format!("Documentation URL cannot be a base: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Three-tier documentation resolver.
#[derive(Clone)]
pub struct DocumentationClient {
    cache: Arc<DocCache>,
    structured: Arc<dyn DocSource>,
    direct: Arc<dyn DocSource>,
}

impl DocumentationClient {
    pub fn new(cache: Arc<DocCache>, structured: Arc<dyn DocSource>, direct: Arc<dyn DocSource>) -> Self {
        Self {
            cache,
            structured,
            direct,
        }
    }

    pub fn cache(&self) -> &Arc<DocCache> {
        &self.cache
    }

    /// Resolve documentation for `property`, walking the tiers in order.
    pub async fn resolve(&self, property: &str) -> Result<DocumentationPayload, AppError> {
        let key = normalize_property(property);
        if key.is_empty() {
            return Err(AppError::InvalidInput("Property name cannot be empty".to_string()));
        }

        if let Some(payload) = self.cache.get(&key).await {
            debug!("Documentation cache hit for '{}'", key);
            return Ok(payload);
        }

        let structured_err = match self.structured.fetch(&key).await {
            Ok(payload) => {
                info!("Resolved '{}' from {} ({:?})", key, self.structured.name(), payload.source);
                self.cache.insert(&key, &payload).await;
                return Ok(payload);
            }
            Err(e) => {
                warn!("{} failed for '{}': {}", self.structured.name(), key, e);
                e
            }
        };

        match self.direct.fetch(&key).await {
            Ok(payload) => {
                info!("Resolved '{}' from {}", key, self.direct.name());
                self.cache.insert(&key, &payload).await;
                Ok(payload)
            }
            Err(direct_err) => Err(AppError::DocumentationUnavailable {
                property: key,
                reason: format!("{}; {}", structured_err, direct_err),
            }),
        }
    }

    /// Browser support for `property`: the documented figures, else the
    /// catalog's, else a moderate-tier default.
    pub async fn resolve_support(&self, property: &str) -> Result<BrowserSupport, AppError> {
        let payload = self.resolve(property).await?;
        Ok(payload
            .browser_support
            .or_else(|| support::catalog_support(property))
            .unwrap_or_else(|| SupportTier::Moderate.default_support()))
    }
}
