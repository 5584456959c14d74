//! Mock documentation tiers.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::EngineConfig;
use crate::docs::{fallback, DocCache, DocSource, DocSourceKind, DocumentationClient, DocumentationPayload};
use crate::engine::RecommendationEngine;
use crate::error::AppError;
use crate::models::BrowserSupport;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Answer with the static payload, re-tagged with the mock's source kind
    Succeed,
    /// Answer with a fixed payload
    Fixed(DocumentationPayload),
    /// Fail with an upstream error
    Fail,
}

/// `DocSource` that counts its calls.
pub struct MockDocSource {
    pub behavior: MockBehavior,
    pub kind: DocSourceKind,
    pub delay_ms: u64,
    calls: AtomicUsize,
}

impl MockDocSource {
    pub fn succeeding(kind: DocSourceKind) -> Self {
        Self {
            behavior: MockBehavior::Succeed,
            kind,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Fail,
            kind: DocSourceKind::Structured,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn fixed(payload: DocumentationPayload) -> Self {
        Self {
            kind: payload.source,
            behavior: MockBehavior::Fixed(payload),
            delay_ms: 0,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocSource for MockDocSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch(&self, property: &str) -> Result<DocumentationPayload, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.behavior {
            MockBehavior::Succeed => {
                let mut payload = fallback::static_payload(property);
                payload.source = self.kind;
                Ok(payload)
            }
            MockBehavior::Fixed(payload) => Ok(payload.clone()),
            MockBehavior::Fail => Err(AppError::Upstream(format!("mock failure for {}", property))),
        }
    }
}

/// Documentation client over the given mocks, with its own cache.
pub fn client_with(
    structured: Arc<MockDocSource>,
    direct: Arc<MockDocSource>,
    ttl: Duration,
) -> DocumentationClient {
    DocumentationClient::new(Arc::new(DocCache::new(ttl)), structured, direct)
}

/// Engine whose documentation tiers are mocks.
pub fn engine_with(config: &EngineConfig, structured: Arc<MockDocSource>, direct: Arc<MockDocSource>) -> RecommendationEngine {
    RecommendationEngine::with_docs(config, client_with(structured, direct, config.cache_ttl()))
}

/// Engine whose structured tier always answers.
pub fn offline_engine() -> RecommendationEngine {
    engine_with(
        &EngineConfig::default(),
        Arc::new(MockDocSource::succeeding(DocSourceKind::Structured)),
        Arc::new(MockDocSource::failing()),
    )
}

/// A payload as a documentation service might return it for an unknown property.
pub fn documented_payload(property: &str, overall: u8) -> DocumentationPayload {
    DocumentationPayload {
        property: property.to_string(),
        description: format!("Documented {}", property),
        syntax: format!("{}: auto;", property),
        use_cases: vec!["Documented use".to_string()],
        examples: vec![format!(".x {{ {}: auto; }}", property)],
        see_also: vec![],
        browser_support: Some(BrowserSupport::new(overall, overall >= 90, "none")),
        doc_reference: format!("https://docs.example.com/{}", property),
        source: DocSourceKind::Structured,
    }
}
