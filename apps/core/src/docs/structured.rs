use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use super::parser::{DocParser, HeuristicParser};
use super::{fallback, join_segments, reference_url, DocSource, DocSourceKind, DocumentationPayload};
use crate::error::AppError;

/// Client for the structured documentation service.
///
/// The service answers `GET {base}/docs/css/{property}` with markdown. When
/// the service cannot be reached at all the curated static payload is
/// returned instead; an error status is reported as a failure so the caller
/// can try the next tier.
pub struct StructuredDocSource {
    client: Client,
    base_url: Url,
    parser: Arc<dyn DocParser>,
}

impl StructuredDocSource {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            parser: Arc::new(HeuristicParser),
        }
    }

    pub fn with_parser(mut self, parser: Arc<dyn DocParser>) -> Self {
        self.parser = parser;
        self
    }

    async fn fetch_markdown(&self, property: &str) -> Result<String, AppError> {
        let url = join_segments(&self.base_url, &["docs", "css", property])?;
        debug!("Requesting structured docs: {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "text/markdown, text/plain;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "Structured docs request for '{}' failed with status {}",
                property, status
            )));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(AppError::Upstream(format!(
                "Structured docs returned an empty body for '{}'",
                property
            )));
        }
        Ok(body)
    }
}

#[async_trait]
impl DocSource for StructuredDocSource {
    fn name(&self) -> &'static str {
        "structured docs"
    }

    async fn fetch(&self, property: &str) -> Result<DocumentationPayload, AppError> {
        match self.fetch_markdown(property).await {
            Ok(markdown) => Ok(self.parser.parse(&markdown).into_payload(
                property,
                reference_url(property),
                DocSourceKind::Structured,
            )),
            Err(e) if e.is_unreachable() => {
                warn!("Structured docs unreachable ({}), serving static docs for '{}'", e, property);
                Ok(fallback::static_payload(property))
            }
            Err(e) => Err(e),
        }
    }
}
