//! Line-oriented JSON command dispatch for host integrations.
//!
//! Each request is one JSON object tagged by `command`; each response is one
//! JSON object with `success` and either `result` or `error`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::engine::RecommendationEngine;
use crate::error::AppError;
use crate::models::Approach;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ToolRequest {
    Suggest {
        #[serde(default)]
        task_description: Option<String>,
        /// Legacy callers send keywords instead of a description.
        #[serde(default)]
        keywords: Option<Vec<String>>,
        #[serde(default)]
        approach: Approach,
        #[serde(default)]
        project_context: Option<Value>,
    },
    CheckSupport {
        property: String,
        #[serde(default)]
        include_experimental: bool,
    },
    GetDetails {
        property: String,
        #[serde(default = "default_true")]
        include_examples: bool,
    },
    ConfirmUsage {
        property: String,
        consented: bool,
        #[serde(default)]
        needs_fallback: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResponse {
    fn ok(success: bool, result: Value) -> Self {
        Self {
            success,
            result: Some(result),
            error: None,
        }
    }

    fn err(error: &AppError) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.to_string()),
        }
    }
}

/// Parse one request line.
pub fn parse_request(line: &str) -> Result<ToolRequest, AppError> {
    serde_json::from_str(line.trim()).map_err(|e| AppError::InvalidInput(format!("Malformed request: {}", e)))
}

/// Execute a parsed request.
pub async fn execute(engine: &RecommendationEngine, request: ToolRequest) -> Result<ToolResponse, AppError> {
    match request {
        ToolRequest::Suggest {
            task_description,
            keywords,
            approach,
            project_context,
        } => {
            let response = match (task_description, keywords) {
                (Some(description), _) => engine.suggest(&description, approach, project_context.as_ref()).await,
                (None, Some(keywords)) => engine.suggest_from_keywords(&keywords, approach).await,
                (None, None) => {
                    return Err(AppError::InvalidInput(
                        "suggest requires task_description or keywords".to_string(),
                    ))
                }
            };
            Ok(ToolResponse::ok(response.success, serde_json::to_value(&response)?))
        }
        ToolRequest::CheckSupport {
            property,
            include_experimental,
        } => {
            let report = engine.check_support(&property, include_experimental).await?;
            Ok(ToolResponse::ok(true, serde_json::to_value(&report)?))
        }
        ToolRequest::GetDetails {
            property,
            include_examples,
        } => {
            let details = engine.get_details(&property, include_examples).await?;
            Ok(ToolResponse::ok(true, serde_json::to_value(&details)?))
        }
        ToolRequest::ConfirmUsage {
            property,
            consented,
            needs_fallback,
        } => {
            let decision = engine.confirm_usage(&property, consented, needs_fallback)?;
            Ok(ToolResponse::ok(true, serde_json::to_value(&decision)?))
        }
    }
}

/// Handle one raw line. Failures become error responses.
pub async fn dispatch(engine: &RecommendationEngine, line: &str) -> ToolResponse {
    let request = match parse_request(line) {
        Ok(request) => request,
        Err(e) => {
            warn!("{}", e);
            return ToolResponse::err(&e);
        }
    };
    debug!("Dispatching {:?}", request);

    match execute(engine, request).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Command failed: {}", e);
            ToolResponse::err(&e)
        }
    }
}

/// Answer newline-delimited requests from `reader` on `writer` until input closes.
///
/// A line that is not UTF-8 gets an error response like any other bad request.
pub async fn serve<R, W>(engine: &RecommendationEngine, mut reader: R, mut writer: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => dispatch(engine, line).await,
            Err(e) => {
                let err = AppError::InvalidInput(format!("Request is not valid UTF-8: {}", e));
                warn!("{}", err);
                ToolResponse::err(&err)
            }
        };

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggest_defaults() {
        let request = parse_request(r#"{"command":"suggest","task_description":"center a div"}"#).unwrap();
        assert_eq!(
            request,
            ToolRequest::Suggest {
                task_description: Some("center a div".to_string()),
                keywords: None,
                approach: Approach::Modern,
                project_context: None,
            }
        );
    }

    #[test]
    fn test_parse_get_details_defaults_to_examples() {
        let request = parse_request(r#"{"command":"get_details","property":"gap"}"#).unwrap();
        assert_eq!(
            request,
            ToolRequest::GetDetails {
                property: "gap".to_string(),
                include_examples: true,
            }
        );
    }

    #[test]
    fn test_malformed_requests() {
        assert!(matches!(parse_request("not json"), Err(AppError::InvalidInput(_))));
        assert!(parse_request(r#"{"command":"launch_rockets"}"#).is_err());
        assert!(parse_request(r#"{"command":"confirm_usage","property":"gap"}"#).is_err());
        assert!(parse_request(r#"{"command":"suggest","approach":"retro"}"#).is_err());
    }
}
