//! Reqwest-backed client for the question-answering service.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::debug;

use crate::types::{ApiError, HealthResponse, HealthStatus, QueryRequest, QueryResponse};

/// Default service endpoint for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/v1";

/// Errors from the question-answering service.
#[derive(Debug, thiserror::Error)]
pub enum QaError {
    /// Transport-level failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a structured error body
    #[error("{error}: {message}")]
    Api {
        /// Machine-readable error code
        error: String,
        /// Human-readable message
        message: String,
    },
}

/// Seam over the question-answering endpoints so consumers can be
/// tested against a stub.
#[async_trait]
pub trait QuestionApi: Send + Sync {
    /// Ask a question about the textbook content.
    async fn ask(&self, request: &QueryRequest) -> Result<QueryResponse, QaError>;

    /// Fetch the service health report.
    async fn check_health(&self) -> Result<HealthResponse, QaError>;

    /// Whether the service is reachable and not reporting unhealthy.
    async fn is_available(&self) -> bool {
        match self.check_health().await {
            Ok(health) => health.status != HealthStatus::Unhealthy,
            Err(_) => false,
        }
    }
}

/// HTTP client for the retrieval-augmented answering service.
#[derive(Clone)]
pub struct RagClient {
    /// HTTP client
    client: Client,

    /// Service base URL
    base_url: String,
}

impl RagClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ClientBuilder::new()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }
}

impl Default for RagClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl QuestionApi for RagClient {
    async fn ask(&self, request: &QueryRequest) -> Result<QueryResponse, QaError> {
        debug!(question_len = request.question.len(), "sending query");

        let response = self
            .client
            .post(format!("{}/query", self.base_url))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(match response.json::<ApiError>().await {
                Ok(body) => QaError::Api {
                    error: body.error,
                    message: body.message,
                },
                Err(_) => QaError::Api {
                    error: status.to_string(),
                    message: "failed to get answer".to_string(),
                },
            });
        }

        Ok(response.json().await?)
    }

    async fn check_health(&self) -> Result<HealthResponse, QaError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubApi {
        health: Option<HealthStatus>,
    }

    #[async_trait]
    impl QuestionApi for StubApi {
        async fn ask(&self, request: &QueryRequest) -> Result<QueryResponse, QaError> {
            Ok(QueryResponse {
                answer: format!("echo: {}", request.question),
                citations: Vec::new(),
                has_answer: true,
                confidence: None,
                response_time_ms: None,
            })
        }

        async fn check_health(&self) -> Result<HealthResponse, QaError> {
            match self.health {
                Some(status) => Ok(HealthResponse {
                    status,
                    qdrant_connected: true,
                    gemini_available: true,
                    version: "test".to_string(),
                }),
                None => Err(QaError::Api {
                    error: "unreachable".to_string(),
                    message: "connection refused".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn degraded_service_still_counts_as_available() {
        let api = StubApi {
            health: Some(HealthStatus::Degraded),
        };
        assert!(api.is_available().await);
    }

    #[tokio::test]
    async fn unhealthy_or_unreachable_service_is_unavailable() {
        let unhealthy = StubApi {
            health: Some(HealthStatus::Unhealthy),
        };
        assert!(!unhealthy.is_available().await);

        let unreachable = StubApi { health: None };
        assert!(!unreachable.is_available().await);
    }
}
