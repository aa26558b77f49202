//! Wire types for the question-answering API.

use serde::{Deserialize, Serialize};

/// Answer language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Urdu
    Ur,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ur" => Ok(Language::Ur),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// A question sent to the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The reader's question
    pub question: String,

    /// Passage the reader selected before asking, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_context: Option<String>,

    /// Requested answer language
    #[serde(default)]
    pub language: Language,
}

impl QueryRequest {
    /// Plain question without selected context.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            selected_context: None,
            language: Language::default(),
        }
    }
}

/// A source citation attached to an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// Section the citation points at
    pub section_id: String,

    /// Section title
    pub section_title: String,

    /// Title of the containing chapter
    pub chapter_title: String,

    /// Link to the cited section
    pub url: String,

    /// Short quoted excerpt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    /// Retrieval relevance, when the service reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f32>,
}

/// The service's answer to a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Generated answer text
    pub answer: String,

    /// Supporting citations
    #[serde(default)]
    pub citations: Vec<Citation>,

    /// Whether the service found an answer in the content
    pub has_answer: bool,

    /// Confidence in the answer, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// Server-side processing time, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<f64>,
}

/// Service health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Fully operational
    Healthy,
    /// Operational with degraded dependencies
    Degraded,
    /// Not serving answers
    Unhealthy,
}

/// Health-check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall classification; availability means not `Unhealthy`
    pub status: HealthStatus,

    /// Vector store connectivity
    #[serde(default)]
    pub qdrant_connected: bool,

    /// Generator backend availability
    #[serde(default)]
    pub gemini_available: bool,

    /// Service version string
    #[serde(default)]
    pub version: String,
}

/// Structured error body returned on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// Seconds to wait before retrying, for rate limiting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}
