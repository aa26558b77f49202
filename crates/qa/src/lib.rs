//! HTTP client for the textbook question-answering service.
//!
//! Thin wrapper over the service's `/query` and `/health` endpoints.
//! The wire shapes here are displayed by the reading UI and must stay
//! stable; field names are part of the contract.

#![warn(missing_docs)]

mod client;
mod types;

pub use client::{QaError, QuestionApi, RagClient, DEFAULT_BASE_URL};
pub use types::{
    ApiError, Citation, HealthResponse, HealthStatus, Language, QueryRequest, QueryResponse,
};
