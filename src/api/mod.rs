//! HTTP API
//!
//! Thin transport over [`SearchContext::answer`](crate::context::SearchContext::answer):
//! - `POST /ask` - answer a question
//! - `GET /api/stats` - corpus and index sizes
//! - `GET /health` - liveness
//! - `/static/*` - files from the static directory

pub mod ask;
pub mod http;

use serde::Serialize;

pub use http::{create_router, serve};

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
