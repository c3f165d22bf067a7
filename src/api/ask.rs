//! Question and stats endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use super::ApiError;
use crate::context::{ContextStats, SearchContext};
use crate::linguistic::LinguisticEngine;

/// Body of `POST /ask`
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    /// Missing or null is treated as an empty question
    #[serde(default)]
    pub question: Option<String>,
}

/// POST /ask - Answer a question from the handbook
///
/// Matching is CPU-bound, so it runs on the blocking pool to keep the
/// runtime's worker threads free for I/O.
pub async fn ask<E>(
    State(ctx): State<Arc<SearchContext<E>>>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse
where
    E: LinguisticEngine + 'static,
{
    let question = request.question.unwrap_or_default();

    match tokio::task::spawn_blocking(move || ctx.answer(&question)).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "answer task failed");
            let error = ApiError::internal("failed to answer the question");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// GET /api/stats - Corpus and index sizes
pub async fn stats<E>(State(ctx): State<Arc<SearchContext<E>>>) -> Json<ContextStats>
where
    E: LinguisticEngine + 'static,
{
    Json(ctx.stats())
}
