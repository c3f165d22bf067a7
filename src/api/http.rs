//! HTTP server setup with Axum

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use super::ask;
use crate::context::SearchContext;
use crate::linguistic::LinguisticEngine;

/// Create the Axum router with all endpoints
pub fn create_router<E>(ctx: Arc<SearchContext<E>>, static_dir: Option<&Path>) -> Router
where
    E: LinguisticEngine + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/ask", post(ask::ask::<E>))
        .route("/api/stats", get(ask::stats::<E>))
        .route("/health", get(health_check));

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.layer(cors).with_state(ctx)
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(router: Router, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "FAQ server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(e) => tracing::error!(error = %e, "failed to listen for shutdown signal"),
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linguistic::BasicEngine;
    use crate::search::SynonymTable;
    use crate::types::{FaqCorpus, FaqEntry};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn app() -> Router {
        let corpus = FaqCorpus::new(vec![FaqEntry::new(
            "What is the tuition fee?",
            "Tuition is paid per semester.",
        )]);
        let ctx = SearchContext::build(BasicEngine::new(), SynonymTable::handbook(), corpus);
        create_router(Arc::new(ctx), None)
    }

    fn ask_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_ask_returns_answer() {
        let response = app()
            .oneshot(ask_request(r#"{"question": "How much is the tuition?"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["answer"], "Tuition is paid per semester.");
        assert_eq!(json["source"], "What is the tuition fee?");
        assert!(json.get("suggestions").is_none());
    }

    #[tokio::test]
    async fn test_ask_without_question_prompts() {
        let response = app().oneshot(ask_request("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["answer"], "Please ask a question.");
        assert_eq!(json["confidence"], 0.0);
    }

    #[tokio::test]
    async fn test_stats() {
        let response = app()
            .oneshot(Request::builder().uri("/api/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let json = json_body(response).await;
        assert_eq!(json["entries"], 1);
    }

    #[tokio::test]
    async fn test_static_files_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("chat.js"), "console.log('hi');").unwrap();

        let ctx = SearchContext::build(
            BasicEngine::new(),
            SynonymTable::handbook(),
            FaqCorpus::default(),
        );
        let response = create_router(Arc::new(ctx), Some(dir.path()))
            .oneshot(
                Request::builder()
                    .uri("/static/chat.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
