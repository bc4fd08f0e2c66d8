use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Message;
use service::store::DocumentStore;

pub mod content;
pub mod diag;
pub mod forms;

/// Shared state: the process-wide store handle, created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

pub async fn root() -> Json<Message> {
    Json(Message { message: "Boesman Creative Co. API is running" })
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(diag::test_database))
        .route("/api/inquiries", post(forms::submit_inquiry))
        .route("/api/quotes", post(forms::submit_quote))
        .route("/api/testimonials", get(content::list_testimonials))
        .route("/api/portfolio", get(content::list_portfolio))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
