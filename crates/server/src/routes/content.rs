use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use models::{PortfolioItem, Testimonial};
use service::content;

use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

/// GET /api/testimonials — never fails; fallback content masks any store
/// error from site visitors.
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Testimonial>> {
    let limit = params.limit.unwrap_or(content::DEFAULT_TESTIMONIAL_LIMIT);
    Json(content::testimonials(state.store.as_ref(), limit).await)
}

/// GET /api/portfolio — same fallback contract as testimonials.
pub async fn list_portfolio(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<PortfolioItem>> {
    let limit = params.limit.unwrap_or(content::DEFAULT_PORTFOLIO_LIMIT);
    Json(content::portfolio(state.store.as_ref(), limit).await)
}
