use axum::{extract::State, Json};
use mongodb::bson::to_document;
use validator::Validate;

use common::types::SubmitAck;
use models::{inquiry, quote, Inquiry, QuoteRequest};
use service::errors::StoreError;

use crate::errors::ApiError;
use crate::routes::AppState;

/// POST /api/inquiries — validate, then persist verbatim.
///
/// A failed write stays visible to the submitter; there is no other
/// record of it.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(payload): Json<Inquiry>,
) -> Result<Json<SubmitAck>, ApiError> {
    payload.validate()?;
    let doc = to_document(&payload).map_err(|e| StoreError::Backend(e.to_string()))?;
    let id = state.store.insert_one(inquiry::COLLECTION, doc).await?;
    Ok(Json(SubmitAck::ok(id)))
}

/// POST /api/quotes — validate, then persist verbatim.
pub async fn submit_quote(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<SubmitAck>, ApiError> {
    payload.validate()?;
    let doc = to_document(&payload).map_err(|e| StoreError::Backend(e.to_string()))?;
    let id = state.store.insert_one(quote::COLLECTION, doc).await?;
    Ok(Json(SubmitAck::ok(id)))
}
