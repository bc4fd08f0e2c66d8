use axum::extract::State;
use axum::Json;

use common::env::presence;
use common::types::DbDiagnostics;
use service::errors::StoreError;

use crate::routes::AppState;

/// GET /test — best-effort connectivity probe. Never fails; every
/// internal error is rendered as a status string.
pub async fn test_database(State(state): State<AppState>) -> Json<DbDiagnostics> {
    let mut report = DbDiagnostics {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: presence("DATABASE_URL"),
        database_name: presence("DATABASE_NAME"),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match state.store.collection_names().await {
        Ok(mut names) => {
            names.truncate(10);
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
            report.connection_status = "Connected".to_string();
        }
        Err(StoreError::NotConnected) => {
            report.database = "⚠️ Available but not initialized".to_string();
        }
        Err(e) => {
            let msg: String = e.to_string().chars().take(80).collect();
            report.database = format!("⚠️ Connected but error: {msg}");
        }
    }

    Json(report)
}
