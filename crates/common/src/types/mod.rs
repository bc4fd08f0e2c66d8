use serde::Serialize;

/// Static banner returned by the root endpoint.
#[derive(Serialize, Debug)]
pub struct Message {
    pub message: &'static str,
}

/// Acknowledgement for a stored submission.
#[derive(Serialize, Debug)]
pub struct SubmitAck {
    pub status: &'static str,
    pub id: String,
}

impl SubmitAck {
    pub fn ok(id: String) -> Self {
        Self { status: "ok", id }
    }
}

/// Best-effort connectivity report for the diagnostics endpoint.
///
/// Status fields are human-readable strings, never errors; the endpoint
/// must respond successfully in every connection state.
#[derive(Serialize, Debug)]
pub struct DbDiagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
