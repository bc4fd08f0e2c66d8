use serde::{Deserialize, Serialize};
use validator::Validate;

pub const COLLECTION: &str = "quoterequest";

/// Detailed quote request for printing/branding services.
///
/// Write-only, like [`crate::Inquiry`]. `service` is free text; `quantity`
/// is bounded to keep obviously bogus orders out of the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(max = 120))]
    pub company: Option<String>,
    /// Requested service type.
    pub service: String,
    #[validate(range(min = 1, max = 100000))]
    pub quantity: Option<i64>,
    /// Dimensions or sizes.
    #[validate(length(max = 60))]
    pub size: Option<String>,
    #[validate(length(max = 120))]
    pub colors: Option<String>,
    #[validate(length(max = 60))]
    pub deadline: Option<String>,
    #[validate(length(max = 3000))]
    pub details: Option<String>,
    /// Form source identifier.
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "quote".to_string()
}
