use serde::{Deserialize, Serialize};
use validator::Validate;

pub const COLLECTION: &str = "inquiry";

/// General contact inquiry submitted through the public contact form.
///
/// Write-only: accepted, validated, persisted; never read back by this
/// system. Unknown extra fields in the payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Inquiry {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(max = 120))]
    pub company: Option<String>,
    #[validate(length(max = 150))]
    pub subject: Option<String>,
    #[validate(length(min = 5, max = 2000))]
    pub message: String,
    /// Form source identifier.
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "contact".to_string()
}
