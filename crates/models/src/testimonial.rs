use serde::{Deserialize, Serialize};
use validator::Validate;

pub const COLLECTION: &str = "testimonial";

/// Customer testimonial, read in bulk by the public site.
///
/// May come from the store or from curated fallback content; the shape is
/// identical either way.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Testimonial {
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}

fn default_rating() -> i32 {
    5
}
