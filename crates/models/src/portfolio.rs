use serde::{Deserialize, Serialize};
use validator::Validate;

pub const COLLECTION: &str = "portfolioitem";

/// Portfolio entry, read in bulk by the public site.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PortfolioItem {
    pub title: String,
    pub image_url: String,
    pub category: Option<String>,
    pub client: Option<String>,
    pub description: Option<String>,
}
