//! Read-side content assembly with static fallback.
//!
//! The public read endpoints must never show visitors an error state, so
//! any store failure, empty result, or unmappable stored document is
//! replaced by the curated sets below. Failed writes are a different
//! story and stay visible to the submitter; see the server crate.

use mongodb::bson::from_document;
use serde::de::DeserializeOwned;
use tracing::warn;

use models::{PortfolioItem, Testimonial};

use crate::store::DocumentStore;

pub const DEFAULT_TESTIMONIAL_LIMIT: i64 = 6;
pub const DEFAULT_PORTFOLIO_LIMIT: i64 = 12;

/// Up to `limit` testimonials from the store, or the curated set.
pub async fn testimonials(store: &dyn DocumentStore, limit: i64) -> Vec<Testimonial> {
    match mapped(store, models::testimonial::COLLECTION, limit).await {
        Some(items) => items,
        None => fallback_testimonials(),
    }
}

/// Up to `limit` portfolio items from the store, or the curated set.
pub async fn portfolio(store: &dyn DocumentStore, limit: i64) -> Vec<PortfolioItem> {
    match mapped(store, models::portfolio::COLLECTION, limit).await {
        Some(items) => items,
        None => fallback_portfolio(),
    }
}

/// Store read collapsed to an `Option`: `None` covers read failure, an
/// empty collection, and documents that do not map to the response shape.
async fn mapped<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    limit: i64,
) -> Option<Vec<T>> {
    let docs = match store.find_many(collection, limit).await {
        Ok(docs) => docs,
        Err(e) => {
            warn!(collection, error = %e, "store read failed; serving fallback content");
            return None;
        }
    };
    if docs.is_empty() {
        return None;
    }
    let mut items = Vec::with_capacity(docs.len());
    for mut doc in docs {
        doc.remove("_id");
        match from_document::<T>(doc) {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!(collection, error = %e, "stored document does not match the response shape; serving fallback content");
                return None;
            }
        }
    }
    Some(items)
}

pub fn fallback_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Nico Boesman".into(),
            role: Some("Owner".into()),
            company: Some("Boesman Creative Co.".into()),
            quote: "We turn ideas into bold, tangible brand moments.".into(),
            rating: 5,
        },
        Testimonial {
            name: "Anna L.".into(),
            role: Some("Marketing Lead".into()),
            company: Some("Local FMCG Brand".into()),
            quote: "Reliable, fast and the print quality is excellent.".into(),
            rating: 5,
        },
        Testimonial {
            name: "Taimi N.".into(),
            role: Some("Founder".into()),
            company: Some("Startup Namibia".into()),
            quote: "They nailed our signage and merch on a tight deadline.".into(),
            rating: 5,
        },
    ]
}

pub fn fallback_portfolio() -> Vec<PortfolioItem> {
    let sample = |title: &str, image_url: &str, category: &str| PortfolioItem {
        title: title.into(),
        image_url: image_url.into(),
        category: Some(category.into()),
        client: None,
        description: None,
    };
    vec![
        sample(
            "Brand Roll-up Banners",
            "https://images.unsplash.com/photo-1520975661595-6453be3f7070?q=80&w=1600&auto=format&fit=crop",
            "Large Format",
        ),
        sample(
            "DTF Printed Tees",
            "https://images.unsplash.com/photo-1520975661595-6453be3f7070?q=80&w=1200&auto=format&fit=crop",
            "DTF",
        ),
        sample(
            "Outdoor Signage",
            "https://images.unsplash.com/photo-1531973968078-9bb02785f13d?q=80&w=1600&auto=format&fit=crop",
            "Signage",
        ),
        sample(
            "Corporate Wear",
            "https://images.unsplash.com/photo-1520975661595-6453be3f7070?q=80&w=1200&auto=format&fit=crop",
            "Apparel",
        ),
        sample(
            "Embroidery Caps",
            "https://images.unsplash.com/photo-1521572267360-ee0c2909d518?q=80&w=1200&auto=format&fit=crop",
            "Embroidery",
        ),
        sample(
            "Custom Gifts",
            "https://images.unsplash.com/photo-1512428559087-560fa5ceab42?q=80&w=1600&auto=format&fit=crop",
            "Gifts",
        ),
    ]
}
