//! Entity schemas for the marketing-site backend.
//!
//! Each entity maps to one store collection, named after the type in
//! lowercase (`Inquiry` -> `"inquiry"`). Submitted entities are validated
//! at the system boundary and stored verbatim; read-side entities keep the
//! same shape whether they come from the store or from fallback content.

pub mod inquiry;
pub mod portfolio;
pub mod quote;
pub mod testimonial;

pub use inquiry::Inquiry;
pub use portfolio::PortfolioItem;
pub use quote::QuoteRequest;
pub use testimonial::Testimonial;
