//! Service layer: document store access and public content assembly.
//! - Keeps store semantics out of the HTTP handlers.
//! - Tolerates an absent database connection instead of crashing.
//! - Provides clear error types and documented interfaces.

pub mod content;
pub mod errors;
pub mod store;
