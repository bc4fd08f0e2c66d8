use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection is not initialized")]
    NotConnected,
    #[error("database error: {0}")]
    Backend(String),
}
