//! Storage error surface shared by the proposal and assessment stores.

/// Error enumeration for store failures. Adapters translate their transport
/// errors into these so the services stay backend-agnostic.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
