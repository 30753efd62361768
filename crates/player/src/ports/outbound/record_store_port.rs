//! Record Store Port - remote get/put of the character snapshot
//!
//! The store holds a single record under a fixed id. Adapters decide how that record
//! is addressed; the application only asks for "the" snapshot.

use async_trait::async_trait;
use charsheet_domain::CharacterSnapshot;

/// Errors from the remote record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("Record store request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("Record store returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be understood.
    #[error("Invalid record store response: {0}")]
    InvalidResponse(String),

    /// The snapshot could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn request(message: impl ToString) -> Self {
        Self::Request(message.to_string())
    }

    pub fn status(status: u16, message: impl ToString) -> Self {
        Self::Status {
            status,
            message: message.to_string(),
        }
    }

    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStorePort: Send + Sync {
    /// Fetch the stored snapshot. `Ok(None)` when the record does not exist yet.
    async fn fetch(&self) -> Result<Option<CharacterSnapshot>, StoreError>;

    /// Replace the stored snapshot.
    async fn store(&self, snapshot: &CharacterSnapshot) -> Result<(), StoreError>;
}
