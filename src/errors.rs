//! # Token Storage Error Handling
//!
//! The reference drivers never fail: a missing token is a normal `Ok(None)`
//! result, not an error. The error type exists for real persistent backends
//! implementing the same contract, which are expected to surface their fault
//! conditions through it.

/// Errors related to token storage operations
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Any(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
