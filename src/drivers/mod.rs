//! # Token Storage Drivers Module
//!
//! This module defines the driver trait and the reference implementations.
use async_trait::async_trait;

use crate::{consumer::ConsumerConfig, errors::StorageResult, token::Token};

pub mod inmem;
pub mod null;

/// Trait representing a token storage driver.
#[async_trait]
pub trait StorageDriver: Sync + Send {
    /// Retrieves the token stored for the given consumer. A missing token is
    /// reported as `Ok(None)`, never as an error.
    ///
    /// # Errors
    ///
    /// Returns a [`super::StorageError`] if the backend fails during the
    /// operation.
    async fn get(&self, consumer: &ConsumerConfig) -> StorageResult<Option<Token>>;

    /// Stores or replaces the token for the given consumer.
    ///
    /// # Errors
    ///
    /// Returns a [`super::StorageError`] if the backend fails during the
    /// operation.
    async fn set(&self, consumer: &ConsumerConfig, token: &Token) -> StorageResult<()>;

    /// Removes any token stored for the given consumer. Succeeds even when
    /// no token was stored.
    ///
    /// # Errors
    ///
    /// Returns a [`super::StorageError`] if the backend fails during the
    /// operation.
    async fn delete(&self, consumer: &ConsumerConfig) -> StorageResult<()>;
}
