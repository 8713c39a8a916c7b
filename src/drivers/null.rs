//! # Null Storage Driver
//!
//! The Null storage driver is used where token persistence is explicitly
//! disabled. Every operation is a silent no-op: if you try to retrieve a
//! token from this storage, you will always get `None`.
use async_trait::async_trait;

use super::StorageDriver;
use crate::{consumer::ConsumerConfig, errors::StorageResult, token::Token};

/// Represents the null storage driver.
#[derive(Debug)]
pub struct Null {}

/// Creates a new null storage instance
///
/// # Returns
///
/// A boxed [`StorageDriver`] instance.
#[must_use]
pub fn new() -> Box<dyn StorageDriver> {
    Box::new(Null {})
}

#[async_trait]
impl StorageDriver for Null {
    /// Always reports that no token is stored.
    async fn get(&self, _consumer: &ConsumerConfig) -> StorageResult<Option<Token>> {
        Ok(None)
    }

    /// Ignores the token and reports success.
    async fn set(&self, _consumer: &ConsumerConfig, _token: &Token) -> StorageResult<()> {
        Ok(())
    }

    /// Does nothing and reports success.
    async fn delete(&self, _consumer: &ConsumerConfig) -> StorageResult<()> {
        Ok(())
    }
}
