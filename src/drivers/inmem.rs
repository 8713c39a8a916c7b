//! # In-Memory Storage Driver
//!
//! This driver stores an OAuth token in process memory so that it can be
//! retrieved later. Since the token is not persisted in any way, this is
//! mostly useful for writing automated tests.
//!
//! The store holds a single slot: the consumer argument is ignored and every
//! configuration reads and writes the same token.
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::StorageDriver;
use crate::{
    consumer::ConsumerConfig,
    errors::{StorageError, StorageResult},
    token::Token,
};

/// Creates a new in-memory storage instance with an empty slot.
///
/// # Returns
///
/// A boxed [`StorageDriver`] instance.
#[must_use]
pub fn new() -> Box<dyn StorageDriver> {
    Inmem::from(None)
}

/// Creates a new in-memory storage instance pre-filled with `token`.
///
/// # Returns
///
/// A boxed [`StorageDriver`] instance.
#[must_use]
pub fn with_token(token: Token) -> Box<dyn StorageDriver> {
    Inmem::from(Some(token))
}

/// Represents the in-memory storage driver.
#[derive(Debug, Default)]
pub struct Inmem {
    slot: Mutex<Option<Token>>,
}

impl Inmem {
    /// Constructs a new [`Inmem`] instance from an optional initial token.
    ///
    /// # Returns
    ///
    /// A boxed [`StorageDriver`] instance.
    #[must_use]
    pub fn from(token: Option<Token>) -> Box<dyn StorageDriver> {
        Box::new(Self {
            slot: Mutex::new(token),
        })
    }

    fn slot(&self) -> StorageResult<MutexGuard<'_, Option<Token>>> {
        self.slot
            .lock()
            .map_err(|_| StorageError::Any("token slot mutex poisoned".into()))
    }
}

#[async_trait]
impl StorageDriver for Inmem {
    /// Returns the current slot content, whichever consumer asks.
    async fn get(&self, _consumer: &ConsumerConfig) -> StorageResult<Option<Token>> {
        Ok(self.slot()?.clone())
    }

    /// Overwrites the slot with the given token.
    async fn set(&self, _consumer: &ConsumerConfig, token: &Token) -> StorageResult<()> {
        *self.slot()? = Some(token.clone());
        Ok(())
    }

    /// Resets the slot to empty.
    async fn delete(&self, _consumer: &ConsumerConfig) -> StorageResult<()> {
        *self.slot()? = None;
        Ok(())
    }
}
