//! # Token Storage Module
//!
//! This module provides the generic front for whichever storage driver the
//! application configured.
use crate::{consumer::ConsumerConfig, drivers::StorageDriver, errors::StorageResult, token::Token};

/// Represents a token storage instance
pub struct TokenStorage {
    /// The driver used for underlying operations
    pub driver: Box<dyn StorageDriver>,
}

impl TokenStorage {
    /// Creates a new storage instance with the specified driver.
    #[must_use]
    pub fn new(driver: Box<dyn StorageDriver>) -> Self {
        Self { driver }
    }

    /// Retrieves the token stored for the given consumer.
    ///
    /// # Example
    /// ```
    /// use oauth2_token_store::{drivers, ConsumerConfig, StorageResult, Token, TokenStorage};
    ///
    /// pub async fn get() -> StorageResult<Option<Token>> {
    ///     let storage = TokenStorage::new(drivers::inmem::new());
    ///     storage.get(&ConsumerConfig::new("github", "client-id")).await
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// A [`StorageResult`] containing an `Option` representing the stored
    /// token. Absence is a normal result, not an error.
    pub async fn get(&self, consumer: &ConsumerConfig) -> StorageResult<Option<Token>> {
        tracing::debug!(consumer = %consumer.name, "retrieving oauth token");
        self.driver.get(consumer).await
    }

    /// Stores or replaces the token for the given consumer.
    ///
    /// # Example
    /// ```
    /// use oauth2_token_store::{drivers, ConsumerConfig, StorageResult, Token, TokenStorage};
    ///
    /// pub async fn set() -> StorageResult<()> {
    ///     let storage = TokenStorage::new(drivers::inmem::new());
    ///     let consumer = ConsumerConfig::new("github", "client-id");
    ///     storage.set(&consumer, &Token::bearer("s3cr3t")).await
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// A [`StorageResult`] indicating the success of the operation.
    pub async fn set(&self, consumer: &ConsumerConfig, token: &Token) -> StorageResult<()> {
        tracing::debug!(consumer = %consumer.name, "storing oauth token");
        self.driver.set(consumer, token).await
    }

    /// Removes any token stored for the given consumer.
    ///
    /// # Example
    /// ```
    /// use oauth2_token_store::{drivers, ConsumerConfig, StorageResult, TokenStorage};
    ///
    /// pub async fn delete() -> StorageResult<()> {
    ///     let storage = TokenStorage::new(drivers::inmem::new());
    ///     storage.delete(&ConsumerConfig::new("github", "client-id")).await
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// A [`StorageResult`] indicating the success of the operation.
    pub async fn delete(&self, consumer: &ConsumerConfig) -> StorageResult<()> {
        tracing::debug!(consumer = %consumer.name, "deleting oauth token");
        self.driver.delete(consumer).await
    }
}

#[cfg(test)]
mod tests {

    use rstest::rstest;

    use super::*;
    use crate::drivers;

    fn github() -> ConsumerConfig {
        ConsumerConfig::new("github", "client-123")
    }

    #[tokio::test]
    async fn delegates_to_driver() {
        let storage = TokenStorage::new(drivers::inmem::new());
        let token = Token::bearer("s3cr3t");

        storage.set(&github(), &token).await.unwrap();
        assert_eq!(storage.get(&github()).await.unwrap(), Some(token));
        storage.delete(&github()).await.unwrap();
        assert_eq!(storage.get(&github()).await.unwrap(), None);
    }

    #[rstest]
    #[case::null(drivers::null::new())]
    #[case::inmem(drivers::inmem::new())]
    #[tokio::test]
    async fn delete_without_token_succeeds(#[case] driver: Box<dyn StorageDriver>) {
        let storage = TokenStorage::new(driver);

        assert!(storage.delete(&github()).await.is_ok());
        assert_eq!(storage.get(&github()).await.unwrap(), None);
    }
}
