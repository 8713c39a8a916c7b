//! # Configuration Management
//!
//! Declarative selection of a token storage backend, meant to be embedded in
//! an application's configuration file.
use serde::{Deserialize, Serialize};

use crate::{
    drivers::{inmem, null},
    storage::TokenStorage,
    token::Token,
};

/// Token storage configuration.
///
/// Example (YAML):
/// ```yaml
/// token_storage:
///   kind: in_mem
///   token:
///     access_token: "s3cr3t"
///     token_type: "Bearer"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Token persistence disabled.
    Null,
    /// Single-slot process-memory storage, optionally pre-filled with a
    /// token. Nothing survives the process.
    InMem {
        #[serde(default)]
        token: Option<Token>,
    },
}

/// Create a storage provider from configuration.
#[must_use]
pub fn create_token_storage(config: &StorageConfig) -> TokenStorage {
    match config {
        StorageConfig::Null => TokenStorage::new(null::new()),
        StorageConfig::InMem { token: Some(token) } => {
            TokenStorage::new(inmem::with_token(token.clone()))
        }
        StorageConfig::InMem { token: None } => TokenStorage::new(inmem::new()),
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::consumer::ConsumerConfig;

    fn github() -> ConsumerConfig {
        ConsumerConfig::new("github", "client-123")
    }

    #[tokio::test]
    async fn builds_null_storage() {
        let config: StorageConfig = serde_yaml::from_str("kind: \"null\"").unwrap();
        let storage = create_token_storage(&config);

        storage
            .set(&github(), &Token::bearer("s3cr3t"))
            .await
            .unwrap();
        assert_eq!(storage.get(&github()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn builds_in_memory_storage_with_initial_token() {
        let config: StorageConfig = serde_yaml::from_str(
            r"
kind: in_mem
token:
  access_token: seeded
  token_type: Bearer
",
        )
        .unwrap();
        let storage = create_token_storage(&config);

        let token = storage.get(&github()).await.unwrap().unwrap();
        assert_eq!(token.access_token(), Some("seeded"));
    }

    #[tokio::test]
    async fn builds_empty_in_memory_storage() {
        let config: StorageConfig = serde_yaml::from_str("kind: in_mem").unwrap();
        let storage = create_token_storage(&config);

        assert_eq!(storage.get(&github()).await.unwrap(), None);
    }
}
