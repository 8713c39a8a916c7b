#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
//! # OAuth2 Token Store
//!
//! A pluggable storage abstraction for OAuth tokens, meant to back a
//! web-framework OAuth extension. The crate defines a three-operation driver
//! contract ([`drivers::StorageDriver`]: get, set, delete, keyed by a
//! [`ConsumerConfig`]) and ships two reference drivers:
//!
//! * [`drivers::null`] — token persistence disabled; never stores anything.
//! * [`drivers::inmem`] — a single in-process slot, mostly useful for tests.
//!
//! The caller owning the OAuth handshake picks a driver (directly or via
//! [`StorageConfig`]) and talks to it through [`TokenStorage`]:
//!
//! ```
//! use oauth2_token_store::{drivers, ConsumerConfig, StorageResult, Token, TokenStorage};
//!
//! pub async fn example() -> StorageResult<Option<Token>> {
//!     let storage = TokenStorage::new(drivers::inmem::new());
//!     let github = ConsumerConfig::new("github", "client-id");
//!     storage.set(&github, &Token::bearer("s3cr3t")).await?;
//!     storage.get(&github).await
//! }
//! ```
pub mod config;
pub mod consumer;
pub mod drivers;
pub mod errors;
pub mod storage;
pub mod token;

pub use self::{
    config::{create_token_storage, StorageConfig},
    consumer::ConsumerConfig,
    errors::{StorageError, StorageResult},
    storage::TokenStorage,
    token::Token,
};
