//! # Consumer Configuration
//!
//! A "blueprint": one named OAuth client setup. Every storage operation
//! receives it so that a real backend can key tokens per configuration; the
//! reference drivers accept it and ignore it.
use serde::{Deserialize, Serialize};

/// A named OAuth client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerConfig {
    /// Name identifying this configuration, e.g. `"github"`.
    pub name: String,
    /// Client id registered with the OAuth provider.
    pub client_id: String,
    /// Scopes requested during the handshake.
    #[serde(default)]
    pub scopes: Vec<String>,
}

impl ConsumerConfig {
    #[must_use]
    pub fn new(name: &str, client_id: &str) -> Self {
        Self {
            name: name.to_string(),
            client_id: client_id.to_string(),
            scopes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_scopes(mut self, scopes: &[&str]) -> Self {
        self.scopes = scopes.iter().map(ToString::to_string).collect();
        self
    }
}
