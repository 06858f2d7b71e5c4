use serde::{Deserialize, Serialize};

use crate::core::models::key_field::KeyField;

/// One managed SSH identity: a deploy key scoped to a single repository.
///
/// Field names on disk follow the historical keyring format
/// (`Id`, `PublicKey`, `PrivateKey`, `RepositoryURL`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPairRecord {
    #[serde(rename = "Id")]
    pub id: String,

    /// Authorized-keys line, newline terminated.
    #[serde(rename = "PublicKey")]
    pub public_key: String,

    /// Unencrypted OpenSSH private key block.
    #[serde(rename = "PrivateKey")]
    pub private_key: String,

    #[serde(rename = "RepositoryURL")]
    pub repository_url: String,
}

impl KeyPairRecord {
    /// Read a single queryable field.
    pub fn field(&self, field: KeyField) -> &str {
        match field {
            KeyField::PublicKey => &self.public_key,
            KeyField::PrivateKey => &self.private_key,
            KeyField::RepositoryUrl => &self.repository_url,
        }
    }
}
