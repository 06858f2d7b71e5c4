use tracing::debug;

use crate::core::errors::{GdkmError, Result};
use crate::core::models::key_field::KeyField;
use crate::core::models::key_pair_record::KeyPairRecord;
use crate::core::models::keyring::Keyring;
use crate::core::traits::key_generator::KeyGenerator;
use crate::core::traits::keyring_store::{KeyringStore, LoadedKeyring};

/// Manages deploy keys through a `KeyringStore` backend.
pub struct KeyringService<S: KeyringStore> {
    pub store: S,
}

impl<S: KeyringStore> KeyringService<S> {
    /// Load the keyring, synthesizing an empty one if none exists yet.
    pub fn load(&self) -> Result<LoadedKeyring> {
        self.store.load()
    }

    /// Generate a key pair for `id`, add it to `keyring`, and persist the result.
    ///
    /// The id is checked before any key is generated; nothing is saved on failure.
    pub fn generate<G: KeyGenerator>(
        &self,
        keyring: &mut Keyring,
        generator: &G,
        id: &str,
        repository_url: &str,
    ) -> Result<KeyPairRecord> {
        if keyring.contains(id) {
            return Err(GdkmError::DuplicateId { id: id.to_string() });
        }

        let pair = generator.generate()?;
        let record = KeyPairRecord {
            id: id.to_string(),
            public_key: pair.public_key,
            private_key: pair.private_key,
            repository_url: repository_url.to_string(),
        };

        keyring.insert(record.clone())?;
        self.store.save(keyring)?;
        debug!(id, "saved new key pair");

        Ok(record)
    }

    /// Read one field of the record stored under `id`.
    pub fn query<'k>(&self, keyring: &'k Keyring, id: &str, field: &str) -> Result<&'k str> {
        let record = keyring.get(id)?;
        let field: KeyField = field.parse()?;
        Ok(record.field(field))
    }
}
