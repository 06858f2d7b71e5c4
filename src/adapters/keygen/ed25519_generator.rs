use rand::rngs::OsRng;
use ssh_key::{Algorithm, LineEnding, PrivateKey};

use crate::core::errors::{GdkmError, Result};
use crate::core::traits::key_generator::{GeneratedKeyPair, KeyGenerator};

/// Ed25519 deploy key generator producing OpenSSH encodings.
///
/// Private keys are emitted WITHOUT a passphrase. The keyring file that
/// stores them is plain text anyway, so encrypting individual keys would
/// only suggest a protection that does not exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Generator;

impl KeyGenerator for Ed25519Generator {
    fn generate(&self) -> Result<GeneratedKeyPair> {
        let private = PrivateKey::random(&mut OsRng, Algorithm::Ed25519).map_err(|e| {
            GdkmError::Generation {
                reason: format!("Failed to generate ed25519 key pair: {e}"),
            }
        })?;

        let mut public_key =
            private
                .public_key()
                .to_openssh()
                .map_err(|e| GdkmError::Generation {
                    reason: format!("Failed to encode public key: {e}"),
                })?;
        public_key.push('\n');

        let private_key = private
            .to_openssh(LineEnding::LF)
            .map_err(|e| GdkmError::Generation {
                reason: format!("Failed to encode private key: {e}"),
            })?
            .to_string();

        Ok(GeneratedKeyPair {
            public_key,
            private_key,
        })
    }
}
