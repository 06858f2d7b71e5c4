use crate::core::errors::Result;

/// A freshly generated key pair in OpenSSH textual encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedKeyPair {
    /// Authorized-keys line, newline terminated.
    pub public_key: String,
    /// Unencrypted OpenSSH private key block.
    pub private_key: String,
}

impl std::fmt::Debug for GeneratedKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedKeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Port for key pair generation.
///
/// Implementations live in `adapters::keygen`.
pub trait KeyGenerator {
    /// Generate a new key pair. Failures are fatal, callers do not retry.
    fn generate(&self) -> Result<GeneratedKeyPair>;
}
