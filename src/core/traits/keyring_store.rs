use crate::core::errors::Result;
use crate::core::models::keyring::Keyring;

/// Result of loading a keyring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedKeyring {
    pub keyring: Keyring,
    /// `true` when no keyring existed yet and an empty one was synthesized.
    pub fresh: bool,
}

/// Port for keyring persistence.
pub trait KeyringStore {
    /// Load the whole keyring. A missing backing file is not an error.
    fn load(&self) -> Result<LoadedKeyring>;

    /// Replace the persisted keyring with `keyring`.
    fn save(&self, keyring: &Keyring) -> Result<()>;
}
