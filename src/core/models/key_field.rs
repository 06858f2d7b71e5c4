use std::str::FromStr;

use crate::core::errors::GdkmError;

/// The closed set of record fields that can be queried by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyField {
    PublicKey,
    PrivateKey,
    RepositoryUrl,
}

impl KeyField {
    /// Every queryable field, in display order.
    pub const ALL: [KeyField; 3] = [
        KeyField::PublicKey,
        KeyField::PrivateKey,
        KeyField::RepositoryUrl,
    ];

    /// Name used on the command line and in the keyring file.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyField::PublicKey => "PublicKey",
            KeyField::PrivateKey => "PrivateKey",
            KeyField::RepositoryUrl => "RepositoryURL",
        }
    }
}

impl FromStr for KeyField {
    type Err = GdkmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| GdkmError::UnknownField {
                field: s.to_string(),
            })
    }
}
