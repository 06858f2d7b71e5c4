use std::path::PathBuf;

/// All domain errors for gdkm.
///
/// Each variant maps to its own process exit status (see [`GdkmError::exit_code`])
/// so scripts can tell failures apart without parsing messages.
#[derive(Debug, thiserror::Error)]
pub enum GdkmError {
    #[error(
        "Key pair '{id}' does not exist\n\n  \
         Run 'gdkm get' to list the ids stored in the keyring."
    )]
    NotFound { id: String },

    #[error(
        "Key pair '{id}' already exists\n\n  \
         Deploy keys are never overwritten, the old key may still be in use.\n  \
         Pick another id."
    )]
    DuplicateId { id: String },

    #[error("Unrecognized field '{field}' (expected PublicKey, PrivateKey or RepositoryURL)")]
    UnknownField { field: String },

    #[error(
        "Malformed keyring {path}: {detail}\n\n  \
         The file was not modified. Fix or move it away before retrying."
    )]
    MalformedKeyring { path: PathBuf, detail: String },

    #[error("Destination {path} must be empty or absent to clone the repository")]
    DestinationNotEmpty { path: PathBuf },

    #[error("git clone failed: {reason}")]
    CloneFailed { reason: String },

    #[error("Key generation failed: {reason}")]
    Generation { reason: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GdkmError {
    /// Stable process exit status for this error kind.
    ///
    /// Status 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            GdkmError::NotFound { .. } => 3,
            GdkmError::DuplicateId { .. } => 4,
            GdkmError::UnknownField { .. } => 5,
            GdkmError::MalformedKeyring { .. } => 6,
            GdkmError::DestinationNotEmpty { .. } => 7,
            GdkmError::CloneFailed { .. } => 8,
            GdkmError::Generation { .. } => 9,
            GdkmError::Io(_) => 10,
            GdkmError::InvalidConfig { .. } => 11,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GdkmError>;
