use std::path::PathBuf;
use std::sync::OnceLock;

use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;

static QUIET: OnceLock<bool> = OnceLock::new();

/// Record whether status output is muted for this process.
pub fn init(quiet: bool) {
    let _ = QUIET.set(quiet);
}

/// Whether `--quiet` was given.
pub fn is_quiet() -> bool {
    QUIET.get().copied().unwrap_or(false)
}

/// Settings shared by every command, resolved once from flags and config.
#[derive(Debug, Clone)]
pub struct Context {
    pub keyring_path: PathBuf,
    pub config: AppConfig,
}

impl Context {
    /// Resolve the keyring path: `--keyring` / `GDKM_KEYRING` win over the
    /// configuration file, which wins over the built-in default.
    pub fn resolve(args: &Cli) -> Result<Self> {
        let config = AppConfig::load(args.config.as_deref())?;
        let keyring_path = args
            .keyring
            .clone()
            .unwrap_or_else(|| config.keyring.path.clone());

        tracing::debug!(keyring = %keyring_path.display(), "resolved context");
        Ok(Self {
            keyring_path,
            config,
        })
    }
}
