use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{GdkmError, Result};

/// Name of the project-local configuration file.
pub const LOCAL_CONFIG_FILE: &str = "gdkm.toml";

/// Keyring file used when nothing else is configured.
pub const DEFAULT_KEYRING_FILE: &str = "keyring.json";

/// Top-level gdkm configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub keyring: KeyringSection,
    #[serde(default)]
    pub clone: CloneSection,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Otherwise `./gdkm.toml` is tried, then
    /// `<config dir>/gdkm/config.toml`; with neither present the built-in
    /// defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GdkmError::InvalidConfig {
                    detail: format!("config file {} not found", path.display()),
                });
            }
            return Self::from_file(path);
        }

        match Self::candidates().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Configuration files consulted when no explicit path is given, in order.
    fn candidates() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("gdkm").join("config.toml"));
        }
        paths
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| GdkmError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;

        if config.keyring.path.as_os_str().is_empty() {
            return Err(GdkmError::InvalidConfig {
                detail: format!("{}: [keyring] path must not be empty", path.display()),
            });
        }

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

/// The `[keyring]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyringSection {
    #[serde(default = "default_keyring_path")]
    pub path: PathBuf,
}

impl Default for KeyringSection {
    fn default() -> Self {
        Self {
            path: default_keyring_path(),
        }
    }
}

fn default_keyring_path() -> PathBuf {
    PathBuf::from(DEFAULT_KEYRING_FILE)
}

/// The `[clone]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CloneSection {
    #[serde(default = "default_git")]
    pub git: PathBuf,
    #[serde(default = "default_ssh")]
    pub ssh: String,
    /// Keep a copy of the key inside each clone (see `clone --keep-key`).
    #[serde(default)]
    pub deliver_key: bool,
}

impl Default for CloneSection {
    fn default() -> Self {
        Self {
            git: default_git(),
            ssh: default_ssh(),
            deliver_key: false,
        }
    }
}

fn default_git() -> PathBuf {
    PathBuf::from("git")
}

fn default_ssh() -> String {
    "ssh".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gdkm.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn empty_file_yields_defaults() {
        let (_dir, path) = write_config("");
        let config = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(config.keyring.path, PathBuf::from("keyring.json"));
        assert_eq!(config.clone.git, PathBuf::from("git"));
        assert_eq!(config.clone.ssh, "ssh");
        assert!(!config.clone.deliver_key);
    }

    #[test]
    fn reads_all_sections() {
        let (_dir, path) = write_config(
            r#"
[keyring]
path = "/srv/keys/deploy.json"

[clone]
git = "/usr/bin/git"
ssh = "ssh -F /dev/null"
deliver_key = true
"#,
        );
        let config = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(config.keyring.path, PathBuf::from("/srv/keys/deploy.json"));
        assert_eq!(config.clone.git, PathBuf::from("/usr/bin/git"));
        assert_eq!(config.clone.ssh, "ssh -F /dev/null");
        assert!(config.clone.deliver_key);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let (_dir, path) = write_config("[keyring\npath = 3");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, GdkmError::InvalidConfig { .. }));
    }

    #[test]
    fn empty_keyring_path_is_rejected() {
        let (_dir, path) = write_config("[keyring]\npath = \"\"\n");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, GdkmError::InvalidConfig { .. }));
    }

    #[test]
    fn missing_explicit_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, GdkmError::InvalidConfig { .. }));
    }
}
