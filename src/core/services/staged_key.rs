use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::errors::Result;

/// Fixed name of the transient private key file inside the staging directory.
pub const STAGED_KEY_FILE: &str = ".gdkm-deploy-key";

/// A private key written to disk for the duration of one clone.
///
/// The file is created owner-only (`0600`) and removed when the value is
/// dropped, whichever way the owning scope is left.
#[derive(Debug)]
pub struct StagedKey {
    path: PathBuf,
}

impl StagedKey {
    /// Write `private_key` to `STAGED_KEY_FILE` inside `dir`.
    ///
    /// A leftover file from an interrupted earlier run is replaced.
    pub fn stage(dir: &Path, private_key: &str) -> Result<Self> {
        let path = std::path::absolute(dir.join(STAGED_KEY_FILE))?;

        match fs::remove_file(&path) {
            Ok(()) => warn!(path = %path.display(), "replaced stale staged key"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        write_owner_only(&path, private_key)?;
        debug!(path = %path.display(), "staged private key");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedKey {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed staged private key"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove staged private key"
            ),
        }
    }
}

/// Create a new file readable and writable by the owner only.
///
/// Refuses to reuse an existing path so the permissions are never inherited
/// from someone else's file.
pub fn write_owner_only(path: &Path, contents: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    drop(file);
    remove_on_error(path, written)
}

/// Remove the file at `path` if writing it failed, so no partial key is left.
fn remove_on_error(path: &Path, written: io::Result<()>) -> Result<()> {
    let Err(e) = written else {
        return Ok(());
    };

    if let Err(rm) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %rm, "failed to remove partial key file");
    }
    Err(e.into())
}
