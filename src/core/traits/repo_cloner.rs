use std::path::Path;

use crate::core::errors::Result;

/// Port for the external "clone over SSH with exactly this key" capability.
pub trait RepositoryCloner {
    /// Clone `repository_url` into `destination`, authenticating only with
    /// the private key stored at `key_path`.
    ///
    /// Any abnormal outcome must be reported as `CloneFailed`.
    fn clone_repository(
        &self,
        repository_url: &str,
        key_path: &Path,
        destination: &Path,
    ) -> Result<()>;

    /// Configure an existing clone so later fetches use `key_path` only.
    fn pin_identity(&self, repo_dir: &Path, key_path: &Path) -> Result<()>;
}
