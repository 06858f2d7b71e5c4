use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use signal_hook::consts::{SIGINT, SIGTERM};

use crate::adapters::git::git_cloner::GitCloner;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::clone_service::{CloneService, KeyDelivery};

use super::keyring_helpers::{keyring_service, load_keyring};

/// Execute the `gdkm clone` command.
///
/// Clones the repository registered for `id` into `destination`
/// (default: a directory named after the id), using only that key pair.
pub fn execute(
    ctx: &Context,
    id: &str,
    destination: Option<&Path>,
    keep_key: bool,
) -> Result<()> {
    let service = keyring_service(ctx);
    let keyring = load_keyring(&service)?;
    let record = keyring.get(id)?;

    let destination = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(id));

    // Interrupts stop git and fall through to the staged key cleanup
    // instead of terminating the process.
    let cancel = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&cancel))?;
    }

    let clone_config = &ctx.config.clone;
    let cloner = GitCloner::with_programs(
        clone_config.git.clone(),
        clone_config.ssh.clone(),
        cancel,
    );
    let clone_service = CloneService {
        cloner,
        staging_dir: PathBuf::from("."),
    };

    let delivery = if keep_key || clone_config.deliver_key {
        KeyDelivery::KeepCopy
    } else {
        KeyDelivery::StageOnly
    };

    output::header(&format!("Cloning {} into {}", record.repository_url, destination.display()));
    clone_service.clone_with_key(
        &record.repository_url,
        &record.private_key,
        &destination,
        delivery,
    )?;

    output::success(&format!("Cloned '{id}' into {}", destination.display()));
    if delivery == KeyDelivery::KeepCopy {
        output::success("Deploy key kept in .git/ for future fetches");
    }
    Ok(())
}
