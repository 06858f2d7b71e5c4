use crate::adapters::keygen::ed25519_generator::Ed25519Generator;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;

use super::keyring_helpers::{keyring_service, load_keyring};

/// Execute the `gdkm generate` command.
///
/// Creates a key pair for `id`, saves the updated keyring and prints the
/// public key, ready to be registered as a deploy key by the repository owner.
pub fn execute(ctx: &Context, id: &str, repository_url: &str) -> Result<()> {
    let service = keyring_service(ctx);
    let mut keyring = load_keyring(&service)?;

    let record = service.generate(&mut keyring, &Ed25519Generator, id, repository_url)?;

    output::success(&format!(
        "Key pair '{id}' saved to {}",
        ctx.keyring_path.display()
    ));
    print!("{}", record.public_key);
    Ok(())
}
