use crate::adapters::key_stores::json_keyring_store::JsonKeyringStore;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::keyring::Keyring;
use crate::core::services::keyring_service::KeyringService;

/// Build the keyring service for the configured keyring file.
pub fn keyring_service(ctx: &Context) -> KeyringService<JsonKeyringStore> {
    KeyringService {
        store: JsonKeyringStore::new(ctx.keyring_path.clone()),
    }
}

/// Load the keyring, warning when it does not exist yet.
pub fn load_keyring(service: &KeyringService<JsonKeyringStore>) -> Result<Keyring> {
    let loaded = service.load()?;
    if loaded.fresh {
        output::warning(&format!(
            "Key ring {} does not exist",
            service.store.path().display()
        ));
    }
    Ok(loaded.keyring)
}
