use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;

use super::keyring_helpers::{keyring_service, load_keyring};

/// Execute the `gdkm get` command.
///
/// Without arguments prints every id; with an id and a field name prints
/// that field. Key fields already end with a newline, the URL gets one.
pub fn execute(ctx: &Context, id: Option<&str>, field: Option<&str>) -> Result<()> {
    let service = keyring_service(ctx);
    let keyring = load_keyring(&service)?;

    let (Some(id), Some(field)) = (id, field) else {
        if keyring.is_empty() {
            output::warning("No key pairs stored yet. Run 'gdkm generate <id> <repository-url>'.");
        }
        for id in keyring.ids() {
            println!("{id}");
        }
        return Ok(());
    };

    let value = service.query(&keyring, id, field)?;
    if value.ends_with('\n') {
        print!("{value}");
    } else {
        println!("{value}");
    }
    Ok(())
}
