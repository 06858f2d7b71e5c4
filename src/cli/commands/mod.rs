pub mod clone;
pub mod generate;
pub mod get;
mod keyring_helpers;
