pub mod key_generator;
pub mod keyring_store;
pub mod repo_cloner;
