pub mod json_keyring_store;
