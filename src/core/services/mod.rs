pub mod clone_service;
pub mod keyring_service;
pub mod staged_key;
