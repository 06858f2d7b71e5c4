pub mod ed25519_generator;
