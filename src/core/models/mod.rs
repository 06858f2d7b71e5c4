pub mod key_field;
pub mod key_pair_record;
pub mod keyring;
