use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use crate::core::errors::{GdkmError, Result};
use crate::core::models::key_pair_record::KeyPairRecord;

/// The full set of managed deploy keys, keyed by id.
///
/// Serialized as a single JSON object mapping each id to its record.
/// Records are only ever added: there is no update and no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyring {
    records: BTreeMap<String, KeyPairRecord>,
}

impl Keyring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under its own id.
    ///
    /// Fails with `DuplicateId` if the id is taken, leaving the keyring as it was.
    pub fn insert(&mut self, record: KeyPairRecord) -> Result<()> {
        match self.records.entry(record.id.clone()) {
            Entry::Occupied(_) => Err(GdkmError::DuplicateId { id: record.id }),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Result<&KeyPairRecord> {
        self.records.get(id).ok_or_else(|| GdkmError::NotFound { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// All ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return the first map key that disagrees with its record's `Id`, if any.
    pub fn mismatched_id(&self) -> Option<(&str, &str)> {
        self.records
            .iter()
            .find(|(key, record)| **key != record.id)
            .map(|(key, record)| (key.as_str(), record.id.as_str()))
    }
}
