//! Ordered record collection with an id index.

use super::{CatalogError, CatalogResult};
use crate::model::record::{Record, RecordId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Immutable, ordered set of records loaded for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
    by_id: HashMap<RecordId, usize>,
}

impl Catalog {
    /// Empty catalog, shown while the real one is still loading.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from parsed records, enforcing record and id invariants.
    ///
    /// `origin` names the asset in error messages.
    pub fn from_records(origin: &str, records: Vec<Record>) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            record.validate().map_err(|err| {
                CatalogError::malformed(origin, format!("record at position {position}: {err}"))
            })?;

            match by_id.entry(record.id) {
                Entry::Occupied(existing) => {
                    return Err(CatalogError::malformed(
                        origin,
                        format!(
                            "duplicate record id {} at positions {} and {position}",
                            record.id,
                            existing.get()
                        ),
                    ));
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        Ok(Self { records, by_id })
    }

    /// Exact-match lookup. `None` is the normal outcome for unknown ids.
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.by_id
            .get(&id)
            .and_then(|position| self.records.get(*position))
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Records in document order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
