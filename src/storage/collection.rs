use crate::core::{Record, RecordId, Result, RosterError};
use im::Vector;
use serde::Serialize;
use std::collections::HashSet;

/// The authoritative, insertion-ordered list of records.
///
/// Backed by a persistent vector: every write returns a new collection that
/// shares structure with the old one, and the old value stays valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordCollection {
    records: Vector<Record>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from existing records, refusing duplicate ids.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut collected = Vector::new();

        for record in records {
            if !seen.insert(record.id()) {
                return Err(RosterError::DuplicateId(record.id()));
            }
            collected.push_back(record);
        }

        Ok(Self { records: collected })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.position(id).and_then(|idx| self.records.get(idx))
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(Record::id).collect()
    }

    pub fn max_id(&self) -> Option<RecordId> {
        self.records.iter().map(Record::id).max()
    }

    pub fn to_vec(&self) -> Vec<Record> {
        self.records.iter().cloned().collect()
    }

    /// New collection with `record` appended at the end.
    pub fn with_appended(&self, record: Record) -> Result<Self> {
        if self.contains(record.id()) {
            return Err(RosterError::DuplicateId(record.id()));
        }
        let mut records = self.records.clone();
        records.push_back(record);
        Ok(Self { records })
    }

    /// New collection with the record of the same id swapped in place.
    ///
    /// `None` when no record carries that id.
    pub fn with_replaced(&self, record: Record) -> Option<Self> {
        let idx = self.position(record.id())?;
        let mut records = self.records.clone();
        records.set(idx, record);
        Some(Self { records })
    }

    /// New collection without the record `id`, plus the removed record.
    pub fn without(&self, id: RecordId) -> Option<(Self, Record)> {
        let idx = self.position(id)?;
        let mut records = self.records.clone();
        let removed = records.remove(idx);
        Some((Self { records }, removed))
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = im::vector::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
