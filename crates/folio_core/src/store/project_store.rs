//! Embedded project store.
//!
//! # Responsibility
//! - Parse the embedded project data compiled into the binary.
//! - Serve ordered featured/additional partitions and id lookups.
//!
//! # Invariants
//! - Partition order matches source order within each group.
//! - `get` never exposes deleted or hidden state; there is none.

use crate::model::project::ProjectRecord;
use crate::store::{StoreError, StoreResult};
use std::collections::HashSet;

/// Project data compiled into the binary, mirrored by the page at build time.
const EMBEDDED_PROJECTS_JSON: &str = include_str!("../../data/projects.json");

/// Ordered, read-only collection of [`ProjectRecord`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStore {
    records: Vec<ProjectRecord>,
}

impl ProjectStore {
    /// Builds a store from already-decoded records.
    ///
    /// # Errors
    /// - `Invalid` when any record fails `ProjectRecord::validate`.
    /// - `DuplicateId` when two records share an id.
    pub fn from_records(records: Vec<ProjectRecord>) -> StoreResult<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Decodes a JSON array of records and builds a store from it.
    pub fn from_json(payload: &str) -> StoreResult<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(payload)?;
        Self::from_records(records)
    }

    /// Loads the project data embedded at compile time.
    ///
    /// This is the synchronous startup path; a failure here means the data
    /// file shipped with the build is broken.
    pub fn embedded() -> StoreResult<Self> {
        Self::from_json(EMBEDDED_PROJECTS_JSON)
    }

    /// Looks up one record by stable id.
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records not tagged `additional`, in source order.
    pub fn featured(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter().filter(|record| !record.is_additional())
    }

    /// Records tagged `additional`, in source order.
    pub fn additional(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter().filter(|record| record.is_additional())
    }

    /// All records in source order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convenience for callers that hide the secondary section when empty.
    pub fn has_additional(&self) -> bool {
        self.additional().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectStore;

    #[test]
    fn embedded_data_parses_and_has_unique_ids() {
        let store = ProjectStore::embedded().expect("embedded data should be valid");
        assert!(!store.is_empty());
        assert_eq!(
            store.featured().count() + store.additional().count(),
            store.len()
        );
    }
}
