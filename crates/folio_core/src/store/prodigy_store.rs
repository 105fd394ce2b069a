//! Remotely sourced Prodigy store and the fetch error taxonomy.
//!
//! # Responsibility
//! - Decode the Prodigy payload fetched once at startup.
//! - Name the two ways that fetch can fail, without retry semantics.
//!
//! # Invariants
//! - On any fetch or decode failure the store stays empty; callers substitute
//!   a static error fragment for the card list.

use crate::model::prodigy::ProdigyRecord;
use crate::store::{StoreError, StoreResult};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Relative URL of the read-only Prodigy resource.
pub const PRODIGY_DATA_URL: &str = "data/prodigy.json";

/// Ordered, read-only collection of [`ProdigyRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProdigyStore {
    records: Vec<ProdigyRecord>,
}

impl ProdigyStore {
    /// Builds a store from already-decoded records.
    ///
    /// # Errors
    /// - `DuplicateId` when two records share an id.
    pub fn from_records(records: Vec<ProdigyRecord>) -> StoreResult<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Decodes a JSON array of records and builds a store from it.
    pub fn from_json(payload: &str) -> StoreResult<Self> {
        let records: Vec<ProdigyRecord> = serde_json::from_str(payload)?;
        Self::from_records(records)
    }

    /// All records in source order.
    pub fn records(&self) -> &[ProdigyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Result of the single startup fetch: a populated store or the reason the
/// card list gets replaced by the static error fragment.
pub type FetchResult = Result<ProdigyStore, FetchError>;

/// Failure modes of the one remote fetch. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure: unreachable host, non-success status, etc.
    Request(String),
    /// Response arrived but is not a valid Prodigy payload.
    Decode(String),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(reason) => write!(f, "prodigy fetch failed: {reason}"),
            Self::Decode(reason) => write!(f, "prodigy payload invalid: {reason}"),
        }
    }
}

impl Error for FetchError {}

impl From<StoreError> for FetchError {
    fn from(value: StoreError) -> Self {
        Self::Decode(value.to_string())
    }
}
