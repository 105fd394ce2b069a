//! Domain model for portfolio project data.
//!
//! # Responsibility
//! - Define the canonical record shapes loaded from the embedded and remote
//!   data sources.
//! - Keep wire naming (camelCase JSON keys) in one place.
//!
//! # Invariants
//! - Every record is identified by a stable `id`, unique within its store.
//! - Records are immutable after load; no mutation helpers exist.

pub mod prodigy;
pub mod project;
